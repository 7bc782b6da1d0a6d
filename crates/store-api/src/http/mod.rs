//! # HTTP Interface
//!
//! Thin axum handlers that translate HTTP verbs into calls on the domain clients.
//!
//! | Method | Path | Success | Failure |
//! |--------|------|---------|---------|
//! | GET | `/users`, `/products` | 200 + array | 500 |
//! | POST | `/users`, `/products` | 201 + `{message}` | 400 + `{errors}` |
//! | GET | `/users/{id}`, `/products/{id}` | 200 + record | 404 + `{message}` |
//! | PUT | `/users/{id}`, `/products/{id}` | 200 + `{message}` | 400 / 404 |
//! | DELETE | `/users/{id}`, `/products/{id}` | 200 + `{message}` | 404 |

pub mod config;
pub mod error;
pub mod extract;
pub mod products;
pub mod users;

pub use config::ServerConfig;
pub use error::{ApiError, ErrorsResponse, MessageResponse, Resource};

use crate::clients::{ProductClient, UserClient};
use axum::{routing::get, Router};
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Shared handler state: one client per collection.
#[derive(Clone)]
pub struct AppState {
    pub users: UserClient,
    pub products: ProductClient,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves the router on `config` until `shutdown` resolves.
pub async fn serve<F>(config: &ServerConfig, state: AppState, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}
