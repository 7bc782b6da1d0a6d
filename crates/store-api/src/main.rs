use store_api::http::{self, ServerConfig};
use store_api::lifecycle::{setup_tracing, StoreSystem, SystemError};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    setup_tracing();

    info!("Starting store API");

    let system = StoreSystem::new();
    let config = ServerConfig::default();

    http::serve(&config, system.app_state(), shutdown_signal()).await?;

    system.shutdown().await?;

    info!("Store API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Ctrl-C received, shutting down");
}
