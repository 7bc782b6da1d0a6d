//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate. The format
//! is compact and hides the module prefix (`with_target(false)`); actors tag their
//! events with an `entity_type` field instead.
//!
//! The level comes from `RUST_LOG` and defaults to `info`:
//!
//! ```bash
//! # Lifecycle, mutations and HTTP requests
//! cargo run
//!
//! # Full payloads on every request
//! RUST_LOG=debug cargo run
//!
//! # Only the framework
//! RUST_LOG=actor_framework=debug cargo run
//! ```
//!
//! With the default level a create followed by a failed update reads:
//!
//! ```text
//! INFO Actor started entity_type="User"
//! INFO Listening addr=0.0.0.0:3000
//! INFO Created entity_type="User" id=user_1 size=1
//! WARN Update failed entity_type="User" id=user_1 error=User validation error: cpf must be 11 numeric characters
//! ```

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}
