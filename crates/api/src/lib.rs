//! User API Library
//!
//! HTTP transport over the user use cases: translates requests into
//! use-case inputs and use-case results or errors into JSON responses.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use user_service_lib::UserModule;

use crate::config::ApiConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the application router for a wired user module.
pub fn app(module: UserModule, config: ApiConfig) -> axum::Router {
    let state = AppState::new(module, config);
    create_router(state).layer(TraceLayer::new_for_http())
}

/// Run the HTTP server with the given configuration.
pub async fn run_server(config: ApiConfig) -> Result<(), Box<dyn std::error::Error>> {
    let module = UserModule::connect(&config.users).await?;

    let addr: SocketAddr = format!("{}:{}", config.service.host, config.service.port).parse()?;
    let service_name = config.service.service_name.clone();
    let app = app(module, config);

    info!("{} listening on {}", service_name, addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("{} stopped", service_name);
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
