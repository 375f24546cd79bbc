use std::net::{Ipv4Addr, SocketAddr};
use std::sync::Arc;

use registra::adapters::{MemoryAccounts, RegexEmailValidator};
use registra::config::Configuration;
use registra::signup::SignupController;
use registra::{AppState, app};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Read configuration file.
    let config = Configuration::default().read()?;

    let accounts =
        MemoryAccounts::new(&config.argon2.clone().unwrap_or_default())?;
    let signup = SignupController::new(
        Arc::new(RegexEmailValidator),
        Arc::new(accounts),
    );

    let state = AppState {
        config: Arc::clone(&config),
        signup: Arc::new(signup),
    };

    let address = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));
    let listener = tokio::net::TcpListener::bind(address).await?;
    tracing::info!(%address, "server listening");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolve on SIGINT so axum can drain in-flight requests.
async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(
            error = error.to_string(),
            "cannot install shutdown signal handler"
        );
        return;
    }

    tracing::info!("shutdown signal received");
}
