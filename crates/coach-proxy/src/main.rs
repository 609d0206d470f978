//! `coach-proxy` binary entrypoint.
//!
//! Loads `.env` if present, then starts the Actix server using configuration
//! from environment variables.

use coach_proxy::{serve, ProxyConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing `.env` is fine; real deployments set the environment directly.
    dotenvy::dotenv().ok();

    // Respect `RUST_LOG` if set; otherwise default to info.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ProxyConfig::from_env();
    serve(config).await
}
