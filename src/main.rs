use std::sync::Arc;
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use vehicle_tracker::{api, build_state, clock::SystemClock, config::Config};


type GenericError = Box<dyn std::error::Error + Send + Sync + 'static>;


#[tokio::main]
async fn main() -> Result<(), GenericError> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;
    tracing::info!(?config, "starting vehicle-tracker");

    let state = build_state(&config, Arc::new(SystemClock));
    let router = api::router(state);

    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    tracing::info!("server running on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;

    Ok(())
}
