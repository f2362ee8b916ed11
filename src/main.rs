use std::time::Duration;

use centralauth::adapters::http::create_router;
use centralauth::adapters::http::AppState;
use centralauth::adapters::memory::spawn_sweeper;
use centralauth::bootstrap::{wire_reference_authority, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    let (cas, password_handler) = wire_reference_authority(&config);

    spawn_sweeper(cas.clone(), Duration::from_secs(60));

    let state = AppState::new(cas, password_handler);
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "central authentication service listening");
    axum::serve(listener, router).await?;

    Ok(())
}
