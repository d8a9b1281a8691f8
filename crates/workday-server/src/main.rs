use std::sync::Arc;

use anyhow::Context;
use workday_server::{create_router, AppState, HolidayApiProvider, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "workday_server=info,workday_engine=info".into()),
        )
        .init();

    let config = ServerConfig::from_env();
    let provider = Arc::new(HolidayApiProvider::new(config.holiday_url.clone()));
    let app = create_router(AppState { provider });

    let listener = tokio::net::TcpListener::bind(&config.addr)
        .await
        .with_context(|| format!("bind {}", config.addr))?;
    tracing::info!(addr = %config.addr, "workday-server listening");

    axum::serve(listener, app).await.context("serve")?;
    Ok(())
}
