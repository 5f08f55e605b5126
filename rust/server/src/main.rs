//! mdx-export-server entry point.

use anyhow::Result;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use mdx_export_server::{Settings, router};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,mdx_export_server=debug")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::load()?;
    let listener = tokio::net::TcpListener::bind(&settings.bind).await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, router(settings)).await?;
    Ok(())
}
