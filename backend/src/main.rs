//! Proxy server entry point.

use std::sync::Arc;

use anyhow::Context;
use backend::{api::search::SolrProxy, server_extra::router, settings::ProxySettings};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_file(true)
        .with_line_number(true)
        .init();

    let settings = ProxySettings::from_env().context("Failed to load settings")?;
    let bind_addr = settings.bind_addr;

    tracing::info!("Search index: {}", settings.index_id);
    tracing::info!("Solr server: {} ({})", settings.server_label, settings.server_url);
    tracing::info!("Cache max-age: {}s", settings.max_age());

    let proxy = Arc::new(SolrProxy::new(settings)?);
    let app = router(proxy);

    tracing::info!("HTTP server listening on {}", bind_addr);
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}
