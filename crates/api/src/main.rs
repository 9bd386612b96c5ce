use std::sync::Arc;

use anyhow::Context;

use catalog_api::config::ApiConfig;
use catalog_products::Catalog;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let config = ApiConfig::from_env()?;
    let catalog = Arc::new(Catalog::seeded().context("failed to load product catalog")?);

    let app = catalog_api::app::build_app(catalog);

    let addr = config.address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(catalog_api::server::shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}
