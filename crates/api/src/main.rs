use anyhow::Context;

use storefront_api::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    storefront_observability::init();

    let config = ApiConfig::from_env().context("invalid configuration")?;
    let bind_addr = config.bind_addr;

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!(
        api_base_url = %config.api_base_url,
        static_dir = %config.static_dir.display(),
        "listening on {}",
        listener.local_addr()?
    );

    let app = storefront_api::app::build_app(config);
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
