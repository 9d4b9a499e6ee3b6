use std::sync::Arc;
use storefront::{AppState, CatalogLoader, Dispatcher, TokioDelay, setup_environment, ui};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Environment (dotenv, config, logging)
    let config = setup_environment()?;

    tracing::info!(
        base_url = %config.catalog_base_url,
        page_size = config.page_size,
        theme = %config.theme,
        "Storefront starting"
    );

    // 2. Catalog client
    let client = config.client_config().build_http_client()?;
    let loader = CatalogLoader::new(Arc::new(client));

    // 3. State + effect runner
    let dispatcher = Dispatcher::new(AppState::from_config(&config), loader, Arc::new(TokioDelay));

    // 4. Run the UI until quit
    if let Err(e) = ui::run(dispatcher).await {
        tracing::error!("UI error: {}", e);
        return Err(e);
    }

    tracing::info!("Storefront stopped");
    Ok(())
}
