use axum::{
    Extension, Router,
    routing::{delete, get, post},
};
use podsearch::catalog::client::{DEFAULT_CATALOG_URL, ItunesCatalog};
use podsearch::library::handlers::{
    handle_add_favourite, handle_add_saved, handle_list_favourite, handle_list_saved,
    handle_remove_favourite, handle_remove_saved,
};
use podsearch::orchestrator::handlers::{handle_results, handle_search};
use podsearch::orchestrator::service::SearchOrchestrator;
use std::net::SocketAddr;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let bind_addr: SocketAddr = std::env::var("BIND")
        .unwrap_or_else(|_| "127.0.0.1:4000".to_string())
        .parse()?;
    let catalog_url =
        std::env::var("CATALOG_URL").unwrap_or_else(|_| DEFAULT_CATALOG_URL.to_string());

    let catalog = Arc::new(ItunesCatalog::new(&catalog_url));
    let orchestrator = SearchOrchestrator::new(catalog);

    let app = Router::new()
        .route("/search", post(handle_search))
        .route("/results", get(handle_results))
        .route("/saved", get(handle_list_saved).post(handle_add_saved))
        .route("/saved/{id}", delete(handle_remove_saved))
        .route(
            "/favourites",
            get(handle_list_favourite).post(handle_add_favourite),
        )
        .route("/favourites/{id}", delete(handle_remove_favourite))
        .layer(Extension(orchestrator));

    tracing::info!("catalog search service listening on {}", bind_addr);
    tracing::info!("catalog endpoint: {}", catalog_url);
    axum::serve(tokio::net::TcpListener::bind(bind_addr).await?, app).await?;

    Ok(())
}
