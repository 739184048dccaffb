pub mod handlers;
pub mod openapi;
pub mod services;
pub mod state;
pub mod types;

use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    http::Uri,
    routing::{get, post},
};
use tokio::net::TcpListener;

// OpenAPI / Swagger UI
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::GatewayConfig;
use services::OrderService;
use state::AppState;
use types::ApiError;

/// Build the full application router
///
/// `api_prefix` is prepended to every API route (`""` mounts them at the root).
/// Docs are served outside the prefix at `/docs`.
pub fn build_router(order_service: Arc<dyn OrderService>, api_prefix: &str) -> Router {
    let state = Arc::new(AppState::new(order_service));

    // ==========================================================================
    // Order Routes
    // ==========================================================================
    // Both lookups share the `{id}` segment name; the router rejects sibling
    // captures with different names.
    let order_routes = Router::new()
        .route("/order", post(handlers::create_order))
        .route("/{id}/order", get(handlers::get_order_by_id))
        .route("/{id}/orders", get(handlers::get_orders_by_user_id));

    let app = Router::new()
        .route(&format!("{}/health", api_prefix), get(handlers::health_check))
        .nest(&format!("{}/orders", api_prefix), order_routes)
        .fallback(route_not_found);

    app.with_state(state)
        // Stateless, added after with_state
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {}", uri.path()))
}

/// Start HTTP Gateway server
pub async fn run_server(
    config: &GatewayConfig,
    order_service: Arc<dyn OrderService>,
) -> anyhow::Result<()> {
    let app = build_router(order_service, &config.api_prefix);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr).await.with_context(|| {
        format!(
            "Failed to bind to {} (port {} may already be in use)",
            addr, config.port
        )
    })?;

    tracing::info!("🚀 Gateway listening on http://{}", addr);
    tracing::info!("📂 Order API: {}/orders/*", config.api_prefix);
    tracing::info!("📖 API Docs: http://{}/docs", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
