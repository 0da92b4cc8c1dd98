//! Local HTTP shell (axum) exposing the same routes as the Lambda.

use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{Method, Uri};
use tower_http::cors::CorsLayer;

use super::helpers::ApiResponse;
use super::routes;
use crate::core::config::AppConfig;

/// Every request goes through [`routes::dispatch`], so 404/405 bodies and
/// path normalisation match the Lambda adapter.
async fn dispatch_request(
    State(config): State<Arc<AppConfig>>,
    method: Method,
    uri: Uri,
) -> ApiResponse {
    routes::dispatch(&config, method.as_str(), uri.path()).await
}

/// Builds the router with permissive CORS on every route.
pub fn router(config: AppConfig) -> Router {
    Router::new()
        .fallback(dispatch_request)
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(config))
}
