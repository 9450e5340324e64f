//! HTTP routing.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

mod contact;
mod currency;

/// Builds the application router with CORS and request tracing applied.
pub fn app_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(currency::router())
        .merge(contact::router());

    Router::new()
        .nest("/api", api)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
