//! Contact form endpoint.

use std::sync::Arc;

use axum::extract::State;
use axum::http::HeaderMap;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::validation::{ContactForm, validate_contact};

/// Payload for an accepted lead.
#[derive(Debug, Serialize)]
struct ContactResponse {
    success: bool,
    message: String,
}

pub(super) fn router() -> Router<Arc<AppState>> {
    Router::new().route("/contact", post(submit_contact))
}

async fn submit_contact(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(form): Json<ContactForm>,
) -> ApiResult<Json<ContactResponse>> {
    let key = contact_client_key(&headers);
    if !state.contact_limiter.allow(key) {
        return Err(ApiError::ContactRateLimited);
    }

    validate_contact(&form).map_err(ApiError::Validation)?;

    if !state.notifier.send_lead(&form).await {
        return Err(ApiError::Delivery);
    }

    Ok(Json(ContactResponse {
        success: true,
        message: "Заявка успешно отправлена! Свяжемся с вами в ближайшее время.".to_string(),
    }))
}

/// Rate-limit key for the endpoint: `x-forwarded-for`, then `x-real-ip`.
fn contact_client_key(headers: &HeaderMap) -> &str {
    headers
        .get("x-forwarded-for")
        .or_else(|| headers.get("x-real-ip"))
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown")
}
