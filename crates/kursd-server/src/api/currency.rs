//! Daily rates endpoint.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{NaiveDate, NaiveTime, Utc};
use kursd_calendar::HolidayCalendar;
use kursd_types::{RateQuote, diff_snapshots, format_feed_date};
use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Downstream cache policy for successful responses.
const CACHE_CONTROL: &str = "public, s-maxage=3600, stale-while-revalidate=86400";

#[derive(Debug, Deserialize)]
struct CurrencyQuery {
    base: Option<String>,
}

/// Payload of the rates endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CurrencyResponse {
    base: String,
    rates: Vec<RateQuote>,
    last_update: i64,
    working_date: String,
}

pub(super) fn router() -> Router<Arc<AppState>> {
    Router::new().route("/currency", get(get_rates))
}

async fn get_rates(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CurrencyQuery>,
    headers: HeaderMap,
) -> ApiResult<Response> {
    let key = forwarded_client_key(&headers);
    if !state.currency_limiter.allow(key) {
        return Err(ApiError::RateLimited);
    }

    let base = query.base.unwrap_or_else(|| "RUB".to_string());
    let today = Utc::now().date_naive();
    let payload = build_rates_response(&state, base, today).await?;

    Ok(([(header::CACHE_CONTROL, CACHE_CONTROL)], Json(payload)).into_response())
}

/// Assembles the rates payload for the working day covering `today`.
///
/// The current and previous working-day snapshots are fetched
/// concurrently, through the cache.
async fn build_rates_response(
    state: &AppState,
    base: String,
    today: NaiveDate,
) -> Result<CurrencyResponse, ApiError> {
    let calendar = HolidayCalendar::global();
    let working_today = calendar.last_working_day(today);
    let working_previous = calendar.previous_working_day(working_today);

    let (current, previous) = futures::try_join!(
        state.cache.get_or_fetch(&state.feed, working_today),
        state.cache.get_or_fetch(&state.feed, working_previous),
    )?;

    Ok(CurrencyResponse {
        base,
        rates: diff_snapshots(&current, &previous),
        last_update: trading_day_millis(working_today),
        working_date: format_feed_date(working_today),
    })
}

/// Epoch milliseconds of the trading day's midnight, UTC.
fn trading_day_millis(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}

/// Rate-limit key for the endpoint: the `x-forwarded-for` value, verbatim.
fn forwarded_client_key(headers: &HeaderMap) -> &str {
    headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown")
}
