//! HTTP request handlers for the utility backend API.
//!
//! This module builds the router and contains the handler functions for all
//! endpoints. Routes under `/api` answer JSON; everything else falls through
//! to the embedded frontend.

use std::net::{IpAddr, SocketAddr};

use axum::{
    Json, Router,
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, Method, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use chrono::Local;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use uuid::Uuid;

use crate::assets;
use crate::error::ServiceError;
use crate::geo;

use super::response::{ApiError, ApiErrorResponse, HealthResponse, HolidayResponse, IpResponse};
use super::state::AppState;

/// Creates the application router with all endpoints.
///
/// `/api/*` routes answer JSON and return a JSON 404 for unknown paths; any
/// other path is resolved against the embedded frontend. A permissive CORS
/// layer covers every response.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/ip", get(ip_handler))
        .route("/holiday", get(holiday_today_handler))
        .route("/holiday/:date", get(holiday_by_date_handler))
        .fallback(api_not_found);

    Router::new()
        .nest("/api", api)
        .route("/health", get(health_handler))
        .fallback(assets::static_handler)
        .layer(cors_layer())
        .with_state(state)
}

/// Builds the CORS layer applied to all responses.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

/// Handler for GET /api/holiday (today's classification).
async fn holiday_today_handler(State(state): State<AppState>) -> impl IntoResponse {
    let today = Local::now().format("%Y-%m-%d").to_string();
    let result = state.classifier().classify(&today);

    info!(date = %today, category = %result.category, "classified current date");
    Json(HolidayResponse::from(result))
}

/// Handler for GET /api/holiday/:date.
///
/// The date format is validated here so malformed input gets a 400; the
/// classifier's own weekday fallback never decides a response on this path.
async fn holiday_by_date_handler(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> axum::response::Response {
    let correlation_id = Uuid::new_v4();

    if chrono::NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
        warn!(correlation_id = %correlation_id, input = %date, "rejected malformed date");
        return ApiErrorResponse::from(ServiceError::InvalidDate { input: date }).into_response();
    }

    let result = state.classifier().classify(&date);
    info!(
        correlation_id = %correlation_id,
        date = %date,
        category = %result.category,
        "classified date"
    );
    Json(HolidayResponse::from(result)).into_response()
}

/// Handler for GET /api/ip.
async fn ip_handler(
    headers: HeaderMap,
    connect_info: Option<ConnectInfo<SocketAddr>>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    let ip = client_ip(&headers, connect_info.map(|ConnectInfo(addr)| addr));

    let response = match ip.parse::<IpAddr>() {
        Ok(addr) => {
            let geo_info = geo::lookup(addr);
            IpResponse {
                ip,
                version: geo::ip_version(addr).to_string(),
                country: Some(geo_info.country),
                country_code: Some(geo_info.country_code),
                region: geo_info.region,
                city: geo_info.city,
                latitude: geo_info.latitude,
                longitude: geo_info.longitude,
            }
        }
        Err(_) => IpResponse {
            ip,
            version: "unknown".to_string(),
            country: None,
            country_code: None,
            region: None,
            city: None,
            latitude: None,
            longitude: None,
        },
    };

    info!(correlation_id = %correlation_id, ip = %response.ip, version = %response.version, "ip lookup");
    Json(response)
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::ok())
}

/// JSON 404 for unknown paths under /api.
async fn api_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ApiError::not_found()))
}

/// Extracts the client IP with header precedence: the first non-empty entry
/// of `X-Forwarded-For`, then `X-Real-IP`, then the peer address.
fn client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    if let Some(forwarded) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    if let Some(real_ip) = headers.get("x-real-ip").and_then(|v| v.to_str().ok()) {
        let real_ip = real_ip.trim();
        if !real_ip.is_empty() {
            return real_ip.to_string();
        }
    }

    peer.map_or_else(|| "unknown".to_string(), |addr| addr.ip().to_string())
}
