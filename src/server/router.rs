use crate::config::ServerConfig;
use crate::db::{FoodGroup, FoodMoment, MacronutrientGroup, MicronutrientGroup, SpecialCondition};
use crate::server::routes::{catalog, health};

use axum::{
    Router,
    extract::Request,
    http::{HeaderName, HeaderValue, StatusCode, Version, header::USER_AGENT},
    middleware::{self, Next},
    response::Response,
};
use base64::Engine as _;
use rand::RngCore;
use sqlx::SqlitePool;
use std::time::Instant;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::{error, info, warn};

const MAX_REQUEST_ID_LEN: usize = 128;
const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

fn generate_request_id() -> String {
    // 96 bits => 16 chars base64url (no padding).
    let mut bytes = [0u8; 12];
    rand::rng().fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

fn format_http_version(version: Version) -> &'static str {
    match version {
        Version::HTTP_09 => "HTTP/0.9",
        Version::HTTP_10 => "HTTP/1.0",
        Version::HTTP_11 => "HTTP/1.1",
        Version::HTTP_2 => "HTTP/2",
        Version::HTTP_3 => "HTTP/3",
        _ => "HTTP/?",
    }
}

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

async fn not_found_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}

async fn access_log(req: Request, next: Next) -> Response {
    // Capture request metadata before moving `req` into the handler stack.
    let method = req.method().clone();
    let uri = req.uri().clone();
    let version = req.version();

    let request_id = req
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_LEN)
        .map(str::to_string)
        .unwrap_or_else(generate_request_id);

    let user_agent = req
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let start = Instant::now();
    let mut resp = next.run(req).await;

    // Always reflect `x-request-id`, even if the client didn't send one.
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        resp.headers_mut().insert(X_REQUEST_ID, value);
    }

    let status = resp.status();
    let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    let line = format!(
        "| {:>3} | {} | {:^7} | {:<8} | {} | {}ms | {}",
        status.as_u16(),
        request_id,
        method.as_str(),
        format_http_version(version),
        uri.path(),
        latency_ms,
        user_agent
    );
    if status.is_server_error() {
        error!("{line}");
    } else if status.is_client_error() {
        warn!("{line}");
    } else {
        info!("{line}");
    }

    resp
}

/// `*` mirrors the caller's origin and allows credentials; an explicit list
/// restricts cross-origin access to those origins.
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o.trim() == "*") {
        return CorsLayer::very_permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin.trim()) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin = %origin, error = %e, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

pub fn catalog_router(state: AppState, cfg: &ServerConfig) -> Router {
    let routes = Router::new()
        .merge(health::router())
        .merge(catalog::router::<FoodGroup>())
        .merge(catalog::router::<FoodMoment>())
        .merge(catalog::router::<MacronutrientGroup>())
        .merge(catalog::router::<MicronutrientGroup>())
        .merge(catalog::router::<SpecialCondition>());

    let routes = match cfg.normalized_context_path() {
        Some(prefix) => Router::new().nest(&prefix, routes),
        None => routes,
    };

    routes
        .fallback(not_found_handler)
        .with_state(state)
        .layer(cors_layer(&cfg.cors_allow_origins))
        .layer(middleware::from_fn(access_log))
}
