use crate::db::DbActorHandle;
use crate::error::{ApiErrorBody, ApiErrorObject, DaybookError};
use crate::server::routes::{exercise, goals, health::health_handler, sleep, todo, wellness};

use axum::{
    Json, Router,
    extract::Request,
    http::{HeaderName, HeaderValue, StatusCode, header::USER_AGENT},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
};
use base64::Engine as _;
use rand::RngCore;
use std::time::Instant;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::{error, info, warn};

const MAX_REQUEST_ID_LEN: usize = 128;
const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Shared handler state. The store handle is the only thing shared between requests.
#[derive(Clone)]
pub struct DaybookState {
    pub db: DbActorHandle,
}

impl DaybookState {
    pub fn new(db: DbActorHandle) -> Self {
        Self { db }
    }
}

fn generate_request_id() -> String {
    // 72 bits => 12 chars base64url (no padding).
    let mut bytes = [0u8; 9];
    rand::rng().fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

async fn not_found_handler(req: Request) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ApiErrorBody {
            inner: ApiErrorObject {
                code: "NOT_FOUND".to_string(),
                message: format!("No route for {} {}", req.method(), req.uri().path()),
                details: None,
            },
        }),
    )
        .into_response()
}

/// One log line per request; level follows the response status class.
async fn access_log(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let request_id = req
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty() && v.len() <= MAX_REQUEST_ID_LEN)
        .map_or_else(generate_request_id, str::to_string);

    let user_agent = req
        .headers()
        .get(USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();

    let start = Instant::now();
    let mut resp = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        resp.headers_mut().insert(X_REQUEST_ID, value);
    }

    let status = resp.status().as_u16();
    let latency_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    if resp.status().is_server_error() {
        error!(status, %request_id, %method, %path, latency_ms, %user_agent, "request");
    } else if resp.status().is_client_error() {
        warn!(status, %request_id, %method, %path, latency_ms, %user_agent, "request");
    } else {
        info!(status, %request_id, %method, %path, latency_ms, %user_agent, "request");
    }

    resp
}

/// CORS for the separately hosted front end: one origin, any method and header, credentials
/// allowed. Requests from other origins get no `access-control-allow-origin` header.
pub fn cors_layer(frontend_origin: &str) -> Result<CorsLayer, DaybookError> {
    let origin = HeaderValue::from_str(frontend_origin.trim().trim_end_matches('/')).map_err(
        |e| DaybookError::Config(format!("invalid frontend_origin {frontend_origin:?}: {e}")),
    )?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// Composes the five resource routers, the health endpoint and the cross-cutting layers.
pub fn daybook_router(state: DaybookState, frontend_origin: &str) -> Result<Router, DaybookError> {
    let cors = cors_layer(frontend_origin)?;

    Ok(Router::new()
        .route("/", get(health_handler))
        .merge(todo::router())
        .merge(sleep::router())
        .merge(wellness::router())
        .merge(exercise::router())
        .merge(goals::router())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(cors)
        .layer(middleware::from_fn(access_log)))
}
