mod map;
mod regions;
mod representatives;
mod stats;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, RequestId};
use crate::snapshot::Snapshot;

#[derive(Clone)]
pub struct AppState {
    pub snapshot: Arc<Snapshot>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    map: &'static str,
    representatives: usize,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HostData {
    is_admin: bool,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub(super) fn new(data: T, req_id: RequestId) -> Json<Self> {
        Json(Self {
            data,
            meta: ResponseMeta::new(req_id.0),
        })
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "map_unavailable" => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/host", get(host))
        .route(
            "/api/v1/representatives",
            get(representatives::list_representatives),
        )
        .route("/api/v1/regions", get(regions::list_regions))
        .route("/api/v1/regions/{code}", get(regions::get_region))
        .route("/api/v1/map", get(map::get_map))
        .route("/api/v1/stats", get(stats::get_stats))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let snapshot = &state.snapshot;
    let representatives = snapshot.representatives.len();

    if snapshot.join.is_some() {
        (
            StatusCode::OK,
            ApiResponse::new(
                HealthData {
                    status: "ok",
                    map: "ok",
                    representatives,
                },
                req_id,
            ),
        )
    } else {
        tracing::warn!("health check: region boundaries unavailable");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            ApiResponse::new(
                HealthData {
                    status: "degraded",
                    map: "unavailable",
                    representatives,
                },
                req_id,
            ),
        )
    }
}

/// Admin flag for UI hints only. The session token is never echoed.
async fn host(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<HostData>> {
    ApiResponse::new(
        HostData {
            is_admin: state.snapshot.host.is_admin,
        },
        req_id,
    )
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
