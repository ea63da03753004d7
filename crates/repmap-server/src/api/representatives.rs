use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::Deserialize;

use repmap_core::{list_view, ListView};

use crate::middleware::RequestId;

use super::{ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct SearchQuery {
    pub q: Option<String>,
}

/// Card list filtered by the free-text query; a missing query lists everyone.
pub(super) async fn list_representatives(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SearchQuery>,
) -> Json<ApiResponse<ListView>> {
    let snapshot = &state.snapshot;
    let view = list_view(
        &snapshot.representatives,
        params.q.as_deref().unwrap_or_default(),
        snapshot.registry,
    );
    ApiResponse::new(view, req_id)
}
