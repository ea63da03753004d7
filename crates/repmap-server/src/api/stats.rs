use axum::{extract::State, Extension, Json};
use serde::Serialize;

use repmap_core::{coverage_stats, CoverageStats, PayloadSource};

use crate::middleware::RequestId;

use super::{ApiResponse, AppState};

#[derive(Debug, Serialize)]
pub(super) struct StatsData {
    #[serde(flatten)]
    pub coverage: CoverageStats,
    pub source: PayloadSource,
    pub dropped_records: usize,
}

pub(super) async fn get_stats(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<StatsData>> {
    let snapshot = &state.snapshot;
    ApiResponse::new(
        StatsData {
            coverage: coverage_stats(&snapshot.representatives, snapshot.registry),
            source: snapshot.source,
            dropped_records: snapshot.dropped,
        },
        req_id,
    )
}
