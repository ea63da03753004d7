use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use repmap_geo::{paint_regions, MapView, RegionPaint};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct MapQuery {
    pub selected: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct MapData {
    pub selected: Option<String>,
    pub regions: Vec<RegionPaint>,
    pub unmatched_features: Vec<String>,
}

pub(super) async fn get_map(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<MapQuery>,
) -> Result<Json<ApiResponse<MapData>>, ApiError> {
    let snapshot = &state.snapshot;
    let join = match (&snapshot.map, &snapshot.join) {
        (MapView::Ready(_), Some(join)) => join,
        (MapView::Unavailable { message }, _) => {
            return Err(ApiError::new(req_id.0, "map_unavailable", message.clone()));
        }
        (MapView::Ready(_), None) => {
            tracing::error!("map is ready but the boundary join is missing");
            return Err(ApiError::new(req_id.0, "internal_error", "map state is inconsistent"));
        }
    };

    let selected = params.selected.filter(|code| !code.trim().is_empty());
    let regions = paint_regions(
        snapshot.registry,
        join,
        &snapshot.representatives,
        selected.as_deref(),
    );

    Ok(ApiResponse::new(
        MapData {
            selected,
            regions,
            unmatched_features: join.unmatched_features.clone(),
        },
        req_id,
    ))
}
