use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::Serialize;

use repmap_core::{contact_panel, ContactPanel};

use crate::middleware::RequestId;

use super::{ApiResponse, AppState};

#[derive(Debug, Serialize)]
pub(super) struct RegionItem {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub(super) struct DistrictItem {
    pub id: String,
    pub name: String,
    pub regions: Vec<RegionItem>,
}

pub(super) async fn list_regions(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<DistrictItem>>> {
    let registry = state.snapshot.registry;
    let data = registry
        .districts()
        .iter()
        .map(|district| DistrictItem {
            id: district.id.clone(),
            name: district.name.clone(),
            regions: registry
                .expand_district(&district.id)
                .map(|region| RegionItem {
                    id: region.id.clone(),
                    name: region.name.clone(),
                })
                .collect(),
        })
        .collect();

    ApiResponse::new(data, req_id)
}

/// Contact panel for a clicked region or district. Unknown codes produce an
/// empty panel headed by the raw code.
pub(super) async fn get_region(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(code): Path<String>,
) -> Json<ApiResponse<ContactPanel>> {
    let snapshot = &state.snapshot;
    let panel = contact_panel(&snapshot.representatives, Some(&code), snapshot.registry);
    ApiResponse::new(panel, req_id)
}
