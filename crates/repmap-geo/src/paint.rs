//! Per-region fill and selection state handed to the rendering surface.

use serde::Serialize;

use repmap_core::{for_region, RegionRegistry, Representative};

use crate::join::BoundaryJoin;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fill {
    Empty,
    Covered,
    Selected,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionPaint {
    pub id: String,
    pub name: String,
    pub district_id: String,
    pub representative_count: usize,
    pub has_geometry: bool,
    pub fill: Fill,
}

/// One paint entry per registry region, in registry order.
///
/// A region is `Selected` when `selected` is its id or its district id.
#[must_use]
pub fn paint_regions(
    registry: &RegionRegistry,
    join: &BoundaryJoin,
    representatives: &[Representative],
    selected: Option<&str>,
) -> Vec<RegionPaint> {
    registry
        .regions()
        .iter()
        .map(|region| {
            let representative_count = for_region(representatives, &region.id, registry).len();
            let is_selected = selected
                .is_some_and(|code| code == region.id || code == region.district_id);
            let fill = if is_selected {
                Fill::Selected
            } else if representative_count > 0 {
                Fill::Covered
            } else {
                Fill::Empty
            };
            RegionPaint {
                id: region.id.clone(),
                name: region.name.clone(),
                district_id: region.district_id.clone(),
                representative_count,
                has_geometry: join.has_geometry(&region.id),
                fill,
            }
        })
        .collect()
}
