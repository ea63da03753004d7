//! Region-to-representative lookup for map clicks and the contact panel.

use crate::registry::RegionRegistry;
use crate::representatives::Representative;

/// Returns the representatives reachable from `selected_id`, in input order.
///
/// A representative matches when one of its codes:
/// - equals `selected_id`,
/// - is the parent district of `selected_id` (a region was selected), or
/// - is a region inside `selected_id` (a district was selected).
///
/// Unknown selections only match representatives assigned that exact code.
#[must_use]
pub fn for_region<'a>(
    representatives: &'a [Representative],
    selected_id: &str,
    registry: &RegionRegistry,
) -> Vec<&'a Representative> {
    let parent_district = registry
        .region(selected_id)
        .map(|region| region.district_id.as_str());
    let selected_is_district = registry.district(selected_id).is_some();

    representatives
        .iter()
        .filter(|rep| {
            rep.region_codes().iter().any(|code| {
                code == selected_id
                    || parent_district == Some(code.as_str())
                    || (selected_is_district
                        && registry
                            .region(code)
                            .is_some_and(|region| region.district_id == selected_id))
            })
        })
        .collect()
}

/// Next selection after a region click: clicking the selected region clears
/// it, clicking anything else selects that region.
#[must_use]
pub fn toggle_selection(current: Option<&str>, clicked: &str) -> Option<String> {
    if current == Some(clicked) {
        None
    } else {
        Some(clicked.to_owned())
    }
}
