use serde::Serialize;

use crate::lookup::for_region;
use crate::registry::RegionRegistry;
use crate::representatives::Representative;

/// Headline numbers shown under the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoverageStats {
    pub representatives: usize,
    /// Regions with at least one representative reachable through the
    /// lookup index (directly or via the parent district).
    pub regions_covered: usize,
    pub districts_covered: usize,
}

#[must_use]
pub fn coverage_stats(representatives: &[Representative], registry: &RegionRegistry) -> CoverageStats {
    let regions_covered = registry
        .regions()
        .iter()
        .filter(|region| !for_region(representatives, &region.id, registry).is_empty())
        .count();
    let districts_covered = registry
        .districts()
        .iter()
        .filter(|district| !for_region(representatives, &district.id, registry).is_empty())
        .count();

    CoverageStats {
        representatives: representatives.len(),
        regions_covered,
        districts_covered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::representatives::RegionAssignment;

    fn rep(id: i64, codes: &[&str]) -> Representative {
        Representative {
            id,
            name: format!("Rep {id}"),
            position: "Менеджер".to_string(),
            phone: String::new(),
            email: String::new(),
            region_id: RegionAssignment::from_codes(codes.iter().map(|c| (*c).to_string())),
            activity: None,
            working_hours: None,
            address: None,
        }
    }

    #[test]
    fn empty_set_covers_nothing() {
        let stats = coverage_stats(&[], RegionRegistry::russia());
        assert_eq!(
            stats,
            CoverageStats {
                representatives: 0,
                regions_covered: 0,
                districts_covered: 0
            }
        );
    }

    #[test]
    fn district_assignment_covers_all_member_regions() {
        let reps = vec![rep(1, &["УФО"])];
        let stats = coverage_stats(&reps, RegionRegistry::russia());
        assert_eq!(stats.regions_covered, 6);
        assert_eq!(stats.districts_covered, 1);
    }

    #[test]
    fn region_assignments_count_once_per_region() {
        let reps = vec![rep(1, &["RU-MOW", "RU-SPE"]), rep(2, &["RU-MOW"]), rep(3, &["XX-1"])];
        let stats = coverage_stats(&reps, RegionRegistry::russia());
        assert_eq!(stats.representatives, 3);
        assert_eq!(stats.regions_covered, 2);
        assert_eq!(stats.districts_covered, 2);
    }
}
