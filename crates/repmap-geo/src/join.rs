//! Name join between boundary features and the region registry.

use std::collections::HashSet;

use serde::Serialize;

use repmap_core::RegionRegistry;

use crate::types::BoundarySet;

/// Outcome of matching boundary feature names to registry region names.
///
/// Mismatches only leave regions unpainted; they never block the map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BoundaryJoin {
    /// Region ids with a feature of the same name, in registry order.
    pub matched: Vec<String>,
    /// Region ids with no feature, in registry order.
    pub missing_regions: Vec<String>,
    /// Feature names that match no region, in file order.
    pub unmatched_features: Vec<String>,
}

impl BoundaryJoin {
    #[must_use]
    pub fn has_geometry(&self, region_id: &str) -> bool {
        self.matched.iter().any(|id| id == region_id)
    }
}

impl BoundarySet {
    /// Matches features to regions by exact name.
    #[must_use]
    pub fn join(&self, registry: &RegionRegistry) -> BoundaryJoin {
        let mut join = BoundaryJoin::default();
        for region in registry.regions() {
            if self.feature(&region.name).is_some() {
                join.matched.push(region.id.clone());
            } else {
                join.missing_regions.push(region.id.clone());
            }
        }

        let region_names: HashSet<&str> = registry
            .regions()
            .iter()
            .map(|region| region.name.as_str())
            .collect();
        let mut seen = HashSet::new();
        for feature in self.features() {
            let name = feature.properties.name.as_str();
            if !region_names.contains(name) && seen.insert(name) {
                join.unmatched_features.push(name.to_owned());
            }
        }

        if !join.missing_regions.is_empty() {
            tracing::warn!(
                count = join.missing_regions.len(),
                regions = ?join.missing_regions,
                "registry regions without boundary geometry"
            );
        }
        if !join.unmatched_features.is_empty() {
            tracing::warn!(
                count = join.unmatched_features.len(),
                features = ?join.unmatched_features,
                "boundary features without a registry region"
            );
        }

        join
    }
}
