use repmap_core::{
    normalize, HostConfig, Payload, PayloadSource, RegionRegistry, Representative,
};
use repmap_geo::{BoundaryJoin, MapView};

/// Everything the API answers from. Built once at startup, then read-only.
#[derive(Debug)]
pub struct Snapshot {
    pub registry: &'static RegionRegistry,
    pub representatives: Vec<Representative>,
    pub source: PayloadSource,
    pub dropped: usize,
    pub map: MapView,
    /// `None` when the map is unavailable.
    pub join: Option<BoundaryJoin>,
    pub host: HostConfig,
}

impl Snapshot {
    #[must_use]
    pub fn build(payload: Payload, map: MapView, host: HostConfig) -> Self {
        let registry = RegionRegistry::russia();
        let report = normalize(&payload.records, registry);
        let join = map.boundaries().map(|set| set.join(registry));

        tracing::info!(
            source = ?payload.source,
            representatives = report.representatives.len(),
            dropped = report.dropped_count(),
            unknown_codes = report.unknown_codes.len(),
            map_ready = join.is_some(),
            "snapshot ready"
        );

        Self {
            registry,
            dropped: report.dropped_count(),
            representatives: report.representatives,
            source: payload.source,
            map,
            join,
            host,
        }
    }
}
