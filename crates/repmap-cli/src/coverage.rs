use std::path::Path;

use repmap_core::RegionRegistry;
use repmap_geo::{paint_regions, BoundaryClient, BoundarySet, FeatureCollection};

use crate::inspect::load_representatives;

const USER_AGENT: &str = "repmap-cli/0.1 (representatives-map)";

/// Loads boundaries from a local file or an http(s) URL.
async fn load_boundaries(source: &str, timeout_secs: u64) -> anyhow::Result<FeatureCollection> {
    if source.starts_with("http://") || source.starts_with("https://") {
        let client = BoundaryClient::new(timeout_secs, USER_AGENT)
            .map_err(|e| anyhow::anyhow!("failed to build boundary client: {e}"))?;
        return Ok(client.fetch(source).await?);
    }

    let raw = std::fs::read_to_string(source)
        .map_err(|e| anyhow::anyhow!("failed to read {source}: {e}"))?;
    Ok(FeatureCollection::from_json(&raw, source)?)
}

/// Joins a boundary file against the registry and prints per-region coverage.
///
/// # Errors
///
/// Returns an error if the boundary file or the payload cannot be loaded.
pub(crate) async fn run_coverage(
    source: &str,
    payload: Option<&Path>,
    timeout_secs: u64,
) -> anyhow::Result<()> {
    let registry = RegionRegistry::russia();
    let set = BoundarySet::new(load_boundaries(source, timeout_secs).await?);
    let join = set.join(registry);
    let representatives = load_representatives(payload)?;

    println!(
        "features: {}  matched regions: {}/{}",
        set.len(),
        join.matched.len(),
        registry.regions().len()
    );

    if !join.missing_regions.is_empty() {
        println!("regions without geometry:");
        for id in &join.missing_regions {
            let name = registry.region(id).map_or(id.as_str(), |r| r.name.as_str());
            println!("  {id:<8}{name}");
        }
    }
    if !join.unmatched_features.is_empty() {
        println!("features without a region:");
        for name in &join.unmatched_features {
            println!("  {name}");
        }
    }

    println!();
    println!("{:<8}{:<7}{:>5}  {:<5}NAME", "REGION", "DIST", "REPS", "GEO");
    for paint in paint_regions(registry, &join, &representatives, None) {
        println!(
            "{:<8}{:<7}{:>5}  {:<5}{}",
            paint.id,
            paint.district_id,
            paint.representative_count,
            if paint.has_geometry { "yes" } else { "no" },
            paint.name
        );
    }
    Ok(())
}
