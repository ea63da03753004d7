//! Free-text search over the normalized representative set.
//!
//! Plain case-insensitive substring containment on every dimension, no
//! tokenization or ranking. A representative is kept as soon as one
//! dimension matches.

use crate::registry::RegionRegistry;
use crate::representatives::Representative;

/// Filters `representatives` by `query`, preserving input order.
///
/// A blank query returns every representative.
#[must_use]
pub fn search<'a>(
    representatives: &'a [Representative],
    query: &str,
    registry: &RegionRegistry,
) -> Vec<&'a Representative> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return representatives.iter().collect();
    }

    // City aliases are independent of the representative, resolve them once.
    let alias_regions: Vec<&str> = registry
        .city_aliases()
        .iter()
        .filter(|alias| alias.city.contains(&query))
        .map(|alias| alias.region_id.as_str())
        .collect();

    representatives
        .iter()
        .filter(|rep| matches(rep, &query, &alias_regions, registry))
        .collect()
}

fn matches(
    rep: &Representative,
    query: &str,
    alias_regions: &[&str],
    registry: &RegionRegistry,
) -> bool {
    matches_contact(rep, query)
        || rep
            .region_codes()
            .iter()
            .any(|code| matches_code(code, query, registry))
        || rep
            .activities()
            .iter()
            .any(|tag| contains_ci(tag, query))
        || matches_city_alias(rep, alias_regions, registry)
}

/// Name and email are compared case-insensitively; phone as typed.
fn matches_contact(rep: &Representative, query: &str) -> bool {
    contains_ci(&rep.name, query) || contains_ci(&rep.email, query) || rep.phone.contains(query)
}

fn matches_code(code: &str, query: &str, registry: &RegionRegistry) -> bool {
    if let Some(region) = registry.region(code) {
        if contains_ci(&region.name, query) {
            return true;
        }
        // Parent district by full name or abbreviation.
        return registry
            .district(&region.district_id)
            .is_some_and(|district| {
                contains_ci(&district.name, query) || contains_ci(&district.id, query)
            });
    }

    if let Some(district) = registry.district(code) {
        return contains_ci(&district.name, query)
            || contains_ci(&district.id, query)
            || registry
                .expand_district(&district.id)
                .any(|region| contains_ci(&region.name, query));
    }

    false
}

/// The query names a known city whose region is assigned to the
/// representative directly or through its district.
fn matches_city_alias(
    rep: &Representative,
    alias_regions: &[&str],
    registry: &RegionRegistry,
) -> bool {
    alias_regions.iter().any(|&region_id| {
        let district_id = registry
            .region(region_id)
            .map(|region| region.district_id.as_str());
        rep.region_codes()
            .iter()
            .any(|code| code == region_id || Some(code.as_str()) == district_id)
    })
}

/// `query` must already be lowercase.
fn contains_ci(haystack: &str, query: &str) -> bool {
    haystack.to_lowercase().contains(query)
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
