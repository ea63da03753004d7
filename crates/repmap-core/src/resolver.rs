//! Resolution of region codes to display metadata.
//!
//! Unknown codes are expected input noise (the registry and the CMS data can
//! drift independently), so resolution never fails: an unknown code resolves
//! to itself.

use serde::Serialize;

use crate::registry::{FederalDistrict, Region, RegionRegistry};

/// Result of resolving a single code against a [`RegionRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    District(&'a FederalDistrict),
    Region(&'a Region),
    Unknown(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedKind {
    Region,
    District,
    Unknown,
}

/// Owned, serializable form of a [`Resolution`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedCode {
    pub code: String,
    pub kind: ResolvedKind,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district_id: Option<String>,
}

impl Resolution<'_> {
    #[must_use]
    pub fn kind(&self) -> ResolvedKind {
        match self {
            Resolution::District(_) => ResolvedKind::District,
            Resolution::Region(_) => ResolvedKind::Region,
            Resolution::Unknown(_) => ResolvedKind::Unknown,
        }
    }

    /// Display name; the raw code for unknown codes.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Resolution::District(district) => &district.name,
            Resolution::Region(region) => &region.name,
            Resolution::Unknown(code) => code,
        }
    }

    /// Parent district of a region. Districts and unknown codes have none.
    #[must_use]
    pub fn district_id(&self) -> Option<&str> {
        match self {
            Resolution::Region(region) => Some(&region.district_id),
            Resolution::District(_) | Resolution::Unknown(_) => None,
        }
    }

    #[must_use]
    pub fn to_owned_code(&self, code: &str) -> ResolvedCode {
        ResolvedCode {
            code: code.to_owned(),
            kind: self.kind(),
            name: self.name().to_owned(),
            district_id: self.district_id().map(str::to_owned),
        }
    }
}

impl RegionRegistry {
    /// Resolves a region-or-district code. District ids are checked first.
    #[must_use]
    pub fn resolve<'a>(&'a self, code: &'a str) -> Resolution<'a> {
        if let Some(district) = self.district(code) {
            return Resolution::District(district);
        }
        if let Some(region) = self.region(code) {
            return Resolution::Region(region);
        }
        Resolution::Unknown(code)
    }

    /// All regions of a district, in registry order. Empty for region ids and
    /// unknown codes.
    pub fn expand_district<'a>(&'a self, district_id: &'a str) -> impl Iterator<Item = &'a Region> {
        self.regions()
            .iter()
            .filter(move |region| region.district_id == district_id)
    }

    /// The parent district of a region, or `None` if `region_id` is not a
    /// known region.
    #[must_use]
    pub fn district_of(&self, region_id: &str) -> Option<&FederalDistrict> {
        self.region(region_id)
            .and_then(|region| self.district(&region.district_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> &'static RegionRegistry {
        RegionRegistry::russia()
    }

    #[test]
    fn resolve_district() {
        let resolved = registry().resolve("ЦФО");
        assert_eq!(resolved.kind(), ResolvedKind::District);
        assert_eq!(resolved.name(), "Центральный федеральный округ");
        assert_eq!(resolved.district_id(), None);
    }

    #[test]
    fn resolve_region_carries_parent_district() {
        let resolved = registry().resolve("RU-SPE");
        assert_eq!(resolved.kind(), ResolvedKind::Region);
        assert_eq!(resolved.name(), "Санкт-Петербург");
        assert_eq!(resolved.district_id(), Some("СЗФО"));
    }

    #[test]
    fn resolve_unknown_falls_back_to_raw_code() {
        let resolved = registry().resolve("XX-999");
        assert_eq!(resolved.kind(), ResolvedKind::Unknown);
        assert_eq!(resolved.name(), "XX-999");
        assert_eq!(resolved.district_id(), None);
    }

    #[test]
    fn owned_code_serializes_without_empty_district() {
        let owned = registry().resolve("ЦФО").to_owned_code("ЦФО");
        let json = serde_json::to_value(&owned).unwrap();
        assert_eq!(json["kind"], "district");
        assert!(json.get("district_id").is_none());
    }

    #[test]
    fn expand_district_returns_members_in_registry_order() {
        let ids: Vec<&str> = registry()
            .expand_district("УФО")
            .map(|r| r.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec!["RU-KGN", "RU-SVE", "RU-TYU", "RU-KHM", "RU-CHE", "RU-YAN"]
        );
    }

    #[test]
    fn expand_district_is_empty_for_region_or_unknown() {
        assert_eq!(registry().expand_district("RU-MOW").count(), 0);
        assert_eq!(registry().expand_district("nope").count(), 0);
    }

    #[test]
    fn district_of_region() {
        let district = registry().district_of("RU-NVS").unwrap();
        assert_eq!(district.id, "СФО");
    }

    #[test]
    fn district_of_non_region_is_none() {
        assert!(registry().district_of("СФО").is_none());
        assert!(registry().district_of("XX-999").is_none());
    }
}
