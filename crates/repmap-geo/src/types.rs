//! Serde types for the region boundary file, a polygon/multipolygon
//! feature collection keyed by the `name` property.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::BoundaryError;

/// A linear ring of `[lon, lat]` (optionally with altitude) positions.
pub type Ring = Vec<Vec<f64>>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon { coordinates: Vec<Ring> },
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureProperties {
    pub name: String,
    /// Everything else the file carries; passed through untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub properties: FeatureProperties,
    pub geometry: Option<Geometry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

impl FeatureCollection {
    /// Parses a boundary document.
    ///
    /// # Errors
    ///
    /// Returns [`BoundaryError::Deserialize`] if `raw` is not a valid
    /// feature collection.
    pub fn from_json(raw: &str, context: &str) -> Result<Self, BoundaryError> {
        serde_json::from_str(raw).map_err(|e| BoundaryError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

/// Read-only, name-keyed view of a loaded boundary file.
#[derive(Debug, Clone)]
pub struct BoundarySet {
    features: Vec<Feature>,
    by_name: HashMap<String, usize>,
}

impl BoundarySet {
    /// Indexes features by name. When a name repeats, the first feature wins.
    #[must_use]
    pub fn new(collection: FeatureCollection) -> Self {
        let mut by_name = HashMap::with_capacity(collection.features.len());
        for (idx, feature) in collection.features.iter().enumerate() {
            by_name
                .entry(feature.properties.name.clone())
                .or_insert(idx);
        }
        Self {
            features: collection.features,
            by_name,
        }
    }

    #[must_use]
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    #[must_use]
    pub fn feature(&self, name: &str) -> Option<&Feature> {
        self.by_name.get(name).map(|&idx| &self.features[idx])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
