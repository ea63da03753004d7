pub mod client;
pub mod error;
pub mod join;
pub mod paint;
pub mod types;

pub use client::{load_map, BoundaryClient, MapView};
pub use error::{BoundaryError, MAP_UNAVAILABLE_MESSAGE};
pub use join::BoundaryJoin;
pub use paint::{paint_regions, Fill, RegionPaint};
pub use types::{BoundarySet, Feature, FeatureCollection, FeatureProperties, Geometry};
