pub mod app_config;
pub mod card;
pub mod config;
pub mod error;
pub mod lookup;
pub mod normalize;
pub mod payload;
pub mod registry;
pub mod representatives;
pub mod resolver;
pub mod sample;
pub mod search;
pub mod stats;
pub mod view;

pub use app_config::{AppConfig, Environment, HostConfig};
pub use card::RepresentativeCard;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, PayloadError, RegistryError};
pub use lookup::{for_region, toggle_selection};
pub use normalize::{normalize, NormalizeReport, RecordRejection, UnknownCode};
pub use payload::{load_payload, payload_from_json, Payload, PayloadSource};
pub use registry::{CityAlias, FederalDistrict, Region, RegionRegistry};
pub use representatives::{RegionAssignment, Representative};
pub use resolver::{ResolvedCode, ResolvedKind, Resolution};
pub use search::search;
pub use stats::{coverage_stats, CoverageStats};
pub use view::{contact_panel, list_view, ContactPanel, ListView};
