use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Errors reading the representative payload written by the CMS data layer.
///
/// A payload that is absent or unparseable is not an error (the sample data
/// set is used instead); only I/O failures on an existing file surface here.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("failed to read payload file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Structural problems in a custom [`crate::RegionRegistry`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate region id: '{0}'")]
    DuplicateRegion(String),

    #[error("duplicate district id: '{0}'")]
    DuplicateDistrict(String),

    #[error("code '{0}' is used both as a region and as a district")]
    AmbiguousCode(String),

    #[error("region '{region}' references unknown district '{district}'")]
    UnknownDistrict { region: String, district: String },

    #[error("city alias '{city}' targets unknown region '{region}'")]
    UnknownAliasTarget { city: String, region: String },
}
