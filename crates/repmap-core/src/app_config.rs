use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Signals the host CMS page passes to the widget at load time.
#[derive(Clone, Default)]
pub struct HostConfig {
    /// UI hints only. Never use for authorization: access control lives in
    /// the CMS.
    pub is_admin: bool,
    /// CMS session token, opaque to this crate.
    pub session_token: Option<String>,
}

impl std::fmt::Debug for HostConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostConfig")
            .field("is_admin", &self.is_admin)
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "[redacted]"),
            )
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// JSON array written by the CMS data layer. `None` means no payload.
    pub payload_path: Option<PathBuf>,
    pub boundary_url: String,
    pub boundary_timeout_secs: u64,
    pub user_agent: String,
    pub host: HostConfig,
}
