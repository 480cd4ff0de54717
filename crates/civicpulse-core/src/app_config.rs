use std::net::SocketAddr;

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

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Base URL of the proxy aggregation service.
    pub aggregator_url: String,
    /// Per-adapter fetch timeout.
    pub fetch_timeout_secs: u64,
    /// Per-platform result page size requested from the aggregator.
    pub fetch_limit: u32,
    /// Query used for the initial auto-fetch before any user search.
    pub default_query: String,
}
