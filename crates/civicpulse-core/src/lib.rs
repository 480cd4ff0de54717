//! Shared domain types and configuration for CivicPulse.
//!
//! Holds the raw post model (`Post`, `Platform`, `SearchResult`), the static
//! constituency reference list, and env-driven application configuration.

mod app_config;
mod config;
mod districts;
mod error;
mod posts;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use districts::CONSTITUENCIES;
pub use error::ConfigError;
pub use posts::{Platform, PlatformBucket, Post, SearchResult};
