use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub generator: GeneratorConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expiration_seconds: u64,
}

/// External AI itinerary generation service.
#[derive(Debug, Deserialize, Clone)]
pub struct GeneratorConfig {
    pub base_url: String,
    #[serde(default = "default_generator_timeout")]
    pub timeout_seconds: u64,
}

fn default_generator_timeout() -> u64 {
    120
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Season label the customize-step catalog is fetched for when the
    /// request names none. The original flow pinned this label in code;
    /// deriving it from the trip start date is a pending product decision.
    pub default_season: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Base configuration, always present
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Environment variables, e.g. TURA__DATABASE__URL
            .add_source(config::Environment::with_prefix("TURA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
