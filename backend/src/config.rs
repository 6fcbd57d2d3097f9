//! Configuration management for the agricultural intelligence service
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with AGRI__ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Upstream government data APIs
    pub upstream: UpstreamConfig,

    /// Synthetic fallback data generation
    #[serde(default)]
    pub synthetic: SyntheticConfig,

    /// Demo credential check and session settings
    pub auth: AuthConfig,

    /// Request defaults applied when a query omits them
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    /// IMD weather API base URL
    pub imd_url: String,

    /// IMD bearer token
    pub imd_api_key: String,

    /// Agmarknet price API base URL
    pub agmarknet_url: String,

    /// eNAM price API base URL
    pub enam_url: String,

    /// ICAR research API base URL
    pub icar_url: String,

    /// KVK extension API base URL
    pub kvk_url: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SyntheticConfig {
    /// Fixed RNG seed; unset means seeded from OS entropy
    pub seed: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Session lifetime in hours, renewed on every authenticated request
    pub session_ttl_hours: i64,

    /// Password shared by the demo accounts
    pub demo_password: String,

    /// bcrypt cost used when hashing the demo password at startup
    pub bcrypt_cost: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DefaultsConfig {
    pub state: String,
    pub district: String,
    pub role: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("AGRI_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("upstream.imd_url", "https://api.imd.gov.in/v1")?
            .set_default("upstream.imd_api_key", "")?
            .set_default("upstream.agmarknet_url", "https://api.agmarknet.gov.in/v2")?
            .set_default("upstream.enam_url", "https://api.enam.gov.in/v1")?
            .set_default("upstream.icar_url", "https://api.icar.gov.in/v1")?
            .set_default("upstream.kvk_url", "https://api.kvk.icar.gov.in/v1")?
            .set_default("auth.session_ttl_hours", 24)?
            .set_default("auth.demo_password", "demo123")?
            .set_default("auth.bcrypt_cost", bcrypt::DEFAULT_COST as i64)?
            .set_default("defaults.state", "Delhi")?
            .set_default("defaults.district", "Delhi")?
            .set_default("defaults.role", "government")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (AGRI_ prefix)
            .add_source(
                Environment::with_prefix("AGRI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            imd_url: "https://api.imd.gov.in/v1".to_string(),
            imd_api_key: String::new(),
            agmarknet_url: "https://api.agmarknet.gov.in/v2".to_string(),
            enam_url: "https://api.enam.gov.in/v1".to_string(),
            icar_url: "https://api.icar.gov.in/v1".to_string(),
            kvk_url: "https://api.kvk.icar.gov.in/v1".to_string(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            session_ttl_hours: 24,
            demo_password: "demo123".to_string(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            state: "Delhi".to_string(),
            district: "Delhi".to_string(),
            role: "government".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
            synthetic: SyntheticConfig::default(),
            auth: AuthConfig::default(),
            defaults: DefaultsConfig::default(),
        }
    }
}
