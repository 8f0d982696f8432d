use std::env;
use std::path::PathBuf;

use aina_core::config::LayeredConfig;
use aina_core::error::Result;

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub cors_origin: String,
    pub database_url: Option<String>,
    /// Optional TOML file layered under the environment
    pub config_path: Option<PathBuf>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: 3001,
            cors_origin: "http://localhost:3000".to_string(),
            database_url: None,
            config_path: None,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let port = env::var("AINA_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(defaults.port);

        let cors_origin = env::var("AINA_CORS_ORIGIN").unwrap_or(defaults.cors_origin);

        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.trim().is_empty());

        let config_path = env::var("AINA_CONFIG").ok().map(PathBuf::from);

        Self { port, cors_origin, database_url, config_path }
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    pub fn uses_postgres(&self) -> bool {
        self.database_url.is_some()
    }

    /// Data source settings: defaults, then the optional file, then `AINA_*` variables
    pub fn layered(&self) -> Result<LayeredConfig> {
        let mut layered = LayeredConfig::with_defaults();
        if let Some(path) = &self.config_path {
            layered = layered.load_from_file(path)?;
        }
        Ok(layered.load_from_env())
    }
}
