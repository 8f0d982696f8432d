use crate::error::{AinaError, Result};
use crate::models::AreaOfInterest;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

pub const DEFAULT_GNIS_FILE: &str = "GNIS_(Geographic_Names).geojson";
pub const DEFAULT_TSUNAMI_FILE: &str = "Tsunami_Evacuation_-_All_Zones.geojson";
pub const DEFAULT_SOIL_FILE: &str = "comp.txt";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

/// Layered configuration for the data service
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub area: ConfigValue<AreaOfInterest>,
    pub data_dir: ConfigValue<PathBuf>,
    pub gnis_file: ConfigValue<PathBuf>,
    pub tsunami_file: ConfigValue<PathBuf>,
    pub soil_file: ConfigValue<PathBuf>,
    pub cache_ttl_secs: ConfigValue<u64>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            area: ConfigValue::new(AreaOfInterest::default(), ConfigSource::Default),
            data_dir: ConfigValue::new(PathBuf::from("data"), ConfigSource::Default),
            gnis_file: ConfigValue::new(PathBuf::from(DEFAULT_GNIS_FILE), ConfigSource::Default),
            tsunami_file: ConfigValue::new(
                PathBuf::from(DEFAULT_TSUNAMI_FILE),
                ConfigSource::Default,
            ),
            soil_file: ConfigValue::new(PathBuf::from(DEFAULT_SOIL_FILE), ConfigSource::Default),
            cache_ttl_secs: ConfigValue::new(DEFAULT_CACHE_TTL_SECS, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| AinaError::ConfigInvalid {
            key: "file".to_string(),
            reason: format!("Failed to read config file: {}", e),
        })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| AinaError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(area) = file_config.area {
            self.area.update(area, ConfigSource::File);
        }

        if let Some(data_dir) = file_config.data_dir {
            self.data_dir.update(data_dir, ConfigSource::File);
        }

        if let Some(gnis_file) = file_config.gnis_file {
            self.gnis_file.update(gnis_file, ConfigSource::File);
        }

        if let Some(tsunami_file) = file_config.tsunami_file {
            self.tsunami_file.update(tsunami_file, ConfigSource::File);
        }

        if let Some(soil_file) = file_config.soil_file {
            self.soil_file.update(soil_file, ConfigSource::File);
        }

        if let Some(ttl) = file_config.cache_ttl_secs {
            self.cache_ttl_secs.update(ttl, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // AINA_DATA_DIR
        if let Ok(dir) = env::var("AINA_DATA_DIR") {
            self.data_dir.update(PathBuf::from(dir), ConfigSource::Environment);
        }

        // AINA_GNIS_FILE, AINA_TSUNAMI_FILE, AINA_SOIL_FILE
        if let Ok(file) = env::var("AINA_GNIS_FILE") {
            self.gnis_file.update(PathBuf::from(file), ConfigSource::Environment);
        }
        if let Ok(file) = env::var("AINA_TSUNAMI_FILE") {
            self.tsunami_file.update(PathBuf::from(file), ConfigSource::Environment);
        }
        if let Ok(file) = env::var("AINA_SOIL_FILE") {
            self.soil_file.update(PathBuf::from(file), ConfigSource::Environment);
        }

        // AINA_CACHE_TTL_SECS
        if let Ok(ttl_str) = env::var("AINA_CACHE_TTL_SECS") {
            match ttl_str.parse::<u64>() {
                Ok(ttl) => self.cache_ttl_secs.update(ttl, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid AINA_CACHE_TTL_SECS value '{}': expected whole seconds",
                    ttl_str
                ),
            }
        }

        // AINA_RADIUS_DEG
        if let Ok(radius_str) = env::var("AINA_RADIUS_DEG") {
            match parse_radius(&radius_str) {
                Ok(radius) => {
                    let mut area = self.area.value.clone();
                    area.radius.max_distance_deg = radius;
                    self.area.update(area, ConfigSource::Environment);
                }
                Err(_) => tracing::warn!(
                    "Invalid AINA_RADIUS_DEG value '{}': expected a positive number of degrees",
                    radius_str
                ),
            }
        }

        self
    }

    /// Resolve a data file against `data_dir` unless it is absolute
    pub fn resolve(&self, file: &Path) -> PathBuf {
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            self.data_dir.value.join(file)
        }
    }

    pub fn gnis_path(&self) -> PathBuf {
        self.resolve(&self.gnis_file.value)
    }

    pub fn tsunami_path(&self) -> PathBuf {
        self.resolve(&self.tsunami_file.value)
    }

    pub fn soil_path(&self) -> PathBuf {
        self.resolve(&self.soil_file.value)
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert("area".to_string(), (self.area.value.name.clone(), self.area.source));
        map.insert(
            "data_dir".to_string(),
            (self.data_dir.value.display().to_string(), self.data_dir.source),
        );
        map.insert(
            "gnis_file".to_string(),
            (self.gnis_path().display().to_string(), self.gnis_file.source),
        );
        map.insert(
            "tsunami_file".to_string(),
            (self.tsunami_path().display().to_string(), self.tsunami_file.source),
        );
        map.insert(
            "soil_file".to_string(),
            (self.soil_path().display().to_string(), self.soil_file.source),
        );
        map.insert(
            "cache_ttl_secs".to_string(),
            (self.cache_ttl_secs.value.to_string(), self.cache_ttl_secs.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    area: Option<AreaOfInterest>,
    data_dir: Option<PathBuf>,
    gnis_file: Option<PathBuf>,
    tsunami_file: Option<PathBuf>,
    soil_file: Option<PathBuf>,
    cache_ttl_secs: Option<u64>,
}

/// Parse a radius threshold in degrees
pub fn parse_radius(s: &str) -> Result<f64> {
    match s.trim().parse::<f64>() {
        Ok(r) if r.is_finite() && r > 0.0 => Ok(r),
        _ => Err(AinaError::ConfigInvalid {
            key: "radius".to_string(),
            reason: format!("Invalid radius: {}. Use a positive number of degrees", s),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(config.area.value.name, "Waimanalo");
        assert_eq!(config.area.source, ConfigSource::Default);
        assert_eq!(config.cache_ttl_secs.value, 300);
        assert_eq!(config.soil_path(), PathBuf::from("data").join("comp.txt"));
    }

    #[test]
    fn test_config_precedence() {
        let mut value = ConfigValue::new(100, ConfigSource::Default);

        // File should override default
        value.update(200, ConfigSource::File);
        assert_eq!(value.value, 200);
        assert_eq!(value.source, ConfigSource::File);

        // Environment should override file
        value.update(300, ConfigSource::Environment);
        assert_eq!(value.value, 300);
        assert_eq!(value.source, ConfigSource::Environment);

        // Lower precedence should not override
        value.update(400, ConfigSource::File);
        assert_eq!(value.value, 300);
        assert_eq!(value.source, ConfigSource::Environment);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
data_dir = "/srv/aina"
soil_file = "tabular/comp.txt"
cache_ttl_secs = 60

[area]
name = "Kailua"

[area.radius]
center = {{ lat = 21.40, lon = -157.74 }}
max_distance_deg = 0.2
"#
        )
        .unwrap();

        let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.area.value.name, "Kailua");
        assert_eq!(config.area.value.radius.max_distance_deg, 0.2);
        // unspecified area fields keep their defaults
        assert_eq!(config.area.value.bbox.lat_min, 21.32);
        assert_eq!(config.cache_ttl_secs.value, 60);
        assert_eq!(config.cache_ttl_secs.source, ConfigSource::File);
        assert_eq!(config.soil_path(), PathBuf::from("/srv/aina/tabular/comp.txt"));
        assert_eq!(config.gnis_file.source, ConfigSource::Default);
    }

    #[test]
    fn test_absolute_file_ignores_data_dir() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(
            config.resolve(Path::new("/tmp/zones.geojson")),
            PathBuf::from("/tmp/zones.geojson")
        );
    }

    #[test]
    fn test_parse_radius() {
        assert_eq!(parse_radius("0.5").unwrap(), 0.5);
        assert!(parse_radius("-1").is_err());
        assert!(parse_radius("wide").is_err());
    }

    #[test]
    fn test_inspection_map() {
        let config = LayeredConfig::with_defaults();
        let map = config.to_inspection_map();

        assert!(map.contains_key("area"));
        assert!(map.contains_key("soil_file"));

        let (ttl, source) = &map["cache_ttl_secs"];
        assert_eq!(ttl, "300");
        assert_eq!(*source, ConfigSource::Default);
    }
}
