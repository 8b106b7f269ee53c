use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::shared::entity_id::is_valid_entity_id;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("endpoint must not be empty")]
    EmptyEndpoint,
    #[error("endpoint must be host[:port] without scheme or path, got '{0}'")]
    InvalidEndpoint(String),
    #[error("invalid camera entity id '{0}', expected <domain>.<object_id>")]
    InvalidEntityId(String),
    #[error("could not determine config directory")]
    NoConfigDir,
}

/// A camera whose images are sent to Facebox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraSource {
    pub entity_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Platform configuration: one Facebox endpoint shared by every camera.
///
/// ```json
/// {"endpoint": "localhost:8080", "source": [{"entity_id": "camera.porch"}]}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformConfig {
    pub endpoint: String,
    #[serde(default)]
    pub source: Vec<CameraSource>,
}

impl PlatformConfig {
    /// Platform-specific default location, e.g. `~/.config/Facebox/config.json`.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json_str(&json)
    }

    /// Parses and validates.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_endpoint(&self.endpoint)?;
        for camera in &self.source {
            if !is_valid_entity_id(&camera.entity_id) {
                return Err(ConfigError::InvalidEntityId(camera.entity_id.clone()));
            }
        }
        Ok(())
    }
}

fn validate_endpoint(endpoint: &str) -> Result<(), ConfigError> {
    if endpoint.trim().is_empty() {
        return Err(ConfigError::EmptyEndpoint);
    }
    if endpoint.contains("://")
        || endpoint.contains('/')
        || endpoint.chars().any(char::is_whitespace)
    {
        return Err(ConfigError::InvalidEndpoint(endpoint.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    const VALID: &str = r#"{
        "endpoint": "localhost:8080",
        "source": [
            {"entity_id": "camera.front_door", "name": "Front door"},
            {"entity_id": "camera.garage"}
        ]
    }"#;

    #[test]
    fn test_parses_sources_with_optional_name() {
        let config = PlatformConfig::from_json_str(VALID).unwrap();

        assert_eq!(config.endpoint, "localhost:8080");
        assert_eq!(config.source.len(), 2);
        assert_eq!(config.source[0].name.as_deref(), Some("Front door"));
        assert_eq!(config.source[1].entity_id, "camera.garage");
        assert_eq!(config.source[1].name, None);
    }

    #[test]
    fn test_missing_source_means_no_cameras() {
        let config = PlatformConfig::from_json_str(r#"{"endpoint": "facebox:8080"}"#).unwrap();
        assert!(config.source.is_empty());
    }

    #[test]
    fn test_missing_endpoint_is_parse_error() {
        let result = PlatformConfig::from_json_str(r#"{"source": []}"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_empty_endpoint_rejected(#[case] endpoint: &str) {
        let config = PlatformConfig {
            endpoint: endpoint.to_string(),
            source: vec![],
        };
        assert!(matches!(config.validate(), Err(ConfigError::EmptyEndpoint)));
    }

    #[rstest]
    #[case("http://localhost:8080")]
    #[case("localhost:8080/facebox")]
    #[case("local host:8080")]
    fn test_malformed_endpoint_rejected(#[case] endpoint: &str) {
        let config = PlatformConfig {
            endpoint: endpoint.to_string(),
            source: vec![],
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidEndpoint(_))));
    }

    #[rstest]
    #[case("localhost")]
    #[case("192.168.1.20:8080")]
    #[case("[::1]:8080")]
    fn test_host_port_endpoints_accepted(#[case] endpoint: &str) {
        let config = PlatformConfig {
            endpoint: endpoint.to_string(),
            source: vec![],
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_entity_id_rejected() {
        let json = r#"{"endpoint": "localhost:8080", "source": [{"entity_id": "front_door"}]}"#;
        match PlatformConfig::from_json_str(json) {
            Err(ConfigError::InvalidEntityId(id)) => assert_eq!(id, "front_door"),
            other => panic!("expected invalid entity id, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.json");
        fs::write(&path, VALID).unwrap();

        let config = PlatformConfig::load(&path).unwrap();

        assert_eq!(config.source.len(), 2);
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing.json");

        let err = PlatformConfig::load(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn test_serialized_config_loads_back() {
        let config = PlatformConfig::from_json_str(VALID).unwrap();
        let json = serde_json::to_string_pretty(&config).unwrap();
        assert!(!json.contains("null"));
        assert_eq!(PlatformConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_default_path_ends_with_config_file() {
        if let Ok(path) = PlatformConfig::default_path() {
            assert!(path.ends_with("Facebox/config.json"));
        }
    }
}
