// Engine settings, loaded from a JSON file or falling back to defaults
use crate::error::EngineError;
use serde::Deserialize;
use shared::models::{
    ConstantMap, PRIMARY_COSTS_TOTAL_ROW_NAME, SECONDARY_COSTS_TOTAL_ROW_NAME, TOTAL_COLUMN_NAME,
};
use std::path::Path;

/// Environment variable naming the engine's JSON settings file.
pub const CONFIG_ENV_VAR: &str = "COST_ENGINE_CONFIG";

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct EngineSettings {
    pub host: String,
    pub port: u16,
    /// Cost records CSV loaded at startup, if any.
    pub data_file: Option<String>,
    pub constants: CostConstants,
}

/// Sentinel names the viewer uses to spot total rows.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CostConstants {
    pub primary_total_row_name: String,
    pub secondary_total_row_name: String,
    pub total_column_name: String,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            host: "127.0.0.1".to_string(),
            port: 50051,
            data_file: None,
            constants: CostConstants::default(),
        }
    }
}

impl Default for CostConstants {
    fn default() -> Self {
        CostConstants {
            primary_total_row_name: "Total Primary Costs".to_string(),
            secondary_total_row_name: "Total Secondary Costs".to_string(),
            total_column_name: "Total".to_string(),
        }
    }
}

impl CostConstants {
    pub fn to_constant_map(&self) -> ConstantMap {
        let mut constants = ConstantMap::new();
        constants.insert(PRIMARY_COSTS_TOTAL_ROW_NAME, self.primary_total_row_name.clone());
        constants.insert(SECONDARY_COSTS_TOTAL_ROW_NAME, self.secondary_total_row_name.clone());
        constants.insert(TOTAL_COLUMN_NAME, self.total_column_name.clone());
        constants
    }
}

impl EngineSettings {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(|e| {
            EngineError::ConfigError(format!("Invalid settings file '{}': {}", path.display(), e))
        })
    }

    /// Reads the file named by `COST_ENGINE_CONFIG`, or returns the defaults when unset.
    pub fn load() -> Result<Self, EngineError> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => {
                tracing::info!(path = %path, "Loading engine settings");
                Self::from_file(path)
            }
            Err(_) => {
                tracing::info!("{} not set, using default engine settings", CONFIG_ENV_VAR);
                Ok(Self::default())
            }
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "port": 6000, "constants": {{ "primary_total_row_name": "TOTAL" }} }}"#).unwrap();

        let settings = EngineSettings::from_file(file.path()).unwrap();
        assert_eq!(settings.port, 6000);
        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.constants.primary_total_row_name, "TOTAL");
        assert_eq!(settings.constants.secondary_total_row_name, "Total Secondary Costs");
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(matches!(
            EngineSettings::from_file(file.path()),
            Err(EngineError::ConfigError(_))
        ));
    }

    #[test]
    fn constants_expose_well_known_names() {
        let constants = CostConstants::default().to_constant_map();
        assert_eq!(constants.primary_total_row_name(), Some("Total Primary Costs"));
        assert_eq!(constants.secondary_total_row_name(), Some("Total Secondary Costs"));
        assert_eq!(constants.total_column_label(), "Total");
    }
}
