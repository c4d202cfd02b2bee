// GUI configuration module
pub mod theme;

use serde::Deserialize;

/// Mirrors `assets/config/default.json`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    pub engine: EngineConnSettings,
    pub print: PrintSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppSettings {
    pub title: String,
    /// Project whose costs are shown; the views stay empty when unset.
    #[serde(default)]
    pub project_id: Option<String>,
    pub width: u32,
    pub height: u32,
    pub theme: String, // "dark" or "light"
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EngineConnSettings {
    pub host: String,
    pub port: u16,
}

impl EngineConnSettings {
    pub fn endpoint(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PrintSettings {
    pub base_url: String,
    #[serde(default)]
    pub options: Vec<PrintOptionSetting>,
}

/// One export option of the print view, sent as a boolean query flag.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PrintOptionSetting {
    pub name: String,
    pub label: String,
    #[serde(default)]
    pub enabled: bool,
}

impl AppConfig {
    pub fn load_default() -> Result<Self, anyhow::Error> {
        let config_str = include_str!("../../assets/config/default.json");
        Self::from_json(config_str)
    }

    pub fn from_json(config_str: &str) -> Result<Self, anyhow::Error> {
        let config: AppConfig = serde_json::from_str(config_str)?;
        Ok(config)
    }

    /// Project id with surrounding whitespace removed, `None` when blank.
    pub fn project_id(&self) -> Option<&str> {
        self.app
            .project_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_default_config_loads() {
        let config = AppConfig::load_default().unwrap();
        assert_eq!(config.engine.endpoint(), "http://127.0.0.1:50051");
        assert_eq!(config.project_id(), Some("P-100"));
        assert_eq!(config.print.options.len(), 3);
    }

    #[test]
    fn blank_project_id_is_treated_as_unset() {
        let json = r#"{
            "version": "1",
            "app": { "title": "t", "project_id": "  ", "width": 1, "height": 1, "theme": "dark" },
            "engine": { "host": "h", "port": 1 },
            "print": { "base_url": "https://h/print" }
        }"#;
        let config = AppConfig::from_json(json).unwrap();
        assert_eq!(config.project_id(), None);
        assert!(config.print.options.is_empty());
    }
}
