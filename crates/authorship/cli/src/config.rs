//! CLI configuration

use crate::error::{CliError, CliResult};
use crate::output::OutputFormat;
use authorship_engine::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CliConfig {
    /// Engine settings (threshold, version tag, markers)
    #[serde(default)]
    pub engine: EngineConfig,

    /// Default output format when `--output` is not given
    pub output: Option<OutputFormat>,
}

impl CliConfig {
    /// Load configuration from file
    pub fn load(path: Option<&str>) -> CliResult<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            let config: CliConfig = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(CliConfig::default())
        }
    }

    /// Get the default configuration file path
    fn default_config_path() -> CliResult<PathBuf> {
        let config_dir =
            dirs::config_dir().ok_or_else(|| CliError::Config("Cannot find config directory".into()))?;
        Ok(config_dir.join("authorship").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert!(config.output.is_none());
        assert_eq!(config.engine, EngineConfig::default());
    }

    #[test]
    fn test_load_missing_config() {
        let config = CliConfig::load(Some("/nonexistent/path/config.toml")).unwrap();
        assert!(config.output.is_none());
    }

    #[test]
    fn test_partial_engine_section() {
        let config: CliConfig = toml::from_str(
            r#"
            output = "json"

            [engine]
            synthetic_confidence_threshold = 0.5
            "#,
        )
        .unwrap();
        assert_eq!(config.output, Some(OutputFormat::Json));
        assert_eq!(config.engine.synthetic_confidence_threshold, 0.5);
        assert_eq!(config.engine.default_human_role, "prompt-author");
    }
}
