//! @acp:module "Configuration"
//! @acp:summary "Project configuration loading and defaults"
//! @acp:domain cli
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::defaults::TierDefaults;

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = ".coursegen.config.json";

fn default_niches() -> PathBuf {
    PathBuf::from("niches.json")
}

fn default_output() -> PathBuf {
    PathBuf::from("./output")
}

/// @acp:summary "Main coursegen configuration structure"
/// @acp:lock normal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Niche dictionary (niche key -> niche definition)
    #[serde(default = "default_niches")]
    pub niches: PathBuf,

    /// Directory generated course files are written to
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Fallback tables for optional niche fields
    #[serde(default, skip_serializing_if = "is_default_tables")]
    pub defaults: TierDefaults,
}

fn is_default_tables(defaults: &TierDefaults) -> bool {
    *defaults == TierDefaults::default()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            niches: default_niches(),
            output: default_output(),
            defaults: TierDefaults::default(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a JSON file"
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @acp:summary "Load `path` if it exists, otherwise built-in settings"
    ///
    /// A config file that exists but cannot be parsed is an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output, PathBuf::from("./output"));
    }

    #[test]
    fn test_default_tables_not_serialized() {
        let json = serde_json::to_value(Config::default()).unwrap();
        assert!(json.get("defaults").is_none());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.output = PathBuf::from("dist/courses");
        config.defaults.income.average_client_price = "$90".to_string();
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let temp = TempDir::new().unwrap();
        let config = Config::load_or_default(temp.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_or_default_reads_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{"output": "dist"}"#).unwrap();

        let config = Config::load_or_default(&path).unwrap();
        assert_eq!(config.output, PathBuf::from("dist"));
        assert_eq!(config.niches, PathBuf::from("niches.json"));
    }

    #[test]
    fn test_load_or_default_rejects_malformed_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Config::load_or_default(&path),
            Err(crate::CourseError::Json(_))
        ));
    }
}
