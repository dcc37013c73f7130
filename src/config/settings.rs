use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::config::defaults;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub api: ApiConfig,
    pub files: FileConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiConfig {
    pub url: String,
    pub key: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FileConfig {
    pub input: String,
    pub output: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutputConfig {
    pub use_colors: bool,
}

impl Settings {
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path_static()?;

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            // Return default settings if config doesn't exist
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path_static()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(config_path, content)?;

        Ok(())
    }

    pub fn get_config_path(&self) -> Result<PathBuf> {
        Self::get_config_path_static()
    }

    fn get_config_path_static() -> Result<PathBuf> {
        let home_dir =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("Could not find home directory"))?;

        Ok(home_dir.join(".gembatch").join("config.toml"))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                url: defaults::DEFAULT_API_URL.to_string(),
                key: defaults::DEFAULT_API_KEY.to_string(),
            },
            files: FileConfig {
                input: defaults::DEFAULT_INPUT_FILE.to_string(),
                output: defaults::DEFAULT_OUTPUT_FILE.to_string(),
            },
            output: OutputConfig { use_colors: true },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_match_builtin_constants() {
        let settings = Settings::default();
        assert_eq!(settings.api.url, defaults::DEFAULT_API_URL);
        assert_eq!(settings.files.input, "ai.txt");
        assert_eq!(settings.files.output, "llm_responses.json");
        assert!(settings.output.use_colors);
    }

    #[test]
    fn default_config_file_parses_back_to_defaults() {
        let content = defaults::DefaultConfig::create_default_config_file();
        let settings: Settings = toml::from_str(&content).unwrap();
        assert_eq!(settings.api.url, defaults::DEFAULT_API_URL);
        assert_eq!(settings.api.key, defaults::DEFAULT_API_KEY);
        assert_eq!(settings.files.output, defaults::DEFAULT_OUTPUT_FILE);
    }
}
