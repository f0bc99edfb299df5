//! Display configuration persistence
//!
//! Stores CLI display preferences in `~/.config/tabgrid/config.yaml`

use serde::{Deserialize, Serialize};

/// Display preferences that persist across runs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Upper bound on a rendered column's width, in characters
    #[serde(default = "default_max_column_width")]
    pub max_column_width: usize,
    /// Prefix rendered rows with their index
    #[serde(default)]
    pub show_row_numbers: bool,
}

fn default_max_column_width() -> usize {
    40
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_column_width: default_max_column_width(),
            show_row_numbers: false,
        }
    }
}

impl AppConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!("Config file not found at {}, using defaults", path.display());
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::debug!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
