use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "config/chat.json";

fn default_username() -> String {
    "Student_User".to_string()
}

fn default_theme() -> String {
    "Dark Mode".to_string()
}

fn default_timestamps() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Initial state of the timestamp checkbox.
    #[serde(default = "default_timestamps")]
    pub timestamps: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            username: default_username(),
            theme: default_theme(),
            timestamps: default_timestamps(),
        }
    }
}

pub fn load_config(path: &str) -> AppConfig {
    let path = Path::new(path);
    match fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Failed to parse config file {}: {err}", path.display());
                AppConfig::default()
            }
        },
        Err(err) => {
            log::info!(
                "Config file {} not found ({err}); using defaults",
                path.display()
            );
            AppConfig::default()
        }
    }
}
