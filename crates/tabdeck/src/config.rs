use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::deck::Topic;

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "tabdeck";

/// Display preferences. The current slide position is never stored here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_topic: Option<String>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `tabdeck config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("using default config: {e}");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# tabdeck configuration\n{yaml}");
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.theme" => {
                match value {
                    "light" | "dark" => {}
                    _ => anyhow::bail!("Invalid theme: {value}. Must be 'light' or 'dark'."),
                }
                self.defaults_mut().theme = Some(value.to_string());
            }
            "defaults.transition" => {
                match value {
                    "fade" | "slide" | "none" => {}
                    _ => anyhow::bail!(
                        "Invalid transition: {value}. Must be 'fade', 'slide', or 'none'."
                    ),
                }
                self.defaults_mut().transition = Some(value.to_string());
            }
            "defaults.start_topic" => {
                let topic: Topic = value.parse()?;
                self.defaults_mut().start_topic = Some(topic.id().to_string());
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: defaults.theme, defaults.transition, defaults.start_topic"
            ),
        }
        Ok(())
    }

    pub fn theme(&self) -> Option<&str> {
        self.defaults.as_ref().and_then(|d| d.theme.as_deref())
    }

    pub fn transition(&self) -> Option<&str> {
        self.defaults.as_ref().and_then(|d| d.transition.as_deref())
    }

    /// Configured start topic. A hand-edited value that no longer parses is
    /// ignored with a warning.
    pub fn start_topic(&self) -> Option<Topic> {
        let raw = self.defaults.as_ref()?.start_topic.as_deref()?;
        match raw.parse() {
            Ok(topic) => Some(topic),
            Err(e) => {
                tracing::warn!("ignoring defaults.start_topic: {e}");
                None
            }
        }
    }

    fn defaults_mut(&mut self) -> &mut DefaultsConfig {
        self.defaults.get_or_insert_with(DefaultsConfig::default)
    }
}
