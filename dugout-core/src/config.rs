//! Global dugout configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DugoutError, DugoutResult};

fn default_photos_bucket() -> String {
    "photos".to_string()
}

/// Global configuration at ~/.config/dugout/config.toml
///
/// The backend URL/key and the public calendar feed URL are the only
/// deployment-specific values; everything else is derived from them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Base URL of the hosted backend (auth, tables, storage).
    pub backend_url: String,
    /// Publishable API key sent with every backend request.
    pub backend_key: String,
    /// Public ICS feed the next-event resolver reads.
    pub calendar_url: String,
    #[serde(default = "default_photos_bucket")]
    pub photos_bucket: String,
}

impl GlobalConfig {
    pub fn config_dir() -> DugoutResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DugoutError::Config("Could not determine config directory".into()))?
            .join("dugout");

        Ok(config_dir)
    }

    pub fn config_path() -> DugoutResult<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn load() -> DugoutResult<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> DugoutResult<Self> {
        if !path.exists() {
            return Err(DugoutError::Config(format!(
                "No config found at {}. Create it with backend_url, backend_key and calendar_url",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| DugoutError::Config(e.to_string()))
    }

    pub fn save(&self) -> DugoutResult<()> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir)?;

        let content =
            toml::to_string_pretty(self).map_err(|e| DugoutError::Config(e.to_string()))?;
        std::fs::write(dir.join("config.toml"), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_photos_bucket_defaults_when_absent() {
        let config: GlobalConfig = toml::from_str(
            r#"
backend_url = "https://abc.example.co"
backend_key = "anon-key"
calendar_url = "https://calendar.example.com/team.ics"
"#,
        )
        .unwrap();

        assert_eq!(config.photos_bucket, "photos");
    }
}
