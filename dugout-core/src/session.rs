//! Persisted sign-in session.
//!
//! A successful `auth login` stores the backend's access token here so
//! later commands can authenticate without prompting again. Stored as
//! TOML next to the global config.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::GlobalConfig;
use crate::error::{DugoutError, DugoutResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub user_id: Uuid,
    pub email: String,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    fn path() -> DugoutResult<std::path::PathBuf> {
        Ok(GlobalConfig::config_dir()?.join("session.toml"))
    }

    /// Load the stored session, if one exists.
    pub fn load() -> DugoutResult<Option<Self>> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)?;
        let session: Session =
            toml::from_str(&content).map_err(|e| DugoutError::Config(e.to_string()))?;
        Ok(Some(session))
    }

    /// Load the stored session, failing if there is none or it expired.
    pub fn require() -> DugoutResult<Self> {
        let session = Self::load()?.ok_or(DugoutError::NotSignedIn)?;

        if session.is_expired() {
            return Err(DugoutError::Auth(
                "Session expired. Run `dugout auth login` again".into(),
            ));
        }

        Ok(session)
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }

    pub fn save(&self) -> DugoutResult<()> {
        let dir = GlobalConfig::config_dir()?;
        std::fs::create_dir_all(&dir)?;

        let content =
            toml::to_string_pretty(self).map_err(|e| DugoutError::Config(e.to_string()))?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }

    /// Remove the stored session (logout). Missing file is not an error.
    pub fn clear() -> DugoutResult<()> {
        let path = Self::path()?;
        if path.exists() {
            std::fs::remove_file(&path)?;
        }
        Ok(())
    }
}
