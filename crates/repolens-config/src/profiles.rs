//! Named LLM endpoint profiles
//!
//! Profiles live in `~/.repolens/config.yaml`:
//!
//! ```yaml
//! profiles:
//!   work:
//!     api_base: https://api.openai.com/v1
//!     api_key: sk-...
//!     model: gpt-4o-mini
//! default_profile: work
//! ```

use crate::error::{ConfigError, Result};
use crate::types::llm::validate_api_base;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

const STORE_DIR: &str = ".repolens";
const STORE_FILE: &str = "config.yaml";

/// One LLM endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
}

impl Profile {
    pub fn validate(&self) -> Result<()> {
        validate_api_base("profile.api_base", &self.api_base)?;
        if self.model.is_empty() {
            return Err(ConfigError::ValidationError {
                field: "profile.model".to_string(),
                message: "Model name cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// The on-disk profile store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStore {
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_profile: Option<String>,
}

impl ProfileStore {
    /// `~/.repolens/config.yaml`
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirUnavailable)?;
        Ok(home.join(STORE_DIR).join(STORE_FILE))
    }

    /// Load the store from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load the store from `path`. A missing file is an empty store.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no profile store yet");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::IoError {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| ConfigError::from_yaml_error(e, &content, path.to_str()))
    }

    /// Save the store to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path()?)
    }

    /// Save the store to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::IoError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let data = serde_yaml::to_string(self).map_err(|e| ConfigError::SerializeError {
            message: e.to_string(),
        })?;

        fs::write(path, data).map_err(|e| ConfigError::IoError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Insert or replace a profile. The first profile added becomes the default.
    pub fn add_profile(&mut self, name: impl Into<String>, profile: Profile) -> Result<()> {
        profile.validate()?;
        let name = name.into();
        if self.default_profile.is_none() {
            self.default_profile = Some(name.clone());
        }
        self.profiles.insert(name, profile);
        Ok(())
    }

    pub fn get_profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    pub fn set_default_profile(&mut self, name: &str) -> Result<()> {
        if !self.profiles.contains_key(name) {
            return Err(ConfigError::ProfileNotFound {
                name: name.to_string(),
            });
        }
        self.default_profile = Some(name.to_string());
        Ok(())
    }

    /// The default profile and its name
    pub fn default_profile(&self) -> Result<(&str, &Profile)> {
        let name = self
            .default_profile
            .as_deref()
            .ok_or(ConfigError::NoDefaultProfile)?;
        let profile = self
            .profiles
            .get(name)
            .ok_or_else(|| ConfigError::ProfileNotFound {
                name: name.to_string(),
            })?;
        Ok((name, profile))
    }

    /// The named profile, or the default when `name` is `None`
    pub fn resolve(&self, name: Option<&str>) -> Result<&Profile> {
        match name {
            Some(name) => self
                .get_profile(name)
                .ok_or_else(|| ConfigError::ProfileNotFound {
                    name: name.to_string(),
                }),
            None => self.default_profile().map(|(_, profile)| profile),
        }
    }
}

/// Mask an API key for display: `sk-a...wxyz`
pub fn mask_api_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "********".to_string();
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}
