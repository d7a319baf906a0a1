//! Connection settings for actual-cli
//!
//! Settings come from the process environment first and the `.env` file
//! second. Only the data directory has a default; the server URL, password
//! and sync id must be supplied one way or the other.

use std::collections::HashMap;
use std::path::PathBuf;

use super::env_file::load_env_file;
use super::paths::ActualPaths;
use crate::error::ActualError;

pub const SERVER_URL_VAR: &str = "ACTUAL_SERVER_URL";
pub const PASSWORD_VAR: &str = "ACTUAL_PASSWORD";
pub const SYNC_ID_VAR: &str = "ACTUAL_SYNC_ID";
pub const DATA_DIR_VAR: &str = "ACTUAL_DATA_DIR";
pub const ENCRYPTION_PASSWORD_VAR: &str = "ACTUAL_ENCRYPTION_PASSWORD";

const MISSING_CONFIG: &str = "Missing config. Set ACTUAL_SERVER_URL, ACTUAL_PASSWORD, \
                              ACTUAL_SYNC_ID as env vars or in ~/.config/actual-budget/.env";

/// Resolved settings for one invocation
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the budget server
    pub server_url: String,
    /// Server password
    pub password: String,
    /// Which budget file to open
    pub sync_id: String,
    /// Local working directory for the client
    pub data_dir: PathBuf,
    /// End-to-end encryption password, if the budget is encrypted
    pub encryption_password: Option<String>,
}

// Keep secrets out of debug logs.
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("server_url", &self.server_url)
            .field("password", &"***")
            .field("sync_id", &self.sync_id)
            .field("data_dir", &self.data_dir)
            .field(
                "encryption_password",
                &self.encryption_password.as_ref().map(|_| "***"),
            )
            .finish()
    }
}

impl Settings {
    /// Resolve settings from the real process environment and config file
    pub fn load(paths: &ActualPaths) -> Result<Self, ActualError> {
        Self::resolve(paths, |key| std::env::var(key).ok())
    }

    /// Resolve settings with an injectable environment lookup
    ///
    /// # Errors
    ///
    /// Returns `ActualError::Config` if the server URL, password or sync id
    /// is missing from both sources, and `ActualError::Io` if the config
    /// file exists but cannot be read.
    pub fn resolve<F>(paths: &ActualPaths, env: F) -> Result<Self, ActualError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = load_env_file(&paths.env_file())?;
        Self::from_sources(paths, env, &file)
    }

    fn from_sources<F>(
        paths: &ActualPaths,
        env: F,
        file: &HashMap<String, String>,
    ) -> Result<Self, ActualError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            env(key)
                .filter(|v| !v.is_empty())
                .or_else(|| file.get(key).filter(|v| !v.is_empty()).cloned())
        };

        let (Some(server_url), Some(password), Some(sync_id)) =
            (get(SERVER_URL_VAR), get(PASSWORD_VAR), get(SYNC_ID_VAR))
        else {
            return Err(ActualError::Config(MISSING_CONFIG.into()));
        };

        let data_dir = get(DATA_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| paths.default_data_dir());

        Ok(Self {
            server_url,
            password,
            sync_id,
            data_dir,
            encryption_password: get(ENCRYPTION_PASSWORD_VAR),
        })
    }
}
