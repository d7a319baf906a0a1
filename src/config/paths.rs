//! Path management for actual-cli
//!
//! Both locations hang off the user's home directory:
//!
//! - config file: `~/.config/actual-budget/.env`
//! - default data directory: `~/.cache/actual-budget/data`

use std::path::PathBuf;

use crate::error::ActualError;

/// Manages the filesystem locations actual-cli reads from
#[derive(Debug, Clone)]
pub struct ActualPaths {
    home_dir: PathBuf,
}

impl ActualPaths {
    /// Resolve paths from the current user's home directory
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ActualError> {
        let home_dir = directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().to_path_buf())
            .ok_or_else(|| ActualError::Config("Could not determine home directory".into()))?;

        Ok(Self { home_dir })
    }

    /// Create ActualPaths rooted at a custom home directory (useful for testing)
    pub fn with_home_dir(home_dir: impl Into<PathBuf>) -> Self {
        Self {
            home_dir: home_dir.into(),
        }
    }

    /// Get the path to the `.env` config file
    pub fn env_file(&self) -> PathBuf {
        self.home_dir
            .join(".config")
            .join("actual-budget")
            .join(".env")
    }

    /// Get the default local data directory for the budget client
    pub fn default_data_dir(&self) -> PathBuf {
        self.home_dir
            .join(".cache")
            .join("actual-budget")
            .join("data")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_home_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ActualPaths::with_home_dir(temp_dir.path());

        assert_eq!(
            paths.env_file(),
            temp_dir.path().join(".config/actual-budget/.env")
        );
        assert_eq!(
            paths.default_data_dir(),
            temp_dir.path().join(".cache/actual-budget/data")
        );
    }
}
