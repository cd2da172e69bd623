//! Path management for FinDash
//!
//! ## Path Resolution Order
//!
//! 1. `FINDASH_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory for `findash`
//!    (`~/.config/findash` on Linux, `%APPDATA%\findash\config` on Windows)

use std::ffi::OsString;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::FinDashError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "FINDASH_DATA_DIR";

/// Manages all paths used by FinDash
#[derive(Debug, Clone)]
pub struct FinDashPaths {
    base_dir: PathBuf,
}

impl FinDashPaths {
    /// Resolve the base directory from the environment or the platform default
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, FinDashError> {
        Self::from_override(std::env::var_os(DATA_DIR_ENV))
    }

    /// Resolve from an explicit override value, falling back to the platform default
    pub fn from_override(custom: Option<OsString>) -> Result<Self, FinDashError> {
        let base_dir = match custom {
            Some(custom) => PathBuf::from(custom),
            None => ProjectDirs::from("", "", "findash")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    FinDashError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Create FinDashPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the store files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Embedded database used by the sqlite backend
    pub fn database_file(&self) -> PathBuf {
        self.data_dir().join("findash.db")
    }

    /// Worksheet used by the sheet backend
    pub fn sheet_file(&self) -> PathBuf {
        self.data_dir().join("transactions.csv")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), FinDashError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FinDashError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| FinDashError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if FinDash has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinDashPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(
            paths.database_file(),
            temp_dir.path().join("data").join("findash.db")
        );
        assert_eq!(
            paths.sheet_file(),
            temp_dir.path().join("data").join("transactions.csv")
        );
    }

    #[test]
    fn test_override_wins() {
        let temp_dir = TempDir::new().unwrap();

        let paths =
            FinDashPaths::from_override(Some(temp_dir.path().as_os_str().to_owned())).unwrap();

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = FinDashPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(!paths.is_initialized());
    }
}
