//! Platform-specific path helpers for configuration and log files.
//!
//! | Platform | Config Dir | Data Dir |
//! |----------|------------|----------|
//! | Linux | `~/.config/galaxy-swap` | `~/.local/share/galaxy-swap` |
//! | macOS | `~/Library/Application Support/galaxy-swap` | Same as config |
//! | Windows | `%APPDATA%/galaxy-swap` | `%LOCALAPPDATA%/galaxy-swap` |

use color_eyre::Result;
use color_eyre::eyre::eyre;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Constants
// ============================================================================

/// Application name used for directory naming.
pub const APP_NAME: &str = "galaxy-swap";

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Log file name.
pub const LOG_FILE_NAME: &str = "galaxy-swap.log";

// ============================================================================
// AppPaths
// ============================================================================

/// Resolves application directories, creating them on first use.
#[derive(Debug, Clone)]
pub struct AppPaths {
    app_name: String,
}

impl Default for AppPaths {
    fn default() -> Self {
        Self::new()
    }
}

impl AppPaths {
    #[must_use]
    pub fn new() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
        }
    }

    /// Returns the configuration directory, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn config_dir(&self) -> Result<PathBuf> {
        let mut path = dirs::config_dir().ok_or_else(|| {
            eyre!(
                "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
            )
        })?;
        path.push(&self.app_name);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Returns the data directory, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be determined or created.
    pub fn data_dir(&self) -> Result<PathBuf> {
        let mut path =
            dirs::data_dir().ok_or_else(|| eyre!("Could not find data directory"))?;
        path.push(&self.app_name);
        fs::create_dir_all(&path)?;
        Ok(path)
    }

    /// Path of the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined
    /// or created.
    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(CONFIG_FILE_NAME))
    }

    /// Path of the log file.
    ///
    /// # Errors
    ///
    /// Returns an error if the data directory cannot be determined or created.
    pub fn log_file(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(LOG_FILE_NAME))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_app_name() {
        assert_eq!(AppPaths::default().app_name, "galaxy-swap");
    }

    #[test]
    fn test_file_names() {
        let paths = AppPaths::new();
        if let Ok(config) = paths.config_file() {
            assert!(config.ends_with("galaxy-swap/config.json"));
        }
        if let Ok(log) = paths.log_file() {
            assert_eq!(log.file_name().and_then(|n| n.to_str()), Some("galaxy-swap.log"));
        }
    }
}
