//! Context storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Where conversation contexts are kept
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// Directory for JSON context files; in-memory storage when unset
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Check if contexts persist to disk
    pub fn is_persistent(&self) -> bool {
        self.data_dir.is_some()
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.data_dir {
            Some(dir) if dir.as_os_str().to_string_lossy().trim().is_empty() => {
                Err(ValidationError::InvalidDataDir)
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_memory() {
        let config = StorageConfig::default();
        assert!(!config.is_persistent());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_blank_dir_is_invalid() {
        let config = StorageConfig {
            data_dir: Some(PathBuf::from(" ")),
        };
        assert!(config.validate().is_err());
    }
}
