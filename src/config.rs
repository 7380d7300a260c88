//! Session configuration.
//!
//! A session file names the entity class the exporter accepts for
//! message-level changes:
//!
//! ```yaml
//! name: ann-iphone-inbox
//! class: email
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use sync_core::EntityType;

/// Error type for session configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading the session file
    #[error("Failed to read session file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Class that carries no message payloads
    #[error("Unsupported session class: {0}")]
    UnsupportedClass(EntityType),
}

/// Settings for one export session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Label used in log output.
    #[serde(default)]
    pub name: Option<String>,

    /// Entity class accepted for message upserts and read flag changes.
    #[serde(default = "default_class")]
    pub class: EntityType,
}

fn default_class() -> EntityType {
    EntityType::Mail
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            name: None,
            class: default_class(),
        }
    }
}

impl SessionConfig {
    /// Load a session from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a session from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the class is one message payloads can belong to.
    ///
    /// Folder changes are exported in every session, so a folder-class
    /// session would reject every message upsert.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.class == EntityType::Folder {
            return Err(ConfigError::UnsupportedClass(self.class));
        }
        Ok(())
    }

    /// The session name, or the class name when none is set.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(self.class.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_yaml() {
        let config = SessionConfig::from_yaml("name: inbox-push\nclass: contacts\n").unwrap();
        assert_eq!(config.name.as_deref(), Some("inbox-push"));
        assert_eq!(config.class, EntityType::Contact);
        assert_eq!(config.label(), "inbox-push");
    }

    #[test]
    fn test_defaults() {
        let config = SessionConfig::from_yaml("{}").unwrap();
        assert_eq!(config, SessionConfig::default());
        assert_eq!(config.class, EntityType::Mail);
        assert_eq!(config.label(), "email");
    }

    #[test]
    fn test_invalid_class() {
        let result = SessionConfig::from_yaml("class: tasks\n");
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_folder_class_is_unsupported() {
        let result = SessionConfig::from_yaml("class: folder\n");
        assert!(matches!(
            result,
            Err(ConfigError::UnsupportedClass(EntityType::Folder))
        ));

        let session = SessionConfig {
            name: Some("hierarchy".to_string()),
            class: EntityType::Folder,
        };
        assert!(session.validate().is_err());
        assert!(SessionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "class: calendar").unwrap();

        let config = SessionConfig::from_file(file.path()).unwrap();
        assert_eq!(config.class, EntityType::Calendar);
    }

    #[test]
    fn test_missing_file() {
        let result = SessionConfig::from_file("/nonexistent/session.yaml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
