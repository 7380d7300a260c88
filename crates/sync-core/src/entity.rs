//! Entity classes.
//!
//! Every payload carries an `EntityType` statically; the exporter compares
//! it by equality against the class a session was opened for.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The class of object a payload represents.
///
/// String names follow the ActiveSync collection class names in lowercase
/// (`email`, `calendar`, `contacts`), plus `folder` for hierarchy entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityType {
    #[serde(rename = "email", alias = "mail")]
    Mail,
    #[serde(rename = "calendar")]
    Calendar,
    #[serde(rename = "contacts", alias = "contact")]
    Contact,
    #[serde(rename = "folder")]
    Folder,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid entity type: '{0}'. Expected one of email, calendar, contacts, folder")]
pub struct EntityTypeError(pub String);

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mail => "email",
            Self::Calendar => "calendar",
            Self::Contact => "contacts",
            Self::Folder => "folder",
        }
    }

    /// Read flags only exist for mail.
    pub fn is_mail(&self) -> bool {
        matches!(self, Self::Mail)
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntityType {
    type Err = EntityTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "email" | "mail" => Ok(Self::Mail),
            "calendar" => Ok(Self::Calendar),
            "contacts" | "contact" => Ok(Self::Contact),
            "folder" => Ok(Self::Folder),
            _ => Err(EntityTypeError(s.to_string())),
        }
    }
}
