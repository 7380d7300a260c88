//! Folder hierarchy entries.

use crate::encode::{Encode, SyncItem};
use crate::EntityType;
use serde::{Deserialize, Serialize};
use tag_sink::{Result, TagSink};
use wbxml_types::tags::folder_hierarchy;

/// Parent id of top-level folders.
pub const ROOT_PARENT_ID: &str = "0";

/// ActiveSync folder type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FolderType {
    Other,
    Inbox,
    Drafts,
    DeletedItems,
    SentItems,
    Outbox,
    Tasks,
    Calendar,
    Contacts,
    Notes,
    Journal,
    #[default]
    UserMail,
    UserCalendar,
    UserContacts,
    UserTasks,
    UserJournal,
    UserNotes,
    Unknown,
    RecipientCache,
}

impl FolderType {
    /// Numeric type as written in `FolderHierarchy:Type`.
    pub fn code(&self) -> u8 {
        match self {
            Self::Other => 1,
            Self::Inbox => 2,
            Self::Drafts => 3,
            Self::DeletedItems => 4,
            Self::SentItems => 5,
            Self::Outbox => 6,
            Self::Tasks => 7,
            Self::Calendar => 8,
            Self::Contacts => 9,
            Self::Notes => 10,
            Self::Journal => 11,
            Self::UserMail => 12,
            Self::UserCalendar => 13,
            Self::UserContacts => 14,
            Self::UserTasks => 15,
            Self::UserJournal => 16,
            Self::UserNotes => 17,
            Self::Unknown => 18,
            Self::RecipientCache => 19,
        }
    }
}

/// A folder as it appears in the device's hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub server_id: String,
    #[serde(default = "root_parent_id")]
    pub parent_id: String,
    pub display_name: String,
    #[serde(default, rename = "type")]
    pub folder_type: FolderType,
}

fn root_parent_id() -> String {
    ROOT_PARENT_ID.to_string()
}

impl Folder {
    pub fn new(
        server_id: impl Into<String>,
        parent_id: impl Into<String>,
        display_name: impl Into<String>,
        folder_type: FolderType,
    ) -> Self {
        Self {
            server_id: server_id.into(),
            parent_id: parent_id.into(),
            display_name: display_name.into(),
            folder_type,
        }
    }

    pub fn server_id(&self) -> &str {
        &self.server_id
    }
}

impl Encode for Folder {
    fn encode(&self, sink: &mut dyn TagSink) -> Result<()> {
        sink.element(folder_hierarchy::SERVER_ENTRY_ID, &self.server_id)?;
        sink.element(folder_hierarchy::PARENT_ID, &self.parent_id)?;
        sink.element(folder_hierarchy::DISPLAY_NAME, &self.display_name)?;
        sink.element(folder_hierarchy::TYPE, &self.folder_type.code().to_string())
    }
}

impl SyncItem for Folder {
    fn entity_type(&self) -> EntityType {
        EntityType::Folder
    }
}
