//! Change events produced by the synchronization engine.

use crate::{Folder, Payload};
use serde::{Deserialize, Serialize};

/// One detected change, in the order it should reach the device.
///
/// Events are serde-tagged by `kind` so a feed can be stored as JSON lines:
///
/// ```json
/// {"kind": "message_upsert", "id": "5", "is_new": true, "payload": {"type": "email", "subject": "Hi"}}
/// {"kind": "read_flag_change", "id": "5", "flag": true}
/// {"kind": "folder_deletion", "id": "f3", "parent": "0"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChangeEvent {
    MessageUpsert {
        id: String,
        payload: Payload,
        #[serde(default)]
        is_new: bool,
    },
    MessageDeletion {
        id: String,
    },
    ReadFlagChange {
        id: String,
        flag: bool,
    },
    MessageMove {
        id: String,
        new_folder: String,
    },
    FolderUpsert {
        folder: Folder,
        #[serde(default)]
        is_new: bool,
    },
    FolderDeletion {
        id: String,
        #[serde(default)]
        parent: String,
    },
}

impl ChangeEvent {
    /// Server id of the object the event is about.
    pub fn id(&self) -> &str {
        match self {
            Self::MessageUpsert { id, .. }
            | Self::MessageDeletion { id }
            | Self::ReadFlagChange { id, .. }
            | Self::MessageMove { id, .. }
            | Self::FolderDeletion { id, .. } => id,
            Self::FolderUpsert { folder, .. } => folder.server_id(),
        }
    }

    /// Event kind as spelled in event feeds.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MessageUpsert { .. } => "message_upsert",
            Self::MessageDeletion { .. } => "message_deletion",
            Self::ReadFlagChange { .. } => "read_flag_change",
            Self::MessageMove { .. } => "message_move",
            Self::FolderUpsert { .. } => "folder_upsert",
            Self::FolderDeletion { .. } => "folder_deletion",
        }
    }
}
