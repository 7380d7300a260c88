//! ChangeImporter trait definition.
//!
//! The synchronization engine drives an importer with one call per
//! detected change, in the order the changes must appear on the wire.

use sync_core::{Folder, SyncItem};
use tag_sink::Result;

/// Receiver of detected changes.
///
/// Message-level operations return `Ok(false)` when the importer refuses
/// the change and `Ok(true)` otherwise. Errors only come from the sink the
/// importer writes to and are passed through untouched.
pub trait ChangeImporter {
    /// Hand the importer the sync state and flags of the request.
    fn configure(&mut self, state: Option<&str>, flags: u32) -> bool;

    /// Resumable state held by the importer, if any.
    fn get_state(&self) -> Option<String>;

    /// Load pending conflicts for a folder.
    fn load_conflicts(&mut self, folder_id: &str, state: Option<&str>) -> bool;

    /// A message was added (`is_new`) or modified.
    fn import_message_upsert(
        &mut self,
        id: &str,
        payload: &dyn SyncItem,
        is_new: bool,
    ) -> Result<bool>;

    /// A message was deleted.
    fn import_message_deletion(&mut self, id: &str) -> Result<bool>;

    /// The read flag of a mail message changed.
    fn import_message_read_flag(&mut self, id: &str, flag: bool) -> Result<bool>;

    /// A message moved to another folder.
    fn import_message_move(&mut self, id: &str, new_folder: &str) -> Result<bool>;

    /// A folder was added (`is_new`) or changed. Returns the folder's server id.
    fn import_folder_upsert(&mut self, folder: &Folder, is_new: bool) -> Result<String>;

    /// A folder was deleted.
    fn import_folder_deletion(&mut self, id: &str, parent: &str) -> Result<bool>;
}
