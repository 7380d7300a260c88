//! Streaming exporter: turns import calls into nested tag sub-trees.
//!
//! Every call writes one complete sub-tree before it returns, in call
//! order, with no buffering:
//!
//! ```text
//! upsert          Add|Change { ServerId, ApplicationData { <payload> } }
//! deletion        Delete { ServerId }
//! read flag       Change { ServerId, ApplicationData { POOMMAIL:Read } }
//! folder upsert   FolderHierarchy:Add|Update { <folder> }
//! folder deletion FolderHierarchy:Delete { FolderHierarchy:ServerId }
//! ```

use std::collections::HashSet;

use sync_core::{ChangeEvent, Encode, EntityType, Folder, SyncItem};
use tag_sink::{Result, TagSink};
use wbxml_types::tags::{airsync, email, folder_hierarchy};

use crate::importer::ChangeImporter;
use crate::stats::ExportStats;

/// What a single change did to the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// A sub-tree was written.
    Emitted,
    /// Accepted without writing: a duplicate upsert or a move.
    Skipped,
    /// Refused: wrong entity class, or no server id.
    Rejected,
}

impl ApplyOutcome {
    /// The boolean an import call reports for this outcome.
    pub fn accepted(&self) -> bool {
        !matches!(self, Self::Rejected)
    }
}

/// Exporter bound to one sink and one entity class for one session.
///
/// Message upserts are sent at most once per server id for the lifetime of
/// the exporter; deletions and folder changes are written every time. The
/// exporter owns its sink exclusively and must not be shared between
/// callers.
///
/// # Example
///
/// ```rust
/// use push_sync::{ChangeImporter, ChangeStreamExporter};
/// use sync_core::{EntityType, MailMessage};
/// use tag_sink::RecordingSink;
///
/// let mut exporter = ChangeStreamExporter::new(RecordingSink::new(), EntityType::Mail);
/// let mail = MailMessage::default();
/// assert!(exporter.import_message_upsert("5", &mail, true).unwrap());
/// // Same id again: accepted, nothing written.
/// assert!(exporter.import_message_upsert("5", &mail, true).unwrap());
/// assert_eq!(exporter.stats().adds, 1);
/// ```
pub struct ChangeStreamExporter<S: TagSink> {
    sink: S,
    type_filter: EntityType,
    seen: HashSet<String>,
    stats: ExportStats,
}

impl<S: TagSink> ChangeStreamExporter<S> {
    pub fn new(sink: S, type_filter: EntityType) -> Self {
        Self {
            sink,
            type_filter,
            seen: HashSet::new(),
            stats: ExportStats::default(),
        }
    }

    /// The entity class this session exports.
    pub fn type_filter(&self) -> EntityType {
        self.type_filter
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Whether an upsert for `id` has already been written this session.
    pub fn has_seen(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    pub fn stats(&self) -> &ExportStats {
        &self.stats
    }

    pub fn into_inner(self) -> S {
        self.sink
    }

    /// End the session, returning the sink and the session's counters.
    pub fn finish(self) -> (S, ExportStats) {
        tracing::info!(
            "Export session for {} finished: {}",
            self.type_filter,
            self.stats
        );
        (self.sink, self.stats)
    }

    /// Dispatch one change event to the matching import operation.
    pub fn apply(&mut self, event: &ChangeEvent) -> Result<ApplyOutcome> {
        match event {
            ChangeEvent::MessageUpsert {
                id,
                payload,
                is_new,
            } => self.upsert_message(id, payload, *is_new),
            ChangeEvent::MessageDeletion { id } => self.delete_message(id),
            ChangeEvent::ReadFlagChange { id, flag } => self.change_read_flag(id, *flag),
            ChangeEvent::MessageMove { id, new_folder } => {
                self.ignore_move(id, new_folder);
                Ok(ApplyOutcome::Skipped)
            }
            ChangeEvent::FolderUpsert { folder, is_new } => {
                self.upsert_folder(folder, *is_new)?;
                Ok(ApplyOutcome::Emitted)
            }
            ChangeEvent::FolderDeletion { id, .. } => {
                self.delete_folder(id)?;
                Ok(ApplyOutcome::Emitted)
            }
        }
    }

    fn upsert_message(
        &mut self,
        id: &str,
        payload: &dyn SyncItem,
        is_new: bool,
    ) -> Result<ApplyOutcome> {
        if self.reject_empty_id(id, "upsert") {
            return Ok(ApplyOutcome::Rejected);
        }

        let entity_type = payload.entity_type();
        if entity_type != self.type_filter {
            tracing::debug!(
                "Rejecting {entity_type} upsert for {id}: session exports {}",
                self.type_filter
            );
            self.stats.rejected += 1;
            return Ok(ApplyOutcome::Rejected);
        }

        if !self.seen.insert(id.to_string()) {
            tracing::debug!("Object {id} already sent in this session, skipping");
            self.stats.duplicates_skipped += 1;
            return Ok(ApplyOutcome::Skipped);
        }

        let command = if is_new { airsync::ADD } else { airsync::MODIFY };
        self.sink.start_tag(command)?;
        self.sink.element(airsync::SERVER_ENTRY_ID, id)?;
        self.sink.start_tag(airsync::DATA)?;
        payload.encode(&mut self.sink)?;
        self.sink.end_tag()?;
        self.sink.end_tag()?;

        if is_new {
            self.stats.adds += 1;
        } else {
            self.stats.modifies += 1;
        }
        tracing::trace!("Wrote {command} for {id}");
        Ok(ApplyOutcome::Emitted)
    }

    fn delete_message(&mut self, id: &str) -> Result<ApplyOutcome> {
        if self.reject_empty_id(id, "deletion") {
            return Ok(ApplyOutcome::Rejected);
        }

        self.sink.start_tag(airsync::REMOVE)?;
        self.sink.element(airsync::SERVER_ENTRY_ID, id)?;
        self.sink.end_tag()?;

        self.stats.removes += 1;
        tracing::trace!("Wrote {} for {id}", airsync::REMOVE);
        Ok(ApplyOutcome::Emitted)
    }

    fn change_read_flag(&mut self, id: &str, flag: bool) -> Result<ApplyOutcome> {
        if self.reject_empty_id(id, "read flag change") {
            return Ok(ApplyOutcome::Rejected);
        }
        if !self.type_filter.is_mail() {
            tracing::debug!(
                "Rejecting read flag change for {id}: session exports {}",
                self.type_filter
            );
            self.stats.rejected += 1;
            return Ok(ApplyOutcome::Rejected);
        }

        self.sink.start_tag(airsync::MODIFY)?;
        self.sink.element(airsync::SERVER_ENTRY_ID, id)?;
        self.sink.start_tag(airsync::DATA)?;
        self.sink.element(email::READ, if flag { "1" } else { "0" })?;
        self.sink.end_tag()?;
        self.sink.end_tag()?;

        self.stats.read_flags += 1;
        tracing::trace!("Wrote read flag {flag} for {id}");
        Ok(ApplyOutcome::Emitted)
    }

    /// Message-level changes need a server id to address on the device.
    fn reject_empty_id(&mut self, id: &str, what: &str) -> bool {
        if !id.is_empty() {
            return false;
        }
        tracing::warn!("Rejecting message {what} without server id");
        self.stats.rejected += 1;
        true
    }

    fn ignore_move(&mut self, id: &str, new_folder: &str) {
        // A move has no forward-only representation on this stream.
        tracing::debug!("Ignoring move of {id} to {new_folder}");
        self.stats.moves_ignored += 1;
    }

    fn upsert_folder(&mut self, folder: &Folder, is_new: bool) -> Result<()> {
        let command = if is_new {
            folder_hierarchy::ADD
        } else {
            folder_hierarchy::UPDATE
        };
        self.sink.start_tag(command)?;
        folder.encode(&mut self.sink)?;
        self.sink.end_tag()?;

        if is_new {
            self.stats.folder_adds += 1;
        } else {
            self.stats.folder_updates += 1;
        }
        tracing::trace!("Wrote {command} for folder {}", folder.server_id());
        Ok(())
    }

    fn delete_folder(&mut self, id: &str) -> Result<()> {
        self.sink.start_tag(folder_hierarchy::REMOVE)?;
        self.sink.element(folder_hierarchy::SERVER_ENTRY_ID, id)?;
        self.sink.end_tag()?;

        self.stats.folder_removes += 1;
        tracing::trace!("Wrote {} for folder {id}", folder_hierarchy::REMOVE);
        Ok(())
    }
}

impl<S: TagSink> ChangeImporter for ChangeStreamExporter<S> {
    fn configure(&mut self, _state: Option<&str>, _flags: u32) -> bool {
        true
    }

    fn get_state(&self) -> Option<String> {
        None
    }

    fn load_conflicts(&mut self, _folder_id: &str, _state: Option<&str>) -> bool {
        true
    }

    fn import_message_upsert(
        &mut self,
        id: &str,
        payload: &dyn SyncItem,
        is_new: bool,
    ) -> Result<bool> {
        self.upsert_message(id, payload, is_new)
            .map(|outcome| outcome.accepted())
    }

    fn import_message_deletion(&mut self, id: &str) -> Result<bool> {
        self.delete_message(id)
            .map(|outcome| outcome.accepted())
    }

    fn import_message_read_flag(&mut self, id: &str, flag: bool) -> Result<bool> {
        self.change_read_flag(id, flag)
            .map(|outcome| outcome.accepted())
    }

    fn import_message_move(&mut self, id: &str, new_folder: &str) -> Result<bool> {
        self.ignore_move(id, new_folder);
        Ok(true)
    }

    fn import_folder_upsert(&mut self, folder: &Folder, is_new: bool) -> Result<String> {
        self.upsert_folder(folder, is_new)?;
        Ok(folder.server_id().to_string())
    }

    fn import_folder_deletion(&mut self, id: &str, _parent: &str) -> Result<bool> {
        self.delete_folder(id)?;
        Ok(true)
    }
}
