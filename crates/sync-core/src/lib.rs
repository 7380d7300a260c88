//! Core types for the push-sync framework.
//!
//! This crate provides the objects the synchronization engine hands to the
//! push exporter:
//!
//! - [`EntityType`] - The entity class a payload belongs to
//! - [`Encode`] / [`SyncItem`] - Self-serialization onto a [`tag_sink::TagSink`]
//! - [`MailMessage`], [`Appointment`], [`Contact`] - Message-level payloads
//! - [`Folder`] - Folder hierarchy entries
//! - [`Payload`] - Closed set of message-level payloads
//! - [`ChangeEvent`] - One detected change, as read from an event feed
//!
//! # Architecture
//!
//! ```text
//! wbxml-types ─── tag-sink
//!                    │
//!               sync-core (this crate)
//!                    │
//!               push-sync  (ChangeStreamExporter consumes SyncItems)
//! ```
//!
//! # Example
//!
//! ```rust
//! use sync_core::{EntityType, MailMessage, Payload, SyncItem};
//!
//! let payload = Payload::Mail(MailMessage {
//!     subject: Some("Quarterly report".to_string()),
//!     ..Default::default()
//! });
//! assert_eq!(payload.entity_type(), EntityType::Mail);
//! ```

pub mod calendar;
pub mod change;
pub mod contact;
pub mod encode;
pub mod entity;
pub mod folder;
pub mod mail;
pub mod payload;

// Re-exports for convenience
pub use calendar::{Appointment, Attendee, BusyStatus, Sensitivity};
pub use change::ChangeEvent;
pub use contact::Contact;
pub use encode::{Encode, SyncItem};
pub use entity::{EntityType, EntityTypeError};
pub use folder::{Folder, FolderType};
pub use mail::{Importance, MailMessage};
pub use payload::Payload;
