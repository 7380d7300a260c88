//! Push serialization for a mobile-device synchronization gateway.
//!
//! The synchronization engine detects changes (new or modified messages,
//! deletions, read flag toggles, folder changes) and hands them, in wire
//! order, to a [`ChangeStreamExporter`]. The exporter writes each change
//! as one complete, nested sub-tree onto the session's tag stream.
//!
//! # Features
//!
//! - Per-session deduplication: a message upsert is sent at most once per server id
//! - Type gating: payloads of the wrong entity class are refused, not written
//! - Forward-only stream: moves are accepted and ignored
//! - JSONL replay of change feeds for diagnostics
//!
//! # Crates
//!
//! - `wbxml_types` - Tag vocabulary (code pages and tokens)
//! - `tag_sink` - The sink capability and an in-memory recording sink
//! - `sync_core` - Payloads, entity classes and change events
//!
//! # CLI Usage
//!
//! ```bash
//! # Render the tag stream a mail session would produce for a feed
//! push-sync replay --events changes.jsonl --class email
//!
//! # Take the class from a session file
//! push-sync replay --events changes.jsonl --config session.yaml
//! ```

pub mod config;
pub mod exporter;
pub mod importer;
pub mod replay;
pub mod stats;

pub use config::{ConfigError, SessionConfig};
pub use exporter::{ApplyOutcome, ChangeStreamExporter};
pub use importer::ChangeImporter;
pub use replay::{read_events, replay_events, replay_file, ReplayError};
pub use stats::ExportStats;
