//! ActiveSync WBXML tag vocabulary.
//!
//! Every element written onto an outbound sync stream is identified by a
//! code page and a one-byte token within that page. This crate carries
//! those identifiers as plain `Copy` values so the exporter, the payload
//! encoders and the sinks all agree on one vocabulary:
//!
//! - [`CodePage`] - The code pages used by the push layer
//! - [`Tag`] - A single element identifier (page + token + name)
//! - [`tags`] - Named constants grouped per code page
//!
//! # Architecture
//!
//! ```text
//! wbxml-types (this crate)
//!    │
//!    ├─── tag-sink    (sink trait speaks in Tags)
//!    ├─── sync-core   (payload encoders pick field Tags)
//!    └─── push-sync   (exporter emits structural Tags)
//! ```
//!
//! # Example
//!
//! ```rust
//! use wbxml_types::{tags::airsync, CodePage, Tag};
//!
//! assert_eq!(airsync::ADD.page, CodePage::AirSync);
//! assert_eq!(airsync::ADD.token, 0x07);
//! assert_eq!(Tag::lookup(CodePage::AirSync, 0x07), Some(airsync::ADD));
//! ```

mod page;
mod tag;
pub mod tags;

pub use page::CodePage;
pub use tag::Tag;
