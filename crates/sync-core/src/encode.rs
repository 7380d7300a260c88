//! Self-serialization traits and field helpers shared by payload encoders.

use crate::EntityType;
use chrono::{DateTime, Utc};
use tag_sink::{Result, TagSink};
use wbxml_types::Tag;

/// Writes an object's own fields onto a sink.
///
/// Implementations write field elements only; the surrounding structure
/// (`Add`/`Change`, `ServerId`, `ApplicationData`) belongs to the caller.
pub trait Encode {
    fn encode(&self, sink: &mut dyn TagSink) -> Result<()>;
}

/// An encodable object that declares its entity class.
pub trait SyncItem: Encode {
    fn entity_type(&self) -> EntityType;
}

impl<T: Encode + ?Sized> Encode for &T {
    fn encode(&self, sink: &mut dyn TagSink) -> Result<()> {
        (**self).encode(sink)
    }
}

impl<T: SyncItem + ?Sized> SyncItem for &T {
    fn entity_type(&self) -> EntityType {
        (**self).entity_type()
    }
}

pub(crate) fn write_opt(sink: &mut dyn TagSink, tag: Tag, value: Option<&str>) -> Result<()> {
    match value {
        Some(value) => sink.element(tag, value),
        None => Ok(()),
    }
}

pub(crate) fn write_bool(sink: &mut dyn TagSink, tag: Tag, value: bool) -> Result<()> {
    sink.element(tag, if value { "1" } else { "0" })
}

/// Mail and contact date format: `2024-01-31T09:30:00.000Z`.
pub(crate) fn long_date(value: &DateTime<Utc>) -> String {
    value.format("%Y-%m-%dT%H:%M:%S.000Z").to_string()
}

/// Calendar date format: `20240131T093000Z`.
pub(crate) fn compact_date(value: &DateTime<Utc>) -> String {
    value.format("%Y%m%dT%H%M%SZ").to_string()
}
