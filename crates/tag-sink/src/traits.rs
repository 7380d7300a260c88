//! TagSink trait definition.

use crate::Result;
use wbxml_types::Tag;

/// Receiver of an ordered, nested tag stream.
///
/// Callers are expected to close every tag they open before handing the
/// sink back; a sink may reject calls that break nesting. Sinks are not
/// safe for concurrent writers and take `&mut self` throughout.
///
/// The trait stays object safe so payload encoders can take
/// `&mut dyn TagSink`:
///
/// ```ignore
/// fn encode(&self, sink: &mut dyn TagSink) -> tag_sink::Result<()> {
///     sink.element(email::SUBJECT, &self.subject)
/// }
/// ```
pub trait TagSink {
    /// Open `tag`; everything until the matching `end_tag` nests inside it.
    fn start_tag(&mut self, tag: Tag) -> Result<()>;

    /// Close the innermost open tag.
    fn end_tag(&mut self) -> Result<()>;

    /// Write a content value inside the innermost open tag.
    fn content(&mut self, value: &str) -> Result<()>;

    /// Write a complete `tag { content }` element.
    fn element(&mut self, tag: Tag, value: &str) -> Result<()> {
        self.start_tag(tag)?;
        self.content(value)?;
        self.end_tag()
    }
}

impl<S: TagSink + ?Sized> TagSink for &mut S {
    fn start_tag(&mut self, tag: Tag) -> Result<()> {
        (**self).start_tag(tag)
    }

    fn end_tag(&mut self) -> Result<()> {
        (**self).end_tag()
    }

    fn content(&mut self, value: &str) -> Result<()> {
        (**self).content(value)
    }
}

impl<S: TagSink + ?Sized> TagSink for Box<S> {
    fn start_tag(&mut self, tag: Tag) -> Result<()> {
        (**self).start_tag(tag)
    }

    fn end_tag(&mut self) -> Result<()> {
        (**self).end_tag()
    }

    fn content(&mut self, value: &str) -> Result<()> {
        (**self).content(value)
    }
}
