//! In-memory sink that records the primitive call sequence.

use crate::{Result, SinkError, TagSink};
use wbxml_types::Tag;

/// One primitive call received by a [`RecordingSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Start(Tag),
    End,
    Content(String),
}

/// Sink that keeps every call in order and checks nesting as it goes.
///
/// Used as the output of the replay tool and as the observation point in
/// tests. A failed call leaves the recorded events untouched.
#[derive(Debug, Default, Clone)]
pub struct RecordingSink {
    events: Vec<SinkEvent>,
    open: Vec<Tag>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far, in call order.
    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<SinkEvent> {
        self.events
    }

    /// Number of currently open tags.
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub fn is_balanced(&self) -> bool {
        self.open.is_empty()
    }

    /// Number of times `tag` was opened.
    pub fn count_starts(&self, tag: Tag) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, SinkEvent::Start(t) if *t == tag))
            .count()
    }

    /// Drop everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
        self.open.clear();
    }

    /// Close out the stream, failing if any tag is still open.
    pub fn finish(self) -> Result<Vec<SinkEvent>> {
        if !self.open.is_empty() {
            return Err(SinkError::UnclosedTags {
                depth: self.open.len(),
            });
        }
        Ok(self.events)
    }

    /// Render the recorded stream as indented XML-like text.
    ///
    /// Elements holding a single content value are kept on one line:
    ///
    /// ```text
    /// <AirSync:Add>
    ///   <AirSync:ServerId>5</AirSync:ServerId>
    ///   <AirSync:ApplicationData>
    ///     <POOMMAIL:Read>1</POOMMAIL:Read>
    ///   </AirSync:ApplicationData>
    /// </AirSync:Add>
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        let mut stack: Vec<Tag> = Vec::new();
        let mut i = 0;

        while i < self.events.len() {
            let indent = "  ".repeat(stack.len());
            match &self.events[i] {
                SinkEvent::Start(tag) => match (self.events.get(i + 1), self.events.get(i + 2)) {
                    (Some(SinkEvent::Content(value)), Some(SinkEvent::End)) => {
                        out.push_str(&format!("{indent}<{tag}>{}</{tag}>\n", escape(value)));
                        i += 3;
                        continue;
                    }
                    (Some(SinkEvent::End), _) => {
                        out.push_str(&format!("{indent}<{tag}/>\n"));
                        i += 2;
                        continue;
                    }
                    _ => {
                        out.push_str(&format!("{indent}<{tag}>\n"));
                        stack.push(*tag);
                    }
                },
                SinkEvent::End => {
                    // Recording rejects unbalanced ends, so the stack is never empty here.
                    if let Some(tag) = stack.pop() {
                        let indent = "  ".repeat(stack.len());
                        out.push_str(&format!("{indent}</{tag}>\n"));
                    }
                }
                SinkEvent::Content(value) => {
                    out.push_str(&format!("{indent}{}\n", escape(value)));
                }
            }
            i += 1;
        }

        out
    }
}

impl TagSink for RecordingSink {
    fn start_tag(&mut self, tag: Tag) -> Result<()> {
        tracing::trace!("start {tag} at depth {}", self.open.len());
        self.open.push(tag);
        self.events.push(SinkEvent::Start(tag));
        Ok(())
    }

    fn end_tag(&mut self) -> Result<()> {
        let tag = self.open.pop().ok_or(SinkError::UnbalancedEndTag)?;
        tracing::trace!("end {tag} at depth {}", self.open.len());
        self.events.push(SinkEvent::End);
        Ok(())
    }

    fn content(&mut self, value: &str) -> Result<()> {
        if self.open.is_empty() {
            return Err(SinkError::ContentOutsideTag);
        }
        self.events.push(SinkEvent::Content(value.to_string()));
        Ok(())
    }
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
