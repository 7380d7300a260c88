//! Tag stream sink abstraction.
//!
//! This crate defines the `TagSink` trait, the narrow capability the push
//! exporter and the payload encoders write through. A sink receives three
//! ordered, nesting-sensitive primitives (open a tag, write content, close
//! the innermost tag) and is responsible for turning them into bytes.
//!
//! The bit-level WBXML encoder lives with the transport and implements this
//! trait there. This crate ships `RecordingSink`, an in-memory
//! implementation that validates nesting and can render what it captured
//! as indented text for logs, replay output and tests.

mod error;
mod recording;
mod traits;

pub use error::{Result, SinkError};
pub use recording::{RecordingSink, SinkEvent};
pub use traits::TagSink;
