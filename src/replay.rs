//! Replay of JSONL change feeds.
//!
//! A feed holds one serialized `ChangeEvent` per line, in wire order.
//! Blank lines are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use sync_core::{ChangeEvent, EntityType};
use tag_sink::{RecordingSink, SinkError, TagSink};
use thiserror::Error;

use crate::exporter::{ApplyOutcome, ChangeStreamExporter};
use crate::stats::ExportStats;

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid change event on line {line}: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },

    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Parse every event in a JSONL feed.
pub fn read_events<R: BufRead>(reader: R) -> Result<Vec<ChangeEvent>, ReplayError> {
    let mut events = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event = serde_json::from_str(&line).map_err(|source| ReplayError::Parse {
            line: index + 1,
            source,
        })?;
        events.push(event);
    }
    Ok(events)
}

/// Apply events to an exporter in order, stopping at the first sink error.
pub fn replay_events<S: TagSink>(
    exporter: &mut ChangeStreamExporter<S>,
    events: &[ChangeEvent],
) -> Result<Vec<ApplyOutcome>, ReplayError> {
    let mut outcomes = Vec::with_capacity(events.len());
    for event in events {
        let outcome = exporter.apply(event)?;
        tracing::debug!("{} {} -> {outcome:?}", event.kind(), event.id());
        outcomes.push(outcome);
    }
    Ok(outcomes)
}

/// Replay a feed file into a fresh recording exporter for `class`.
///
/// Fails if the resulting stream is left with open tags.
pub fn replay_file<P: AsRef<Path>>(
    path: P,
    class: EntityType,
) -> Result<(RecordingSink, ExportStats), ReplayError> {
    let file = File::open(path.as_ref())?;
    let events = read_events(BufReader::new(file))?;
    tracing::info!(
        "Replaying {} change events from {}",
        events.len(),
        path.as_ref().display()
    );

    let mut exporter = ChangeStreamExporter::new(RecordingSink::new(), class);
    replay_events(&mut exporter, &events)?;
    let (sink, stats) = exporter.finish();

    if !sink.is_balanced() {
        return Err(SinkError::UnclosedTags { depth: sink.depth() }.into());
    }
    Ok((sink, stats))
}
