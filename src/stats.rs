//! Per-session export counters.

/// What an exporter wrote, and what it declined to write, during one
/// session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExportStats {
    pub adds: u64,
    pub modifies: u64,
    pub removes: u64,
    pub read_flags: u64,
    pub folder_adds: u64,
    pub folder_updates: u64,
    pub folder_removes: u64,
    /// Upserts of ids already sent this session.
    pub duplicates_skipped: u64,
    /// Type-gated message upserts and read flag changes.
    pub rejected: u64,
    pub moves_ignored: u64,
}

impl ExportStats {
    /// Number of sub-trees written to the sink.
    pub fn emitted(&self) -> u64 {
        self.adds
            + self.modifies
            + self.removes
            + self.read_flags
            + self.folder_adds
            + self.folder_updates
            + self.folder_removes
    }
}

impl std::fmt::Display for ExportStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "emitted={} (add={} change={} delete={} read={} folder_add={} folder_update={} folder_delete={}) skipped={} rejected={} moves_ignored={}",
            self.emitted(),
            self.adds,
            self.modifies,
            self.removes,
            self.read_flags,
            self.folder_adds,
            self.folder_updates,
            self.folder_removes,
            self.duplicates_skipped,
            self.rejected,
            self.moves_ignored,
        )
    }
}
