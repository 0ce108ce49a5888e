use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use glossa_protocol::FieldSet;

use crate::offsets::OffsetStats;

/// Counts of what an enrichment pass changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichReport {
    pub sentences: usize,
    pub analyses: usize,
    /// Writes per analysis field, keyed by JSON field name.
    pub fields_written: BTreeMap<&'static str, usize>,
    pub offsets_written: usize,
    pub indices_written: usize,
    pub words_unlocated: usize,
}

impl EnrichReport {
    pub fn record_analysis(&mut self, written: FieldSet) {
        self.analyses += 1;
        for key in written.keys() {
            *self.fields_written.entry(key).or_default() += 1;
        }
    }

    pub fn record_offsets(&mut self, stats: OffsetStats) {
        self.offsets_written += stats.offsets_written;
        self.indices_written += stats.indices_written;
        self.words_unlocated += stats.unlocated;
    }

    pub fn total_fields_written(&self) -> usize {
        self.fields_written.values().sum()
    }

    /// True when the pass left the document as it found it.
    pub fn is_unchanged(&self) -> bool {
        self.total_fields_written() == 0 && self.offsets_written == 0 && self.indices_written == 0
    }

    pub fn merge(&mut self, other: &EnrichReport) {
        self.sentences += other.sentences;
        self.analyses += other.analyses;
        for (key, count) in &other.fields_written {
            *self.fields_written.entry(*key).or_default() += count;
        }
        self.offsets_written += other.offsets_written;
        self.indices_written += other.indices_written;
        self.words_unlocated += other.words_unlocated;
    }
}

impl fmt::Display for EnrichReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} sentences, {} analyses, {} fields written",
            self.sentences,
            self.analyses,
            self.total_fields_written()
        )?;
        if !self.fields_written.is_empty() {
            let per_field: Vec<String> = self
                .fields_written
                .iter()
                .map(|(key, count)| format!("{key}: {count}"))
                .collect();
            write!(f, " ({})", per_field.join(", "))?;
        }
        if self.offsets_written > 0 || self.words_unlocated > 0 {
            write!(
                f,
                ", {} words located, {} unlocated",
                self.offsets_written, self.words_unlocated
            )?;
        }
        Ok(())
    }
}

/// Outcome of processing a file or a directory tree.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_processed: usize,
    pub files_skipped: usize,
    /// Files that could not be read, parsed or written, with the reason.
    pub failures: Vec<(PathBuf, String)>,
    pub report: EnrichReport,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}
