use crate::convert::ParseFailure;
use crate::record::Record;

/// Side channel for row-level failures, injected into the stream driver so
/// tests can observe drops without touching stderr or the log file.
pub trait DiagnosticSink {
    /// Called once per dropped row. `row` is the 1-based data-row number
    /// (header excluded); `raw` is the untouched input record.
    fn record_dropped(&mut self, row: usize, raw: &Record, failure: &ParseFailure);
}

/// Production sink: a short operator warning on stderr, full detail to the
/// log file via tracing.
pub struct ConsoleSink;

impl DiagnosticSink for ConsoleSink {
    fn record_dropped(&mut self, row: usize, raw: &Record, failure: &ParseFailure) {
        eprintln!("WARNING could not normalize record {row}. See log for details");
        tracing::warn!(row, field = failure.field, raw = ?raw, "dropped record: {failure}");
    }
}
