use std::io::{Read, Write};

use anyhow::Result;
use csv::ReaderBuilder;

use crate::convert::{
    ParseFailure, duration_to_seconds, format_full_name, format_zip, sum_durations,
    to_eastern_rfc3339,
};
use crate::diagnostics::DiagnosticSink;
use crate::output::RecordWriter;
use crate::record::{self, Record};

/// Normalize one raw record into its output form.
///
/// The raw record is cloned and the clone overwritten field by field, in
/// dependency order: the two durations first so their converted values can be
/// totalled, then the timestamp, zip, and name. Address and Notes pass
/// through verbatim. The first failing conversion aborts the rest via `?`,
/// leaving the caller with the untouched raw record for diagnostics.
pub fn normalize_record(raw: &Record) -> Result<Record, ParseFailure> {
    let mut clean = raw.clone();
    clean.foo_duration = duration_to_seconds(&raw.foo_duration, record::FOO_DURATION)?;
    clean.bar_duration = duration_to_seconds(&raw.bar_duration, record::BAR_DURATION)?;
    clean.total_duration = sum_durations(&clean.foo_duration, &clean.bar_duration)?;
    clean.timestamp = to_eastern_rfc3339(&raw.timestamp)?;
    clean.zip = format_zip(&raw.zip);
    clean.full_name = format_full_name(&raw.full_name);
    Ok(clean)
}

/// Per-run row counters, reported in the optional stderr summary.
#[derive(Debug, Clone, Copy, Default)]
pub struct StreamStats {
    pub rows_read: usize,
    pub rows_emitted: usize,
    pub rows_dropped: usize,
}

/// Drive a whole input stream through [`normalize_record`], one row at a
/// time and strictly in input order.
///
/// The first row is the header; its names are not validated, field
/// identities are positional. Survivors go to `writer`, drops go to `diag`,
/// and the run continues regardless of how many rows fail. CSV-level read
/// errors (including invalid UTF-8) are run-fatal and propagate.
pub fn normalize_stream<R: Read, W: Write>(
    input: R,
    writer: &mut RecordWriter<W>,
    diag: &mut dyn DiagnosticSink,
) -> Result<StreamStats> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut stats = StreamStats::default();
    writer.write_header()?;
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        if index == 0 {
            // header row: read and discarded
            continue;
        }
        stats.rows_read += 1;
        let raw = Record::from_positional(&row);
        match normalize_record(&raw) {
            Ok(clean) => {
                writer.write_row(&clean)?;
                stats.rows_emitted += 1;
            }
            Err(failure) => {
                diag.record_dropped(stats.rows_read, &raw, &failure);
                stats.rows_dropped += 1;
            }
        }
    }
    Ok(stats)
}
