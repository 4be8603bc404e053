//! Shared helpers for the integration harnesses: an in-memory stream runner
//! and a diagnostic sink that records drops instead of touching stderr or
//! the log file.

#![allow(dead_code)]

use csvnorm::convert::ParseFailure;
use csvnorm::diagnostics::DiagnosticSink;
use csvnorm::normalizer::{StreamStats, normalize_stream};
use csvnorm::output::RecordWriter;
use csvnorm::record::Record;

pub static HEADER: &str = "Timestamp,Address,ZIP,FullName,FooDuration,BarDuration,TotalDuration,Notes";

/// The classic well-formed sample row.
pub static GOOD_ROW: &str = "4/1/11 11:00:00 AM,\"123 4th St, Anywhere, AA\",94121,Monkey Alberto,1:23:32.123,1:32:33.123,zzsasdfa,I am the very model of a modern major general";

/// Same shape, but the FooDuration column is not a duration.
pub static BAD_DURATION_ROW: &str = "4/1/11 11:00:00 AM,\"123 4th St, Anywhere, AA\",94121,Monkey Alberto,bogus,1:32:33.123,zzsasdfa,oops";

/// Sink that remembers every drop for later assertions.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub dropped: Vec<(usize, Record, ParseFailure)>,
}

impl DiagnosticSink for RecordingSink {
    fn record_dropped(&mut self, row: usize, raw: &Record, failure: &ParseFailure) {
        self.dropped.push((row, raw.clone(), failure.clone()));
    }
}

/// Run a whole input document through the stream driver, collecting the
/// output text, the recorded drops, and the stats.
pub fn run_stream(input: &str) -> (String, RecordingSink, StreamStats) {
    let mut writer = RecordWriter::from_writer(Vec::new());
    let mut sink = RecordingSink::default();
    let stats = normalize_stream(input.as_bytes(), &mut writer, &mut sink)
        .expect("in-memory stream should not fail");
    let bytes = writer.into_inner().expect("flush in-memory output");
    (
        String::from_utf8(bytes).expect("output is utf-8"),
        sink,
        stats,
    )
}

/// Parse CSV output back into raw field rows (header included) so tests can
/// assert on field values without caring about quoting.
pub fn parse_output(output: &str) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(output.as_bytes());
    reader
        .records()
        .map(|row| {
            row.expect("output parses as csv")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}
