use crate::record::{FIELD_NAMES, Record};
use anyhow::{Result, anyhow};
use csv::WriterBuilder;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// Incremental CSV emitter. Rows are written one at a time as they survive
/// normalization; nothing is buffered wholesale. The header is written
/// explicitly so it appears even when every data row is dropped.
pub struct RecordWriter<W: Write> {
    inner: csv::Writer<W>,
}

impl<W: Write> RecordWriter<W> {
    pub fn from_writer(sink: W) -> RecordWriter<W> {
        RecordWriter {
            inner: WriterBuilder::new().has_headers(false).from_writer(sink),
        }
    }

    /// Write the canonical header row.
    pub fn write_header(&mut self) -> Result<()> {
        self.inner.write_record(FIELD_NAMES)?;
        Ok(())
    }

    /// Write one normalized record, fields in canonical order.
    pub fn write_row(&mut self, record: &Record) -> Result<()> {
        self.inner.serialize(record)?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Flush and hand back the underlying sink.
    pub fn into_inner(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(|e| anyhow!("flushing output: {e}"))
    }
}

pub fn create_writer(output_arg: &str) -> Result<RecordWriter<Box<dyn Write>>> {
    match output_arg {
        "stdout" => Ok(RecordWriter::from_writer(
            Box::new(io::stdout()) as Box<dyn Write>
        )),
        path if path.ends_with(".csv") => {
            create_parent_dirs(path)?;
            let file = File::create(path)?;
            Ok(RecordWriter::from_writer(Box::new(file) as Box<dyn Write>))
        }
        other => Err(anyhow!(
            "Unknown output target: {}. Use 'stdout' or a .csv file path",
            other
        )),
    }
}

fn create_parent_dirs(file_path: &str) -> Result<()> {
    if let Some(parent) = Path::new(file_path).parent() {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}
