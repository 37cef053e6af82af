//! Destinations for extracted feature records.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use imgfeat_table::{DatasetTable, DatasetWriter, FeatureVector, HeaderLayout, Result};

/// Receives one record per successfully processed image.
pub trait RecordSink {
    fn write_record(&mut self, id: &str, features: &FeatureVector) -> Result<()>;
}

/// Streams records to CSV as they arrive.
pub struct CsvRecordSink<W: Write> {
    writer: DatasetWriter<W>,
}

impl CsvRecordSink<File> {
    /// Create (or truncate) the output file and write the header.
    pub fn create(path: &Path, layout: HeaderLayout) -> Result<Self> {
        let writer = DatasetWriter::create(path, &layout.feature_labels())?;
        Ok(Self { writer })
    }
}

impl<W: Write> CsvRecordSink<W> {
    pub fn new(writer: W, layout: HeaderLayout) -> Result<Self> {
        let writer = DatasetWriter::new(writer, &layout.feature_labels())?;
        Ok(Self { writer })
    }

    pub fn rows_written(&self) -> usize {
        self.writer.rows_written()
    }

    /// Flush buffered rows and hand back the writer.
    pub fn finish(self) -> Result<W> {
        self.writer.into_inner()
    }
}

impl<W: Write> RecordSink for CsvRecordSink<W> {
    fn write_record(&mut self, id: &str, features: &FeatureVector) -> Result<()> {
        self.writer.write_row(id, features.as_slice())
    }
}

/// Collects records in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub records: Vec<(String, FeatureVector)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert the collected records into a table with the given header.
    pub fn into_table(self, layout: HeaderLayout) -> Result<DatasetTable> {
        let mut table = DatasetTable::for_features(layout);
        for (id, features) in self.records {
            table.push(id, features.as_slice())?;
        }
        Ok(table)
    }
}

impl RecordSink for MemorySink {
    fn write_record(&mut self, id: &str, features: &FeatureVector) -> Result<()> {
        self.records.push((id.to_string(), *features));
        Ok(())
    }
}
