//! CSV encoding of dataset tables.
//!
//! Tables are comma-delimited UTF-8 with a header row whose first column is
//! `id`. Values use Rust's shortest round-trip float formatting, so a table
//! read back from disk is bit-identical to the one written. Non-finite values
//! are written as `NaN`, `inf` and `-inf`; empty cells read back as NaN.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use log::debug;

use crate::columns::ID_COLUMN;
use crate::error::{Result, TableError};
use crate::table::DatasetTable;

/// Streaming writer: header first, then one row per call.
pub struct DatasetWriter<W: Write> {
    inner: csv::Writer<W>,
    ncols: usize,
    rows: usize,
}

impl DatasetWriter<File> {
    /// Create (or truncate) a CSV file and write the header.
    pub fn create(path: &Path, columns: &[String]) -> Result<Self> {
        let file = File::create(path)?;
        Self::new(file, columns)
    }
}

impl<W: Write> DatasetWriter<W> {
    /// Wrap any writer and write the header (`id` followed by `columns`).
    pub fn new(writer: W, columns: &[String]) -> Result<Self> {
        let mut inner = csv::Writer::from_writer(writer);
        let mut header = Vec::with_capacity(columns.len() + 1);
        header.push(ID_COLUMN);
        header.extend(columns.iter().map(String::as_str));
        inner.write_record(&header)?;
        Ok(Self {
            inner,
            ncols: columns.len(),
            rows: 0,
        })
    }

    /// Write one row.
    pub fn write_row(&mut self, id: &str, values: &[f64]) -> Result<()> {
        if values.len() != self.ncols {
            return Err(TableError::RowLength {
                id: id.to_string(),
                expected: self.ncols,
                actual: values.len(),
            });
        }
        let mut record = Vec::with_capacity(values.len() + 1);
        record.push(id.to_string());
        record.extend(values.iter().map(|v| format_value(*v)));
        self.inner.write_record(&record)?;
        self.rows += 1;
        Ok(())
    }

    /// Number of data rows written so far.
    pub fn rows_written(&self) -> usize {
        self.rows
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(|e| TableError::Io(e.into_error()))
    }
}

fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{:?}", value)
    }
}

fn parse_value(raw: &str, row: usize, column: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(f64::NAN);
    }
    trimmed.parse::<f64>().map_err(|_| TableError::Parse {
        row,
        column: column.to_string(),
        value: raw.to_string(),
    })
}

/// Write a whole table.
pub fn write_table<W: Write>(table: &DatasetTable, writer: W) -> Result<()> {
    let mut out = DatasetWriter::new(writer, table.columns())?;
    for (id, values) in table.iter() {
        out.write_row(id, values)?;
    }
    out.flush()
}

/// Write a whole table to a file.
pub fn write_table_file(table: &DatasetTable, path: &Path) -> Result<()> {
    debug!("writing {} rows to {}", table.len(), path.display());
    let file = File::create(path)?;
    write_table(table, file)
}

/// Read a table. The first header cell must be `id`.
pub fn read_table<R: Read>(reader: R) -> Result<DatasetTable> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let mut header_iter = headers.iter();
    match header_iter.next() {
        Some(first) if first == ID_COLUMN => {}
        Some(first) => {
            return Err(TableError::Schema(format!(
                "first column must be '{}', found '{}'",
                ID_COLUMN, first
            )))
        }
        None => return Err(TableError::Schema("missing header row".to_string())),
    }
    let columns: Vec<String> = header_iter.map(str::to_string).collect();

    let mut table = DatasetTable::new(columns.clone());
    for (row_index, record) in rdr.records().enumerate() {
        let record = record?;
        let id = record.get(0).unwrap_or_default().to_string();
        let values = record
            .iter()
            .skip(1)
            .zip(&columns)
            .map(|(raw, column)| parse_value(raw, row_index, column))
            .collect::<Result<Vec<f64>>>()?;
        table.push(id, &values)?;
    }
    Ok(table)
}

/// Read a table from a file.
pub fn read_table_file(path: &Path) -> Result<DatasetTable> {
    let file = File::open(path)?;
    let table = read_table(file)?;
    debug!("read {} rows from {}", table.len(), path.display());
    Ok(table)
}
