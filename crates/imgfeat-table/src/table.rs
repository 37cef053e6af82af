//! In-memory dataset table.

use crate::columns::HeaderLayout;
use crate::error::{Result, TableError};

/// An identifier column plus named numeric columns, in row order.
///
/// Every row holds exactly one value per column. Tables are never edited by
/// later pipeline stages; a stage builds a new table from the old one.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetTable {
    columns: Vec<String>,
    ids: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl DatasetTable {
    /// Create an empty table with the given value column names.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            ids: Vec::new(),
            rows: Vec::new(),
        }
    }

    /// Create an empty table with the 14 feature columns.
    pub fn for_features(layout: HeaderLayout) -> Self {
        Self::new(layout.feature_labels())
    }

    /// Build a table from already assembled parts, checking row lengths.
    pub fn from_parts(columns: Vec<String>, ids: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self> {
        if ids.len() != rows.len() {
            return Err(TableError::Schema(format!(
                "{} identifiers for {} rows",
                ids.len(),
                rows.len()
            )));
        }
        let mut table = Self::new(columns);
        for (id, row) in ids.into_iter().zip(rows) {
            table.push_owned(id, row)?;
        }
        Ok(table)
    }

    /// Append a row.
    pub fn push(&mut self, id: impl Into<String>, values: &[f64]) -> Result<()> {
        self.push_owned(id.into(), values.to_vec())
    }

    fn push_owned(&mut self, id: String, values: Vec<f64>) -> Result<()> {
        if values.len() != self.columns.len() {
            return Err(TableError::RowLength {
                id,
                expected: self.columns.len(),
                actual: values.len(),
            });
        }
        self.ids.push(id);
        self.rows.push(values);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of value columns (identifier excluded).
    pub fn ncols(&self) -> usize {
        self.columns.len()
    }

    /// Copy one column out, in row order.
    pub fn column(&self, index: usize) -> Vec<f64> {
        self.rows.iter().map(|row| row[index]).collect()
    }

    /// Iterate `(id, values)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.ids
            .iter()
            .zip(&self.rows)
            .map(|(id, row)| (id.as_str(), row.as_slice()))
    }
}
