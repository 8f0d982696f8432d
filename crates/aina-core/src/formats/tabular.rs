//! Pipe-delimited tabular text reader with an explicit column table.
//!
//! Fields are addressed by position. The position of every field the caller
//! relies on is declared up front in a [`TabularSchema`] together with the
//! header name expected at that position, and the header line is checked
//! against it before any record is read.

use std::path::Path;

use crate::error::{AinaError, Result};

/// One mapped column: semantic field, zero-based position, expected header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec<F> {
    pub field: F,
    pub index: usize,
    pub header: &'static str,
}

/// Column table for a positional file
#[derive(Debug, Clone)]
pub struct TabularSchema<F: 'static> {
    pub source_name: &'static str,
    pub columns: &'static [ColumnSpec<F>],
}

impl<F: Copy + PartialEq> TabularSchema<F> {
    /// Check the header line against the column table
    pub fn validate_header(&self, header: &[String]) -> Result<()> {
        for column in self.columns {
            let found = header.get(column.index).map(String::as_str).unwrap_or("");
            if !found.eq_ignore_ascii_case(column.header) {
                return Err(AinaError::SchemaDrift {
                    source_name: self.source_name.to_string(),
                    index: column.index,
                    expected: column.header.to_string(),
                    found: found.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Number of fields a record needs to cover every mapped column
    pub fn min_width(&self) -> usize {
        self.columns.iter().map(|c| c.index + 1).max().unwrap_or(0)
    }

    /// Position of a field, if mapped
    pub fn index_of(&self, field: F) -> Option<usize> {
        self.columns.iter().find(|c| c.field == field).map(|c| c.index)
    }

    /// Value of a field in a split record
    pub fn field<'a>(&self, record: &'a [String], field: F) -> &'a str {
        self.index_of(field)
            .and_then(|i| record.get(i))
            .map(String::as_str)
            .unwrap_or("")
    }
}

/// Parsed contents of a pipe-delimited file
#[derive(Debug, Clone, Default)]
pub struct TabularReader {
    pub header: Vec<String>,
    pub records: Vec<Vec<String>>,
}

impl TabularReader {
    /// Read a file from disk
    pub async fn from_path(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AinaError::DataFileNotFound { path: path.to_path_buf() }
            } else {
                AinaError::Io(e)
            }
        })?;

        let name = path.file_name().and_then(|s| s.to_str()).unwrap_or("unnamed");
        let reader = Self::parse(name, &content)?;
        tracing::debug!(
            file = %path.display(),
            records = reader.records.len(),
            "Read tabular file"
        );
        Ok(reader)
    }

    /// Split text into a header and records. Blank lines are skipped.
    pub fn parse(source_name: &str, content: &str) -> Result<Self> {
        let mut lines = content.lines().filter(|l| !l.trim().is_empty());

        let header = lines
            .next()
            .map(split_line)
            .ok_or_else(|| AinaError::MissingHeader { source_name: source_name.to_string() })?;

        let records = lines.map(split_line).collect();
        Ok(Self { header, records })
    }

    /// Validate the header, then keep only records wide enough for the schema
    pub fn conform<F: Copy + PartialEq>(
        self,
        schema: &TabularSchema<F>,
    ) -> Result<Vec<Vec<String>>> {
        schema.validate_header(&self.header)?;

        let width = schema.min_width();
        let total = self.records.len();
        let records: Vec<Vec<String>> =
            self.records.into_iter().filter(|r| r.len() >= width).collect();

        if records.len() < total {
            tracing::debug!(
                source = schema.source_name,
                dropped = total - records.len(),
                "Dropped short records"
            );
        }
        Ok(records)
    }
}

fn split_line(line: &str) -> Vec<String> {
    line.trim_end_matches('\r').split('|').map(|f| f.replace('"', "")).collect()
}
