//! Dataset files on disk.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::errors::{ExportError, ExportResult};
use super::flatten::{flatten_document, scalar_text};

/// Writes datasets into a single output directory.
pub struct Exporter {
    output_dir: PathBuf,
}

impl Exporter {
    /// Open an exporter, creating `output_dir` when it does not exist.
    pub fn new(output_dir: impl Into<PathBuf>) -> ExportResult<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|source| ExportError::Io {
            path: output_dir.clone(),
            source,
        })?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Write a dataset as a pretty-printed JSON array, returning the path.
    pub fn write_json(&self, documents: &[Value], name: &str) -> ExportResult<PathBuf> {
        let path = self.output_dir.join(format!("{name}.json"));
        let body = serde_json::to_string_pretty(documents)?;
        fs::write(&path, body).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// Write a dataset as CSV, returning the path.
    ///
    /// Documents are flattened first; the header row is the sorted union
    /// of every flattened key, and rows leave missing columns empty.
    pub fn write_csv(&self, documents: &[Value], name: &str) -> ExportResult<PathBuf> {
        if documents.is_empty() {
            return Err(ExportError::EmptyDataset(name.to_string()));
        }
        let path = self.output_dir.join(format!("{name}.csv"));

        let rows: Vec<_> = documents.iter().map(flatten_document).collect();
        let mut headers = BTreeSet::new();
        for row in &rows {
            for key in row.keys() {
                headers.insert(key.clone());
            }
        }

        let mut body = String::new();
        append_row(&mut body, headers.iter().map(String::as_str));
        for row in &rows {
            let cells: Vec<String> = headers
                .iter()
                .map(|header| row.get(header).map(scalar_text).unwrap_or_default())
                .collect();
            append_row(&mut body, cells.iter().map(String::as_str));
        }

        fs::write(&path, body).map_err(|source| ExportError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

fn append_row<'a>(body: &mut String, cells: impl Iterator<Item = &'a str>) {
    let line = cells.map(csv_cell).collect::<Vec<_>>().join(",");
    body.push_str(&line);
    body.push('\n');
}

/// Quote a cell when it holds the delimiter, a quote, or a line break.
fn csv_cell(text: &str) -> String {
    if text.contains(',') || text.contains('"') || text.contains('\n') {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}
