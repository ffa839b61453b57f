//! JSON I/O handling for CLI
//!
//! - Input: one JSON document, or an array of documents, from a file or stdin
//! - Output: single JSON response object via stdout
//! - UTF-8 only

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Read the documents to validate from `input`, or stdin when absent.
///
/// A top-level array is a batch; any other JSON value is a single
/// document.
pub fn read_documents(input: Option<&Path>) -> CliResult<Vec<Value>> {
    let raw = match input {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| CliError::io_error(format!("cannot read {}: {}", path.display(), e)))?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if raw.trim().is_empty() {
        return Err(CliError::invalid_input("empty input"));
    }

    let value: Value = serde_json::from_str(&raw)
        .map_err(|e| CliError::invalid_input(format!("malformed JSON: {}", e)))?;

    Ok(match value {
        Value::Array(documents) => documents,
        document => vec![document],
    })
}

/// Write a success response to stdout
pub fn write_response(data: Value) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "ok",
        "data": data
    });

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    let response = serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    });

    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, &response)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    use crate::cli::errors::CliErrorCode;

    #[test]
    fn test_read_documents_single_object() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"station_id\": \"ISS001\"}}").unwrap();

        let documents = read_documents(Some(file.path())).unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0]["station_id"], "ISS001");
    }

    #[test]
    fn test_read_documents_array() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[{{\"a\": 1}}, {{\"a\": 2}}]").unwrap();

        let documents = read_documents(Some(file.path())).unwrap();
        assert_eq!(documents.len(), 2);
    }

    #[test]
    fn test_read_documents_rejects_empty_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "   \n").unwrap();

        let err = read_documents(Some(file.path())).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::InvalidInput);
    }

    #[test]
    fn test_read_documents_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let err = read_documents(Some(file.path())).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::InvalidInput);
        assert!(err.message().contains("malformed JSON"));
    }

    #[test]
    fn test_read_documents_missing_file() {
        let err = read_documents(Some(Path::new("/nonexistent/input.json"))).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::IoError);
    }
}
