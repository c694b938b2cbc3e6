//! Reading raw input into lines.
//!
//! This is where input-access faults are turned into [`DomError`] values. Everything
//! downstream works on an already materialized `Vec<String>`.

use crate::error::DomError;
use std::fs;
use std::io;
use std::path::Path;

/// Read a UTF-8 text file into right-trimmed lines
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<String>, DomError> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|err| io_error(path, err))?;
    Ok(split_lines(&source))
}

/// Split text into right-trimmed lines
///
/// A leading byte-order mark is dropped. `\n`, `\r\n` and a lone `\r` all end a line, and a
/// final line terminator does not produce an extra empty line.
pub fn split_lines(source: &str) -> Vec<String> {
    let mut rest = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut lines = Vec::new();
    while !rest.is_empty() {
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(end) => {
                lines.push(rest[..end].trim_end().to_string());
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
            }
            None => {
                lines.push(rest.trim_end().to_string());
                break;
            }
        }
    }
    lines
}

fn io_error(path: &Path, err: io::Error) -> DomError {
    let path = path.display().to_string();
    if err.kind() == io::ErrorKind::InvalidData {
        DomError::Encoding { path }
    } else {
        DomError::Io {
            path,
            message: err.to_string(),
        }
    }
}
