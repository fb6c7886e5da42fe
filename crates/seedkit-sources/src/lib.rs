//! seedkit-sources — input source adapters for seedkit.
//!
//! Each source yields the complete seed text in one blocking read. Parsing is
//! left to `seedkit_core::ingestor`.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Sentinel accepted by [`InputSource::parse`] for standard input.
pub const STDIN_SENTINEL: &str = "-";

/// Where seed text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("cannot read {origin}: {source}")]
    Read { origin: String, source: io::Error },
}

impl InputSource {
    /// `-` selects stdin; anything else is a file path.
    pub fn parse(raw: &str) -> Self {
        if raw == STDIN_SENTINEL {
            InputSource::Stdin
        } else {
            InputSource::File(PathBuf::from(raw))
        }
    }

    /// Read the whole source as UTF-8 text.
    pub fn read_to_string(&self) -> Result<String, SourceError> {
        match self {
            InputSource::Stdin => read_from(io::stdin().lock(), "stdin"),
            InputSource::File(path) => read_file(path),
        }
    }
}

impl std::fmt::Display for InputSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "stdin"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

fn read_file(path: &Path) -> Result<String, SourceError> {
    if !path.is_file() {
        return Err(SourceError::NotFound(path.to_path_buf()));
    }
    let file = std::fs::File::open(path).map_err(|source| SourceError::Read {
        origin: path.display().to_string(),
        source,
    })?;
    read_from(file, &path.display().to_string())
}

/// Drain `reader` into a string.
pub fn read_from<R: Read>(mut reader: R, origin: &str) -> Result<String, SourceError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| SourceError::Read {
            origin: origin.to_string(),
            source,
        })?;
    tracing::debug!(origin, bytes = text.len(), "read seed input");
    Ok(text)
}
