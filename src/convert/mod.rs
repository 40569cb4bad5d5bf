//! Line-escaping conversion: read a certificate chain, escape its newlines, write one line.

mod escape;

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

pub use escape::{count_newlines, escape_newlines};
use tracing::{debug, warn};

use crate::config::ConvertConfig;

pub const CONFIRMATION: &str = "Certificate chain converted to one line";

pub(crate) const MAX_INPUT_BYTES: u64 = 10_000_000;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("{} is not valid UTF-8: {source}", path.display())]
    Decode { path: PathBuf, source: FromUtf8Error },

    #[error("{} is too large (>{} bytes)", .0.display(), MAX_INPUT_BYTES)]
    TooLarge(PathBuf),

    #[error("failed to report completion: {0}")]
    Notify(io::Error),
}

impl ConvertError {
    fn read(path: &Path, source: io::Error) -> Self {
        Self::classify(path, source).unwrap_or_else(|source| Self::Read {
            path: path.to_path_buf(),
            source,
        })
    }

    fn write(path: &Path, source: io::Error) -> Self {
        Self::classify(path, source).unwrap_or_else(|source| Self::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    fn classify(path: &Path, source: io::Error) -> Result<Self, io::Error> {
        match source.kind() {
            io::ErrorKind::NotFound => Ok(Self::NotFound(path.to_path_buf())),
            io::ErrorKind::PermissionDenied => Ok(Self::PermissionDenied(path.to_path_buf())),
            _ => Err(source),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionSummary {
    pub bytes_in: usize,
    pub bytes_out: usize,
    pub newlines: usize,
    pub carriage_returns: usize,
}

/// Convert `config.source_path` into a single escaped line at `config.dest_path`,
/// then write the confirmation line to `out`.
///
/// The source is read and decoded before the destination is opened, so a bad
/// source never creates or truncates the destination. A failed write may leave
/// a partial destination behind.
pub fn convert(
    config: &ConvertConfig,
    out: &mut impl Write,
) -> Result<ConversionSummary, ConvertError> {
    let text = read_source(&config.source_path)?;

    let escaped = escape_newlines(&text);
    let summary = ConversionSummary {
        bytes_in: text.len(),
        bytes_out: escaped.len(),
        newlines: count_newlines(&text),
        carriage_returns: escape::count_carriage_returns(&text),
    };

    if summary.carriage_returns > 0 {
        warn!(
            path = %config.source_path.display(),
            count = summary.carriage_returns,
            "input contains carriage returns; they are kept in the output"
        );
    }

    fs::write(&config.dest_path, escaped.as_bytes())
        .map_err(|e| ConvertError::write(&config.dest_path, e))?;
    debug!(
        dest = %config.dest_path.display(),
        bytes = summary.bytes_out,
        newlines = summary.newlines,
        "one-line chain written"
    );

    writeln!(out, "{CONFIRMATION}").map_err(ConvertError::Notify)?;
    Ok(summary)
}

fn read_source(path: &Path) -> Result<String, ConvertError> {
    let file = File::open(path).map_err(|e| ConvertError::read(path, e))?;

    let mut body = Vec::new();
    file.take(MAX_INPUT_BYTES + 1)
        .read_to_end(&mut body)
        .map_err(|e| ConvertError::read(path, e))?;
    if body.len() as u64 > MAX_INPUT_BYTES {
        return Err(ConvertError::TooLarge(path.to_path_buf()));
    }

    debug!(path = %path.display(), bytes = body.len(), "source read");
    String::from_utf8(body).map_err(|source| ConvertError::Decode {
        path: path.to_path_buf(),
        source,
    })
}
