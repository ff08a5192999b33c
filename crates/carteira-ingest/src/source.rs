//! Loading import files from disk.
//!
//! Spreadsheet exports arrive as UTF-8 (with or without BOM) or as
//! Windows-1252. UTF-16 files are rejected.

use std::path::Path;

use encoding_rs::WINDOWS_1252;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};

/// Maximum accepted import file size (50 MB).
pub const MAX_SOURCE_FILE_SIZE: u64 = 50 * 1024 * 1024;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Reads an import file into a string.
pub fn read_source(path: &Path) -> Result<String> {
    read_source_with_limit(path, MAX_SOURCE_FILE_SIZE)
}

/// Reads an import file, rejecting files larger than `max_size` bytes.
pub fn read_source_with_limit(path: &Path, max_size: u64) -> Result<String> {
    let metadata = std::fs::metadata(path).map_err(|e| map_io_error(path, e))?;
    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    let bytes = std::fs::read(path).map_err(|e| map_io_error(path, e))?;
    decode_source(path, &bytes)
}

/// Decodes raw file bytes. `path` is only used for error messages.
pub fn decode_source(path: &Path, bytes: &[u8]) -> Result<String> {
    if bytes.starts_with(&[0xFF, 0xFE]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 LE",
        });
    }
    if bytes.starts_with(&[0xFE, 0xFF]) {
        return Err(IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "UTF-16 BE",
        });
    }

    let body = bytes.strip_prefix(&UTF8_BOM).unwrap_or(bytes);
    match std::str::from_utf8(body) {
        Ok(text) => {
            debug!(path = %path.display(), bytes = body.len(), "read UTF-8 source");
            Ok(text.to_string())
        }
        Err(_) => {
            let (text, _, had_errors) = WINDOWS_1252.decode(body);
            warn!(
                path = %path.display(),
                had_errors,
                "source is not UTF-8, decoded as Windows-1252"
            );
            Ok(text.into_owned())
        }
    }
}

fn map_io_error(path: &Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_utf8_bom() {
        let text = decode_source(Path::new("x.csv"), b"\xEF\xBB\xBFnome_cliente\n").unwrap();
        assert_eq!(text, "nome_cliente\n");
    }

    #[test]
    fn falls_back_to_windows_1252() {
        // "Área" encoded as Windows-1252
        let text = decode_source(Path::new("x.csv"), b"\xC1rea;Categoria").unwrap();
        assert_eq!(text, "Área;Categoria");
    }

    #[test]
    fn rejects_utf16() {
        let err = decode_source(Path::new("x.csv"), b"\xFF\xFEa\x00").unwrap_err();
        assert!(matches!(
            err,
            IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            }
        ));
    }
}
