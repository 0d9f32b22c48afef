//! Whole-file reads and writes for the editor.
//!
//! The buffer engine never fails; everything that can go wrong on disk is
//! reported here as a [`FileError`].

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors from file operations.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// The path does not exist.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Any other read or write failure (permissions, not UTF-8, a directory, ...).
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The user submitted an empty path or cancelled the prompt.
    #[error("no file path given")]
    InvalidPath,
}

/// Read a whole file as UTF-8 text.
///
/// # Errors
///
/// Returns [`FileError::NotFound`] when `path` does not exist and
/// [`FileError::Io`] for any other failure.
pub fn read_whole_file(path: &Path) -> Result<String, FileError> {
    fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            FileError::NotFound(path.to_path_buf())
        } else {
            FileError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}

/// Replace the contents of `path` with `text`.
///
/// # Errors
///
/// Returns [`FileError::Io`] if the file cannot be written.
pub fn write_whole_file(path: &Path, text: &str) -> Result<(), FileError> {
    fs::write(path, text).map_err(|source| FileError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Turn prompt input into an absolute path.
///
/// # Errors
///
/// Returns [`FileError::InvalidPath`] for blank input, or [`FileError::Io`]
/// if the current directory cannot be determined.
pub fn resolve_path(input: &str) -> Result<PathBuf, FileError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(FileError::InvalidPath);
    }
    std::path::absolute(trimmed).map_err(|source| FileError::Io {
        path: PathBuf::from(trimmed),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = read_whole_file(&path).unwrap_err();
        assert!(matches!(err, FileError::NotFound(p) if p == path));
    }

    #[test]
    fn test_write_then_read_preserves_text_exactly() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("note.txt");
        write_whole_file(&path, "ab\ncd").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"ab\ncd");
        assert_eq!(read_whole_file(&path).unwrap(), "ab\ncd");
    }

    #[test]
    fn test_read_directory_is_io_error() {
        let dir = tempdir().unwrap();
        let err = read_whole_file(dir.path()).unwrap_err();
        assert!(matches!(err, FileError::Io { .. }));
    }

    #[test]
    fn test_read_invalid_utf8_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary.bin");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();
        let err = read_whole_file(&path).unwrap_err();
        assert!(matches!(err, FileError::Io { .. }));
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope").join("note.txt");
        let err = write_whole_file(&path, "x").unwrap_err();
        assert!(err.to_string().contains("note.txt"));
    }

    #[test]
    fn test_resolve_path_rejects_blank_input() {
        assert!(matches!(resolve_path(""), Err(FileError::InvalidPath)));
        assert!(matches!(resolve_path("   "), Err(FileError::InvalidPath)));
    }

    #[test]
    fn test_resolve_path_makes_relative_paths_absolute() {
        let path = resolve_path(" notes.txt ").unwrap();
        assert!(path.is_absolute());
        assert!(path.ends_with("notes.txt"));
    }
}
