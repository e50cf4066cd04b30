//! Error taxonomy for lsx.
//!
//! Every variant except [LsError::Io] is recoverable: the [crate::core::Lister] reports it
//! on the diagnostic stream and keeps going with the next entry or path. [LsError::Io]
//! wraps a failed write of the listing itself and ends the run.
//! Usage errors never reach this type, clap handles them before any listing starts.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LsError {
    /// The directory could not be opened (missing, not a directory, permission denied).
    #[error("opendir({}): {}", .path.display(), os_reason(.source))]
    DirectoryOpen { path: PathBuf, source: io::Error },

    /// A single raw entry could not be read while iterating an opened directory.
    #[error("readdir({}): {}", .path.display(), os_reason(.source))]
    ReadEntry { path: PathBuf, source: io::Error },

    /// The non-following stat of one entry failed.
    #[error("lstat({}): {}", .path.display(), os_reason(.source))]
    Stat { path: PathBuf, source: io::Error },

    /// Writing the listing or a diagnostic failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl LsError {
    /// True when the reader of the output went away, e.g. `lsx | head`.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, LsError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// Returns the OS error text without the trailing `(os error N)` decoration.
pub fn os_reason(err: &io::Error) -> String {
    let text = err.to_string();
    match text.rfind(" (os error ") {
        Some(idx) if err.raw_os_error().is_some() => text[..idx].to_string(),
        _ => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_context_and_path() {
        let err = LsError::DirectoryOpen {
            path: PathBuf::from("/no/such/dir"),
            source: io::Error::from_raw_os_error(2),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("opendir(/no/such/dir): "), "got {msg}");
        assert!(!msg.contains("os error"), "got {msg}");
    }

    #[test]
    fn custom_errors_keep_their_text() {
        let err = io::Error::other("stalled mount");
        assert_eq!(os_reason(&err), "stalled mount");
    }

    #[test]
    fn only_write_errors_count_as_broken_pipe() {
        let closed = LsError::from(io::Error::from(io::ErrorKind::BrokenPipe));
        assert!(closed.is_broken_pipe());
        assert!(!LsError::from(io::Error::other("disk full")).is_broken_pipe());

        let stat = LsError::Stat {
            path: PathBuf::from("x"),
            source: io::Error::from(io::ErrorKind::BrokenPipe),
        };
        assert!(!stat.is_broken_pipe());
    }
}
