use std::{
    io,
    path::{Path, PathBuf},
};

use nix::errno::Errno;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InspectError {
    /// `lstat` failed for a path; the listing moves on to the next one.
    #[error("Cannot access '{}': {}", .path.display(), system_error_text(.source))]
    PathAccess { path: PathBuf, source: io::Error },

    /// The directory to list could not be opened; nothing is listed.
    #[error("{}: {}", describe_dir(.path), system_error_text(.source))]
    DirectoryOpen { path: PathBuf, source: io::Error },
}

impl InspectError {
    pub fn path(&self) -> &Path {
        match self {
            InspectError::PathAccess { path, .. } | InspectError::DirectoryOpen { path, .. } => {
                path
            }
        }
    }
}

fn describe_dir(path: &Path) -> String {
    if path == Path::new(".") {
        "Failed to open current directory".to_owned()
    } else {
        format!("Failed to open directory '{}'", path.display())
    }
}

/// The C library's description of the error, without Rust's "(os error N)" suffix.
pub fn system_error_text(err: &io::Error) -> String {
    match err.raw_os_error() {
        Some(code) => Errno::from_raw(code).desc().to_owned(),
        None => err.to_string(),
    }
}
