use std::{
    fs::{self, Metadata},
    os::unix::fs::MetadataExt,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Local};
use log::debug;
use nix::sys::stat::{major, minor};

use crate::{
    error::InspectError,
    format::{classify_file_type, format_permissions, format_timestamp},
    identity::{IdentitySource, SystemIdentities, name_or_placeholder},
    record::FileRecord,
};

/// Turns a path into a [`FileRecord`] using one `lstat` call.
pub struct Inspector<I = SystemIdentities> {
    identities: I,
}

impl Inspector<SystemIdentities> {
    pub fn system() -> Self {
        Self::new(SystemIdentities)
    }
}

impl<I: IdentitySource> Inspector<I> {
    pub fn new(identities: I) -> Self {
        Self { identities }
    }

    /// Inspect `path` itself. Symbolic links are reported, not followed.
    pub fn inspect(&self, path: &Path) -> Result<FileRecord, InspectError> {
        self.inspect_named(path, path.to_path_buf())
    }

    /// Like [`Inspector::inspect`], but the record carries `name` instead of the path.
    pub fn inspect_named(&self, path: &Path, name: PathBuf) -> Result<FileRecord, InspectError> {
        let metadata = fs::symlink_metadata(path).map_err(|source| InspectError::PathAccess {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("[inspect] {:?}", path);

        Ok(self.to_record(name, &metadata, &Local::now()))
    }

    fn to_record(&self, name: PathBuf, metadata: &Metadata, now: &DateTime<Local>) -> FileRecord {
        let mode = metadata.mode();
        let uid = metadata.uid();
        let gid = metadata.gid();
        let dev = metadata.dev();

        FileRecord {
            name,
            uid,
            user: name_or_placeholder(self.identities.user_name(uid)),
            gid,
            group: name_or_placeholder(self.identities.group_name(gid)),
            file_type: classify_file_type(mode),
            permissions: format_permissions(mode),
            size: metadata.size(),
            inode: metadata.ino(),
            dev_major: major(dev),
            dev_minor: minor(dev),
            links: metadata.nlink(),
            accessed: format_timestamp(metadata.atime(), now),
            modified: format_timestamp(metadata.mtime(), now),
            changed: format_timestamp(metadata.ctime(), now),
        }
    }
}

/// Inspect `path` against the system identity databases.
pub fn inspect(path: &Path) -> Result<FileRecord, InspectError> {
    Inspector::system().inspect(path)
}

#[cfg(test)]
#[path = "inspect_tests.rs"]
mod tests;
