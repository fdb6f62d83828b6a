use std::{
    ffi::OsStr,
    fs::{ReadDir, read_dir},
    path::{Path, PathBuf},
};

use log::{debug, warn};
use myls_runtime::current_dir_target;

use crate::{
    error::InspectError,
    identity::{IdentitySource, SystemIdentities},
    inspect::Inspector,
    record::FileRecord,
};

/// Lazy listing of one directory, yielding a record or an error per entry.
///
/// Entries come out in whatever order the OS returns them. The directory
/// handle is released when the listing is dropped.
pub struct DirListing<I = SystemIdentities> {
    dir: PathBuf,
    entries: ReadDir,
    inspector: Inspector<I>,
}

/// List the process's current working directory.
pub fn list_current_directory() -> Result<DirListing, InspectError> {
    list_directory(current_dir_target())
}

pub fn list_directory(dir: &Path) -> Result<DirListing, InspectError> {
    list_directory_with(dir, Inspector::system())
}

pub fn list_directory_with<I: IdentitySource>(
    dir: &Path,
    inspector: Inspector<I>,
) -> Result<DirListing<I>, InspectError> {
    let entries = read_dir(dir).map_err(|source| InspectError::DirectoryOpen {
        path: dir.to_path_buf(),
        source,
    })?;

    debug!("[walk] listing {:?}", dir);

    Ok(DirListing {
        dir: dir.to_path_buf(),
        entries,
        inspector,
    })
}

impl<I: IdentitySource> DirListing<I> {
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, name: &OsStr) -> PathBuf {
        // Entries of the current directory are inspected by bare name.
        if self.dir == current_dir_target() {
            PathBuf::from(name)
        } else {
            self.dir.join(name)
        }
    }
}

impl<I: IdentitySource> Iterator for DirListing<I> {
    type Item = Result<FileRecord, InspectError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(e) => e,
                Err(e) => {
                    warn!("[walk] error reading entry in {:?}: {e}", self.dir);
                    continue;
                }
            };

            let name = entry.file_name();
            if is_pseudo_entry(&name) {
                continue;
            }

            let path = self.entry_path(&name);
            return Some(self.inspector.inspect_named(&path, PathBuf::from(name)));
        }
    }
}

fn is_pseudo_entry(name: &OsStr) -> bool {
    name == "." || name == ".."
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
