use std::{
    fmt,
    path::{Path, PathBuf},
};

use serde::{Serialize, Serializer};

/// File type as reported by the `st_mode` type bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    Regular,
    BlockDevice,
    CharacterDevice,
    Directory,
    SymbolicLink,
    NamedPipe,
    Socket,
    /// Type bits that match none of the known classes. Rendered as "Socket",
    /// which is what the listing has always printed for the fall-through case.
    Unrecognized,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::Regular => "Regular",
            FileType::BlockDevice => "Block Device",
            FileType::CharacterDevice => "Character Device",
            FileType::Directory => "Directory",
            FileType::SymbolicLink => "Symbolic Link",
            FileType::NamedPipe => "Named Pipe",
            FileType::Socket | FileType::Unrecognized => "Socket",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for FileType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Everything the listing prints for one path.
///
/// Built in one go from a single `lstat` snapshot; nothing in here is
/// re-queried after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Path as given, or the bare entry name for directory listings.
    /// Kept as raw bytes; JSON gets a lossy UTF-8 rendering.
    #[serde(serialize_with = "serialize_lossy")]
    pub name: PathBuf,
    pub uid: u32,
    /// Owner name, or "Not Available"
    pub user: String,
    pub gid: u32,
    /// Group name, or "Not Available"
    pub group: String,
    pub file_type: FileType,
    /// Nine characters, e.g. `rwxr-x---`
    pub permissions: String,
    /// Size in bytes
    pub size: u64,
    pub inode: u64,
    /// Major number of the containing device (`st_dev`)
    pub dev_major: u64,
    /// Minor number of the containing device (`st_dev`)
    pub dev_minor: u64,
    /// Hard link count
    pub links: u64,
    pub accessed: String,
    pub modified: String,
    pub changed: String,
}

fn serialize_lossy<S: Serializer>(name: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&name.to_string_lossy())
}
