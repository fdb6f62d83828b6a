//! Pure translations from raw `stat` fields to the strings the listing prints.

use bitflags::bitflags;
use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};

use crate::record::FileType;

/// Mask selecting the file-type bits of `st_mode`.
pub const S_IFMT: u32 = 0o170_000;
pub const S_IFSOCK: u32 = 0o140_000;
pub const S_IFLNK: u32 = 0o120_000;
pub const S_IFREG: u32 = 0o100_000;
pub const S_IFBLK: u32 = 0o060_000;
pub const S_IFDIR: u32 = 0o040_000;
pub const S_IFCHR: u32 = 0o020_000;
pub const S_IFIFO: u32 = 0o010_000;

/// Printed for a month index outside `0..=11` and for unrepresentable times.
pub const UNAVAILABLE: &str = "N/A";

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

bitflags! {
    /// Access permission bits of `st_mode`.
    ///
    /// setuid, setgid and sticky are not listed and therefore never rendered.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Permissions: u32 {
        const OWNER_READ = 0o400;
        const OWNER_WRITE = 0o200;
        const OWNER_EXEC = 0o100;
        const GROUP_READ = 0o040;
        const GROUP_WRITE = 0o020;
        const GROUP_EXEC = 0o010;
        const OTHER_READ = 0o004;
        const OTHER_WRITE = 0o002;
        const OTHER_EXEC = 0o001;
    }
}

/// Render order of the permission string, with the letter for a set bit.
const PERMISSION_LETTERS: [(Permissions, char); 9] = [
    (Permissions::OWNER_READ, 'r'),
    (Permissions::OWNER_WRITE, 'w'),
    (Permissions::OWNER_EXEC, 'x'),
    (Permissions::GROUP_READ, 'r'),
    (Permissions::GROUP_WRITE, 'w'),
    (Permissions::GROUP_EXEC, 'x'),
    (Permissions::OTHER_READ, 'r'),
    (Permissions::OTHER_WRITE, 'w'),
    (Permissions::OTHER_EXEC, 'x'),
];

/// Classify the type bits of a raw mode.
///
/// Tested in the order regular, block, character, directory, symlink, fifo,
/// socket. Anything left over is `Unrecognized`, which still prints as "Socket".
pub fn classify_file_type(mode: u32) -> FileType {
    let kind = mode & S_IFMT;

    if kind == S_IFREG {
        FileType::Regular
    } else if kind == S_IFBLK {
        FileType::BlockDevice
    } else if kind == S_IFCHR {
        FileType::CharacterDevice
    } else if kind == S_IFDIR {
        FileType::Directory
    } else if kind == S_IFLNK {
        FileType::SymbolicLink
    } else if kind == S_IFIFO {
        FileType::NamedPipe
    } else if kind == S_IFSOCK {
        FileType::Socket
    } else {
        FileType::Unrecognized
    }
}

/// Nine-character `rwxrwxrwx` string; unset bits are `-`.
pub fn format_permissions(mode: u32) -> String {
    let perms = Permissions::from_bits_truncate(mode);

    PERMISSION_LETTERS
        .iter()
        .map(|&(bit, letter)| if perms.contains(bit) { letter } else { '-' })
        .collect()
}

/// Three-letter month for a zero-based month index.
pub fn format_month(month0: u32) -> &'static str {
    MONTHS.get(month0 as usize).copied().unwrap_or(UNAVAILABLE)
}

/// Local-time rendering of a Unix timestamp, `ls -l` style.
///
/// Same calendar year as `now`: `"Mon DD HH:MM"`. Any other year: `"Mon DD  YYYY"`.
pub fn format_timestamp(epoch_secs: i64, now: &DateTime<Local>) -> String {
    match Local.timestamp_opt(epoch_secs, 0).earliest() {
        Some(when) => render_timestamp(&when, now.year()),
        None => UNAVAILABLE.to_owned(),
    }
}

/// Timezone-agnostic core of [`format_timestamp`].
pub fn render_timestamp<Tz: TimeZone>(when: &DateTime<Tz>, reference_year: i32) -> String {
    let month = format_month(when.month0());

    if when.year() == reference_year {
        format!(
            "{month:>3} {:>2} {:02}:{:02}",
            when.day(),
            when.hour(),
            when.minute()
        )
    } else {
        format!("{month:>3} {:>2} {:>5}", when.day(), when.year())
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
