use super::*;
use chrono::{FixedOffset, Utc};

#[test]
fn classify_file_type_cases() {
    let cases: &[(u32, FileType)] = &[
        (S_IFREG | 0o644, FileType::Regular),
        (S_IFBLK | 0o660, FileType::BlockDevice),
        (S_IFCHR | 0o620, FileType::CharacterDevice),
        (S_IFDIR | 0o755, FileType::Directory),
        (S_IFLNK | 0o777, FileType::SymbolicLink),
        (S_IFIFO | 0o600, FileType::NamedPipe),
        (S_IFSOCK | 0o755, FileType::Socket),
        (0o644, FileType::Unrecognized),
        (0o170_000, FileType::Unrecognized),
    ];

    for (mode, expected) in cases {
        let got = classify_file_type(*mode);
        assert_eq!(got, *expected, "mode {:o} should be {:?}", mode, expected);
    }
}

#[test]
fn classify_ignores_permission_and_special_bits() {
    assert_eq!(classify_file_type(S_IFREG | 0o7777), FileType::Regular);
    assert_eq!(classify_file_type(S_IFDIR | 0o1777), FileType::Directory);
}

#[test]
fn unrecognized_type_prints_as_socket() {
    assert_eq!(FileType::Unrecognized.to_string(), "Socket");
    assert_ne!(FileType::Unrecognized, FileType::Socket);
}

#[test]
fn file_type_display_names() {
    let cases = [
        (FileType::Regular, "Regular"),
        (FileType::BlockDevice, "Block Device"),
        (FileType::CharacterDevice, "Character Device"),
        (FileType::Directory, "Directory"),
        (FileType::SymbolicLink, "Symbolic Link"),
        (FileType::NamedPipe, "Named Pipe"),
        (FileType::Socket, "Socket"),
    ];

    for (ty, name) in cases {
        assert_eq!(ty.to_string(), name);
    }
}

#[test]
fn format_permissions_matches_every_bit_combination() {
    let letters = ['r', 'w', 'x'];

    for mode in 0..=0o777u32 {
        let s = format_permissions(mode);
        assert_eq!(s.chars().count(), 9, "mode {:o} -> {:?}", mode, s);

        for (pos, ch) in s.chars().enumerate() {
            let bit = 0o400 >> pos;
            let expected = if mode & bit != 0 { letters[pos % 3] } else { '-' };
            assert_eq!(ch, expected, "mode {:o} position {} in {:?}", mode, pos, s);
        }
    }
}

#[test]
fn format_permissions_examples() {
    let cases: &[(u32, &str)] = &[
        (0o000, "---------"),
        (0o777, "rwxrwxrwx"),
        (0o775, "rwxrwxr-x"),
        (0o644, "rw-r--r--"),
        (0o400, "r--------"),
        (0o001, "--------x"),
        // file type and setuid/setgid/sticky bits are not shown
        (S_IFREG | 0o4755, "rwxr-xr-x"),
        (S_IFDIR | 0o1777, "rwxrwxrwx"),
    ];

    for (mode, expected) in cases {
        assert_eq!(format_permissions(*mode), *expected, "mode {:o}", mode);
    }
}

#[test]
fn format_month_table() {
    let expected = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    for (idx, name) in expected.iter().enumerate() {
        assert_eq!(format_month(idx as u32), *name);
    }
}

#[test]
fn format_month_out_of_range_is_unavailable() {
    for idx in [12, 13, 100, u32::MAX] {
        assert_eq!(format_month(idx), "N/A", "index {}", idx);
    }
}

#[test]
fn render_timestamp_same_year_shows_time() {
    let when = Utc.with_ymd_and_hms(2024, 3, 5, 7, 9, 0).unwrap();
    assert_eq!(render_timestamp(&when, 2024), "Mar  5 07:09");

    let when = Utc.with_ymd_and_hms(2024, 12, 25, 23, 59, 59).unwrap();
    assert_eq!(render_timestamp(&when, 2024), "Dec 25 23:59");

    let when = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(render_timestamp(&when, 2024), "Jan  1 00:00");
}

#[test]
fn render_timestamp_other_year_shows_year() {
    let when = Utc.with_ymd_and_hms(2010, 5, 25, 0, 30, 0).unwrap();
    assert_eq!(render_timestamp(&when, 2024), "May 25  2010");

    // future years are formatted the same way
    let when = Utc.with_ymd_and_hms(2031, 11, 2, 14, 0, 0).unwrap();
    assert_eq!(render_timestamp(&when, 2024), "Nov  2  2031");
}

#[test]
fn render_timestamp_uses_the_given_zone() {
    // 2023-12-31 23:30 UTC is already 2024 in UTC+1
    let utc = Utc.with_ymd_and_hms(2023, 12, 31, 23, 30, 0).unwrap();
    let plus_one = utc.with_timezone(&FixedOffset::east_opt(3600).unwrap());

    assert_eq!(render_timestamp(&utc, 2024), "Dec 31  2023");
    assert_eq!(render_timestamp(&plus_one, 2024), "Jan  1 00:30");
}

#[test]
fn format_timestamp_now_omits_year() {
    let now = Local::now();
    let s = format_timestamp(now.timestamp(), &now);

    assert_eq!(s.len(), 12, "{s:?}");
    assert_eq!(&s[9..10], ":", "{s:?}");
    assert!(!s.contains(&now.year().to_string()), "{s:?}");
}

#[test]
fn format_timestamp_other_year_includes_year() {
    let now = Local::now();
    // a day's slack either side of the epoch covers every UTC offset
    let s = format_timestamp(86_400 * 2, &now);

    assert!(s.ends_with("  1970"), "{s:?}");
    assert!(!s.contains(':'), "{s:?}");
}

#[test]
fn format_timestamp_out_of_range_is_unavailable() {
    let now = Local::now();
    assert_eq!(format_timestamp(i64::MAX, &now), "N/A");
}
