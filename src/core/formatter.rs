//! Field formatting for the long listing.
//!
//! Permission strings, timestamps and the placeholder glyphs used when an entry could
//! not be stat'ed. Also the display-width padding shared by every layout.

use crate::core::fm::EntryKind;

use chrono::{DateTime, Local, TimeZone};
use unicode_width::UnicodeWidthStr;

use std::time::{SystemTime, UNIX_EPOCH};

const S_ISUID: u32 = 0o4000;
const S_ISGID: u32 = 0o2000;
const S_ISVTX: u32 = 0o1000;

/// `strftime` pattern for the long listing timestamp, e.g. `Mar  7 14:05`.
pub const TIME_FORMAT: &str = "%b %e %H:%M";

/// Shown in place of the permission string when an entry could not be stat'ed.
pub const UNKNOWN_PERMS: &str = "??????????";
/// Same width as a [TIME_FORMAT] rendering.
pub const UNKNOWN_TIME: &str = "????????????";
/// Shown in the links/owner/group/size columns of a placeholder row.
pub const UNKNOWN_FIELD: &str = "?";

/// Formats the file type and mode bits the classic `ls -l` way.
///
/// Position 0 is the type glyph, then three `rwx` triples for owner, group and other.
/// setuid/setgid replace the owner/group execute slot with `s` (or `S` without the execute
/// bit), the sticky bit does the same for other with `t`/`T`.
///
/// # Returns
/// A 10 character string like `drwxr-xr-x`.
pub fn format_mode(kind: EntryKind, mode: u32) -> String {
    let mut chars = [kind.glyph(), '-', '-', '-', '-', '-', '-', '-', '-', '-'];
    let triples = [(6, S_ISUID, 's'), (3, S_ISGID, 's'), (0, S_ISVTX, 't')];

    for (i, &(shift, special, marker)) in triples.iter().enumerate() {
        let base = 1 + i * 3;
        if (mode >> (shift + 2)) & 1 != 0 {
            chars[base] = 'r';
        }
        if (mode >> (shift + 1)) & 1 != 0 {
            chars[base + 1] = 'w';
        }
        let exec = (mode >> shift) & 1 != 0;
        chars[base + 2] = match (exec, mode & special != 0) {
            (true, true) => marker,
            (false, true) => marker.to_ascii_uppercase(),
            (true, false) => 'x',
            (false, false) => '-',
        };
    }
    chars.iter().collect()
}

/// Formats the modification time in local time using [TIME_FORMAT].
///
/// # Returns
/// The formatted time, or [UNKNOWN_TIME] if the platform did not report one or it lies
/// outside the range chrono can represent in the local zone.
pub fn format_file_time(modified: Option<SystemTime>) -> String {
    modified
        .and_then(local_time)
        .map(|dt| dt.format(TIME_FORMAT).to_string())
        .unwrap_or_else(|| UNKNOWN_TIME.to_string())
}

/// Checked `SystemTime` to local time conversion. Times before the epoch are supported.
fn local_time(mtime: SystemTime) -> Option<DateTime<Local>> {
    let (secs, nanos) = match mtime.duration_since(UNIX_EPOCH) {
        Ok(after) => (i64::try_from(after.as_secs()).ok()?, after.subsec_nanos()),
        Err(e) => {
            let before = e.duration();
            let secs = i64::try_from(before.as_secs()).ok()?;
            match before.subsec_nanos() {
                0 => (-secs, 0),
                n => (-secs - 1, 1_000_000_000 - n),
            }
        }
    };
    Local.timestamp_opt(secs, nanos).single()
}

/// Terminal column width of `text`.
#[inline]
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Appends spaces after `styled` until the visible text (`plain`) fills `width` columns.
///
/// `styled` may carry escape sequences, only `plain` is measured.
pub fn pad_right(styled: &str, plain: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(plain));
    let mut out = String::with_capacity(styled.len() + pad);
    out.push_str(styled);
    out.extend(std::iter::repeat_n(' ', pad));
    out
}

/// Prepends spaces before `plain` until it fills `width` columns.
pub fn pad_left(plain: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(plain));
    let mut out = String::with_capacity(plain.len() + pad);
    out.extend(std::iter::repeat_n(' ', pad));
    out.push_str(plain);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn owner_only_regular_file() {
        assert_eq!(format_mode(EntryKind::Regular, 0o600), "-rw-------");
    }

    #[test]
    fn private_directory() {
        assert_eq!(format_mode(EntryKind::Directory, 0o700), "drwx------");
    }

    #[test]
    fn common_modes() {
        let cases = [
            (EntryKind::Regular, 0o644, "-rw-r--r--"),
            (EntryKind::Regular, 0o755, "-rwxr-xr-x"),
            (EntryKind::Symlink, 0o777, "lrwxrwxrwx"),
            (EntryKind::CharDevice, 0o620, "crw--w----"),
            (EntryKind::BlockDevice, 0o660, "brw-rw----"),
            (EntryKind::Fifo, 0o644, "prw-r--r--"),
            (EntryKind::Socket, 0o755, "srwxr-xr-x"),
        ];
        for (kind, mode, expected) in cases {
            assert_eq!(format_mode(kind, mode), expected, "mode {mode:o}");
        }
    }

    #[test]
    fn special_bits() {
        let cases = [
            (0o4755, "-rwsr-xr-x"),
            (0o4644, "-rwSr--r--"),
            (0o2755, "-rwxr-sr-x"),
            (0o2745, "-rwxr-Sr-x"),
            (0o1777, "-rwxrwxrwt"),
            (0o1776, "-rwxrwxrwT"),
            (0o7000, "---S--S--T"),
        ];
        for (mode, expected) in cases {
            assert_eq!(format_mode(EntryKind::Regular, mode), expected, "mode {mode:o}");
        }
    }

    #[test]
    fn mode_string_is_ten_chars() {
        for mode in [0, 0o777, 0o7777] {
            assert_eq!(format_mode(EntryKind::Directory, mode).chars().count(), 10);
        }
    }

    #[test]
    fn time_has_fixed_width() {
        let t = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let formatted = format_file_time(Some(t));
        assert_eq!(formatted.len(), UNKNOWN_TIME.len(), "got {formatted:?}");
        assert_eq!(format_file_time(None), UNKNOWN_TIME);
    }

    #[test]
    fn out_of_range_time_is_unknown() {
        let far = UNIX_EPOCH + Duration::from_secs(99_999_999_999_999);
        assert_eq!(format_file_time(Some(far)), UNKNOWN_TIME);
    }

    #[test]
    fn pre_epoch_time_is_formatted() {
        let t = UNIX_EPOCH - Duration::from_millis(86_400_500);
        let formatted = format_file_time(Some(t));
        assert_eq!(formatted.len(), UNKNOWN_TIME.len(), "got {formatted:?}");
        assert_ne!(formatted, UNKNOWN_TIME);
    }

    #[test]
    fn padding_ignores_escapes() {
        let styled = "\x1b[0;34msrc\x1b[0m";
        let padded = pad_right(styled, "src", 6);
        assert!(padded.ends_with("\x1b[0m   "));
        assert_eq!(pad_left("7", 3), "  7");
        assert_eq!(pad_left("1234", 2), "1234");
    }
}
