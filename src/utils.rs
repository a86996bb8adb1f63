//! A collection of utility functions
use std::time::SystemTime;

use chrono::{DateTime, Utc};

/// Converts a `SystemTime` into milliseconds since the Unix epoch.
/// Times before the epoch come out negative.
pub fn system_time_millis(time: SystemTime) -> i64 {
    let datetime: DateTime<Utc> = time.into();
    datetime.timestamp_millis()
}

/// Formats epoch milliseconds as an RFC 1123 HTTP date in GMT.
/// For example "Sun, 06 Nov 1994 08:49:37 GMT"
pub fn format_rfc1123(millis: i64) -> String {
    let datetime = DateTime::<Utc>::from_timestamp_millis(millis).unwrap_or_default();
    datetime.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

/// Renders a byte count as kilobytes with one decimal digit, e.g. "1.4 kb".
///
/// The digit after the point is `(bytes % 1024) / 103`, truncated rather
/// than rounded. Any non-zero size renders as at least "0.1 kb".
pub fn render_size(bytes: u64) -> String {
    let kb = bytes / 1024;
    let mut tenths = (bytes % 1024) / 103;
    if kb == 0 && tenths == 0 && bytes > 0 {
        tenths = 1;
    }
    format!("{kb}.{tenths} kb")
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn size_zero_and_minimum() {
        assert_eq!(render_size(0), "0.0 kb");
        assert_eq!(render_size(1), "0.1 kb");
        assert_eq!(render_size(102), "0.1 kb");
        assert_eq!(render_size(103), "0.1 kb");
        assert_eq!(render_size(206), "0.2 kb");
    }

    #[test]
    fn size_truncates_tenths() {
        assert_eq!(render_size(1024), "1.0 kb");
        assert_eq!(render_size(1025), "1.0 kb");
        assert_eq!(render_size(1536), "1.4 kb");
        assert_eq!(render_size(2047), "1.9 kb");
        assert_eq!(render_size(1024 * 1024), "1024.0 kb");
    }

    #[test]
    fn rfc1123_epoch() {
        assert_eq!(format_rfc1123(0), "Thu, 01 Jan 1970 00:00:00 GMT");
    }

    #[test]
    fn rfc1123_known_date() {
        assert_eq!(
            format_rfc1123(784_111_777_000),
            "Sun, 06 Nov 1994 08:49:37 GMT"
        );
        // sub-second precision is dropped
        assert_eq!(
            format_rfc1123(784_111_777_999),
            "Sun, 06 Nov 1994 08:49:37 GMT"
        );
    }

    #[test]
    fn system_time_to_millis() {
        let t = SystemTime::UNIX_EPOCH + Duration::from_millis(1_500);
        assert_eq!(system_time_millis(t), 1_500);
        assert_eq!(system_time_millis(SystemTime::UNIX_EPOCH), 0);
    }
}
