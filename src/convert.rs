use chrono::{DateTime, Utc};
use std::time::SystemTime;

/// Both the title and the fingerprint source are capped at this many characters.
pub(crate) const TITLE_MAX_CHARS: usize = 99;

pub(crate) fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Stable grouping hash: lowercase hex MD5 of the capped message prefix. MD5 is an identity
/// here, not a security primitive; the aggregator groups occurrences by this value.
pub(crate) fn fingerprint(message: &str) -> String {
    let prefix = truncate_chars(message, TITLE_MAX_CHARS);
    format!("{:x}", md5::compute(prefix.as_bytes()))
}

pub(crate) fn time_to_timestamp(time: SystemTime) -> i64 {
    DateTime::<Utc>::from(time).timestamp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use test_case::test_case;

    #[test_case("",           0, ""     ; "empty")]
    #[test_case("abc",        5, "abc"  ; "shorter than max")]
    #[test_case("abc",        3, "abc"  ; "exactly max")]
    #[test_case("abcde",      3, "abc"  ; "longer than max")]
    #[test_case("ééééé",      3, "ééé"  ; "multibyte on char boundary")]
    fn truncate(s: &'static str, max: usize, expected: &'static str) {
        assert_eq!(expected, truncate_chars(s, max));
    }

    #[test_case("",    "d41d8cd98f00b204e9800998ecf8427e" ; "empty")]
    #[test_case("abc", "900150983cd24fb0d6963f7d28e17f72" ; "short")]
    fn fingerprint_known_values(message: &'static str, expected: &'static str) {
        assert_eq!(expected, fingerprint(message));
    }

    #[test]
    fn fingerprint_caps_at_99_chars() {
        let long = "a".repeat(250);
        assert_eq!(fingerprint(&long), fingerprint(&"a".repeat(99)));
        assert_ne!(fingerprint(&long), fingerprint(&"a".repeat(98)));
        assert_eq!(32, fingerprint(&long).len());
    }

    #[test]
    fn timestamp_is_whole_seconds() {
        let time = SystemTime::UNIX_EPOCH + Duration::from_millis(1_600_000_000_500);
        assert_eq!(1_600_000_000, time_to_timestamp(time));
    }
}
