//! Bounded substring scans used when slicing annotation notation.
//!
//! All helpers borrow from their input and never fail: a missing delimiter yields either
//! the whole input or an empty string, depending on the helper.

/// Text after the first occurrence of `delimiter`, or the whole input if it is absent.
#[must_use]
pub fn substring_after<'a>(s: &'a str, delimiter: &str) -> &'a str {
    s.find(delimiter).map_or(s, |i| &s[i + delimiter.len()..])
}

/// Text after the first occurrence of `delimiter`, or `""` if it is absent.
#[must_use]
pub fn substring_after_or_empty<'a>(s: &'a str, delimiter: &str) -> &'a str {
    s.find(delimiter).map_or("", |i| &s[i + delimiter.len()..])
}

/// Text before the first occurrence of `delimiter`, or the whole input if it is absent.
#[must_use]
pub fn substring_before<'a>(s: &'a str, delimiter: &str) -> &'a str {
    s.find(delimiter).map_or(s, |i| &s[..i])
}

/// Leading run of ASCII digits starting at the first digit in `s`, with the remainder.
pub(crate) fn first_digit_run(s: &str) -> Option<(&str, &str)> {
    let start = s.find(|c: char| c.is_ascii_digit())?;
    let rest = &s[start..];
    let len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some((&rest[..len], &rest[len..]))
}

/// True if `s` is a non-empty string of ASCII digits.
#[must_use]
pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_after() {
        assert_eq!(substring_after("chr7:g.140453136A>T", "g."), "140453136A>T");
        assert_eq!(substring_after("140453136A>T", "g."), "140453136A>T");
        assert_eq!(substring_after("a;b;c", ";"), "b;c");
    }

    #[test]
    fn test_substring_after_or_empty() {
        assert_eq!(substring_after_or_empty("chr7:g.1A>T", "chr"), "7:g.1A>T");
        assert_eq!(substring_after_or_empty("7:g.1A>T", "chr"), "");
    }

    #[test]
    fn test_substring_before() {
        assert_eq!(substring_before("7:g.1A>T", ":"), "7");
        assert_eq!(substring_before("7", ":"), "7");
        assert_eq!(substring_before("", ":"), "");
    }

    #[test]
    fn test_first_digit_run() {
        assert_eq!(first_digit_run("123_456del"), Some(("123", "_456del")));
        assert_eq!(first_digit_run("g.77A>T"), Some(("77", "A>T")));
        assert_eq!(first_digit_run("dupA"), None);
    }

    #[test]
    fn test_is_digits() {
        assert!(is_digits("12"));
        assert!(!is_digits(""));
        assert!(!is_digits("12A"));
        assert!(!is_digits("-5"));
    }
}
