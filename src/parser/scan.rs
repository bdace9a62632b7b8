//! Low-level numeric field scanning shared by the log parsers.

/// Parse the run of ASCII digits at the start of `s`.
///
/// Returns the value and the number of bytes consumed, `None` if `s` does
/// not start with a digit.
pub fn leading_integer(s: &str) -> Option<(u64, usize)> {
    let bytes = s.as_bytes();
    let mut end = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == 0 {
        return None;
    }
    s[..end].parse().ok().map(|value| (value, end))
}

/// Parse the run of ASCII digits at the end of `s`.
pub fn trailing_integer(s: &str) -> Option<u32> {
    let bytes = s.as_bytes();
    let mut start = bytes.len();
    while start > 0 && bytes[start - 1].is_ascii_digit() {
        start -= 1;
    }
    if start == bytes.len() {
        return None;
    }
    s[start..].parse().ok()
}

/// Parse the longest `[0-9.]` prefix of `s` as a float.
///
/// Trailing content after the number (units, separators) is ignored.
pub fn leading_float(s: &str) -> Option<(f64, usize)> {
    let end = s
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    s[..end].parse().ok().map(|value| (value, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("19070356 ops"), Some((19070356, 8)));
        assert_eq!(leading_integer("7"), Some((7, 1)));
        assert_eq!(leading_integer("ops 7"), None);
        assert_eq!(leading_integer(""), None);
    }

    #[test]
    fn test_trailing_integer() {
        assert_eq!(trailing_integer("Run 4"), Some(4));
        assert_eq!(trailing_integer("16"), Some(16));
        assert_eq!(trailing_integer("4 threads"), None);
        assert_eq!(trailing_integer(""), None);
    }

    #[test]
    fn test_leading_float() {
        assert_eq!(leading_float("2.94s"), Some((2.94, 4)));
        assert_eq!(leading_float("1034.5 MB/s"), Some((1034.5, 6)));
        assert_eq!(leading_float("103872.58k"), Some((103872.58, 9)));
        assert_eq!(leading_float("s2.94"), None);
        // A bare run of dots matches the scanned character class but is not
        // a number.
        assert_eq!(leading_float("..."), None);
    }
}
