use std::fmt;

/// Extension that marks a set file (matched case-insensitively)
pub const SET_FILE_EXTENSION: &str = ".json";

// Two-digit years are always in this century; no sliding window
const CENTURY_BASE: u16 = 2000;

/// Calendar date derived from a `YYMMDD` stem
///
/// Only the month (1-12) and day (1-31) ranges are checked, so impossible dates
/// such as February 30th are accepted as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SetDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl fmt::Display for SetDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Parse a six-digit `YYMMDD` filename stem into a [`SetDate`]
///
/// Returns `None` for anything that is not exactly six ASCII digits or whose month or
/// day is out of range. `None` is not an error: such files are labelled by their stem.
///
/// # Examples
///
/// ```
/// use student_index::parsers::parse_set_date;
///
/// assert_eq!(parse_set_date("260114").unwrap().to_string(), "2026-01-14");
/// assert!(parse_set_date("notadate").is_none());
/// assert!(parse_set_date("261301").is_none());
/// ```
pub fn parse_set_date(stem: &str) -> Option<SetDate> {
    let bytes = stem.as_bytes();
    if bytes.len() != 6 || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let pair = |i: usize| (bytes[i] - b'0') * 10 + (bytes[i + 1] - b'0');
    let (yy, month, day) = (pair(0), pair(2), pair(4));

    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }

    Some(SetDate { year: CENTURY_BASE + u16::from(yy), month, day })
}

/// Returns the stem of a set file name, or `None` if it does not end in `.json`
///
/// # Examples
///
/// ```
/// use student_index::parsers::set_stem;
///
/// assert_eq!(set_stem("260114.json"), Some("260114"));
/// assert_eq!(set_stem("260114.JSON"), Some("260114"));
/// assert_eq!(set_stem("260114.txt"), None);
/// ```
pub fn set_stem(file_name: &str) -> Option<&str> {
    let split_at = file_name.len().checked_sub(SET_FILE_EXTENSION.len())?;
    let extension = file_name.get(split_at..)?;
    if extension.eq_ignore_ascii_case(SET_FILE_EXTENSION) {
        Some(&file_name[..split_at])
    } else {
        None
    }
}
