//! Fixed-width header timestamp validation.
//!
//! Header lines start with a 20-character prefix in day-first order:
//!
//! ```text
//! index  0123456789...
//!        12/08/2023, 14:05 -·
//! ```
//!
//! Positions 2 and 5 hold `/`, 10 holds `,`, 11/17/19 hold a space, 14 holds
//! `:` and 18 holds `-`. Every other position is an ASCII digit. All checked
//! positions are ASCII, so byte and character offsets agree on any prefix
//! that passes.

use chrono::NaiveDateTime;

/// Width of the timestamp prefix, separator included.
pub const TIMESTAMP_WIDTH: usize = 20;

/// Length of the `DD/MM/YYYY, HH:MM` part handed to chrono.
const DATETIME_LEN: usize = 17;

/// chrono pattern for the date-time part of a header.
const HEADER_FORMAT: &str = "%d/%m/%Y, %H:%M";

/// Format used for timestamp stream entries (`YYYY-MM-DD HH:MM`).
const STREAM_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Expected punctuation at fixed positions; `None` means "ASCII digit".
const LAYOUT: [Option<u8>; TIMESTAMP_WIDTH] = [
    None,
    None,
    Some(b'/'),
    None,
    None,
    Some(b'/'),
    None,
    None,
    None,
    None,
    Some(b','),
    Some(b' '),
    None,
    None,
    Some(b':'),
    None,
    None,
    Some(b' '),
    Some(b'-'),
    Some(b' '),
];

/// Returns `true` if the first 20 characters of `line` match the header layout.
///
/// Only the shape is checked; see [`validate_timestamp`] for calendar checks.
pub fn has_timestamp_shape(line: &str) -> bool {
    let Some(prefix) = line.as_bytes().get(..TIMESTAMP_WIDTH) else {
        return false;
    };

    prefix
        .iter()
        .zip(LAYOUT.iter())
        .all(|(&byte, expected)| match expected {
            Some(punct) => byte == *punct,
            None => byte.is_ascii_digit(),
        })
}

/// Validates the header prefix of `line` and parses its date-time.
///
/// Returns `None` when the line is shorter than 20 characters, when the
/// layout does not match, or when the fields do not name a real calendar
/// date and time (for example `31/02/2023` or `24:30`).
///
/// # Example
///
/// ```rust
/// use chatstats::parsing::validate_timestamp;
/// use chrono::NaiveDate;
///
/// let ts = validate_timestamp("12/08/2023, 14:05 - Alice: Hello there").unwrap();
/// assert_eq!(ts, NaiveDate::from_ymd_opt(2023, 8, 12).unwrap().and_hms_opt(14, 5, 0).unwrap());
///
/// assert!(validate_timestamp("Hello there").is_none());
/// ```
pub fn validate_timestamp(line: &str) -> Option<NaiveDateTime> {
    if !has_timestamp_shape(line) {
        return None;
    }

    NaiveDateTime::parse_from_str(&line[..DATETIME_LEN], HEADER_FORMAT).ok()
}

/// Formats a date-time as a timestamp stream entry.
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(STREAM_FORMAT).to_string()
}

/// Parses a single timestamp stream entry (`YYYY-MM-DD HH:MM`).
///
/// Surrounding whitespace, including the line terminator, is ignored.
pub fn parse_timestamp(entry: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(entry.trim(), STREAM_FORMAT).ok()
}
