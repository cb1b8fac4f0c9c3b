//! Per-sender output streams.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::parsing::{format_timestamp, parse_timestamp};

/// Everything reassembly attributed to one sender.
///
/// The text stream is append-only: message bodies and continuation lines
/// are concatenated verbatim, line terminators included, in arrival order.
/// Timestamps are recorded once per non-ignorable message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderStream {
    /// Sanitized sender name, unique within one chat.
    pub name: String,

    /// Concatenated message bodies and continuation lines.
    pub text: String,

    /// One entry per message whose body was kept.
    pub timestamps: Vec<NaiveDateTime>,

    /// Header lines attributed to this sender, placeholders included.
    pub message_count: usize,

    /// Header lines whose body was a system placeholder.
    pub ignored_count: usize,
}

impl SenderStream {
    /// Creates an empty stream for `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Records a message whose body is kept.
    pub fn push_message(&mut self, body: &str, timestamp: NaiveDateTime) {
        self.message_count += 1;
        self.text.push_str(body);
        self.timestamps.push(timestamp);
    }

    /// Records a message whose body is a suppressed placeholder.
    pub fn push_ignored(&mut self) {
        self.message_count += 1;
        self.ignored_count += 1;
    }

    /// Appends a soft-wrapped continuation line.
    pub fn push_continuation(&mut self, line: &str) {
        self.text.push_str(line);
    }

    /// Number of messages that contributed text and a timestamp.
    pub fn kept_count(&self) -> usize {
        self.timestamps.len()
    }

    /// Renders the timestamp stream, one `YYYY-MM-DD HH:MM` entry per line.
    pub fn timestamp_stream(&self) -> String {
        render_timestamp_stream(&self.timestamps)
    }
}

/// Renders timestamps one `YYYY-MM-DD HH:MM` entry per line.
pub fn render_timestamp_stream(timestamps: &[NaiveDateTime]) -> String {
    let mut out = String::with_capacity(timestamps.len() * 17);
    for ts in timestamps {
        out.push_str(&format_timestamp(ts));
        out.push('\n');
    }
    out
}

/// Parses a rendered timestamp stream, skipping blank or malformed lines.
pub fn parse_timestamp_stream(text: &str) -> Vec<NaiveDateTime> {
    text.lines().filter_map(parse_timestamp).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2023, 8, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_push_message_and_continuation() {
        let mut stream = SenderStream::new("Alice");
        stream.push_message("first line\n", ts(1, 9));
        stream.push_continuation("second line\n");
        stream.push_ignored();

        assert_eq!(stream.text, "first line\nsecond line\n");
        assert_eq!(stream.message_count, 2);
        assert_eq!(stream.ignored_count, 1);
        assert_eq!(stream.kept_count(), 1);
    }

    #[test]
    fn test_timestamp_stream_rendering() {
        let mut stream = SenderStream::new("Bob");
        stream.push_message("a\n", ts(1, 9));
        stream.push_message("b\n", ts(2, 18));
        assert_eq!(stream.timestamp_stream(), "2023-08-01 09:00\n2023-08-02 18:00\n");
    }

    #[test]
    fn test_parse_timestamp_stream_skips_garbage() {
        let parsed = parse_timestamp_stream("2023-08-01 09:00\n\nnot a date\n2023-08-02 18:00");
        assert_eq!(parsed, vec![ts(1, 9), ts(2, 18)]);
    }

    #[test]
    fn test_empty_stream_renders_empty() {
        assert_eq!(render_timestamp_stream(&[]), "");
    }
}
