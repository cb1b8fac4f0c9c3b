//! CSV sender table writer.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::analysis::{SenderAnalysis, bucket_date};
use crate::error::{ChatstatsError, Result};

const HEADER: [&str; 7] = [
    "Sender",
    "Messages",
    "Placeholders",
    "Words",
    "AverageWords",
    "BusiestDay",
    "TopWords",
];

/// Writes one row per sender with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Sender`, `Messages`, `Placeholders`, `Words`, `AverageWords`,
///   `BusiestDay` (`MM-DD`, empty if no kept messages), `TopWords`
///   (`word:count` pairs separated by spaces)
/// - Encoding: UTF-8
pub fn write_csv(path: &Path, senders: &[SenderAnalysis]) -> Result<()> {
    let file = File::create(path).map_err(|e| ChatstatsError::output(path, e))?;
    write_rows(file, senders).map_err(|e| ChatstatsError::output(path, io::Error::from(e)))
}

/// Converts the sender table to a CSV string.
pub fn to_csv(senders: &[SenderAnalysis]) -> Result<String> {
    let mut buf = Vec::new();
    write_rows(&mut buf, senders)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn write_rows<W: Write>(sink: W, senders: &[SenderAnalysis]) -> csv::Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(sink);

    writer.write_record(HEADER)?;
    for sender in senders {
        writer.write_record(build_record(sender))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_record(sender: &SenderAnalysis) -> [String; 7] {
    let busiest = sender
        .days
        .busiest_day()
        .and_then(|(bucket, _)| bucket_date(bucket))
        .map(|d| d.format("%m-%d").to_string())
        .unwrap_or_default();

    let top_words = sender
        .top_words
        .iter()
        .map(|w| format!("{}:{}", w.word, w.count))
        .collect::<Vec<_>>()
        .join(" ");

    [
        sender.name.clone(),
        sender.message_count.to_string(),
        sender.ignored_count.to_string(),
        sender.word_count.to_string(),
        sender.average_words.to_string(),
        busiest,
        top_words,
    ]
}
