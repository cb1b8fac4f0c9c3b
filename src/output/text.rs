//! Plain-text artifacts.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::analysis::{ChatAnalysis, DayHistogram, SenderAnalysis, WordCount, bucket_date};
use crate::error::{ChatstatsError, Result};
use crate::reassembly::{ReassemblyStats, SenderStream};

use super::{FILTERED_FILE, MESSAGES_FILE, REPORT_FILE, TIMESTAMPS_FILE};

/// Writes `contents` to `path`, replacing any existing file.
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).map_err(|e| ChatstatsError::output(path, e))
}

/// Writes the four text files of one sender into `dir`.
///
/// `dir` must already exist.
pub fn write_sender_texts(dir: &Path, stream: &SenderStream, analysis: &SenderAnalysis) -> Result<()> {
    write_text(&dir.join(MESSAGES_FILE), &stream.text)?;
    write_text(&dir.join(TIMESTAMPS_FILE), &stream.timestamp_stream())?;
    write_text(&dir.join(FILTERED_FILE), &analysis.filtered_text())?;
    write_text(&dir.join(REPORT_FILE), &lexical_report(analysis))?;
    Ok(())
}

/// Human-readable report for one sender.
///
/// # Example
///
/// ```rust
/// use chatstats::analysis::SenderAnalysis;
/// use chatstats::output::lexical_report;
/// use chatstats::reassembly::reassemble_str;
///
/// let result = reassemble_str("01/01/2024, 10:00 - Alice: tea or coffee\n", Default::default());
/// let alice = SenderAnalysis::from_stream(&result.senders[0], &Default::default());
///
/// let report = lexical_report(&alice);
/// assert!(report.contains("Sender: Alice"));
/// assert!(report.contains("Words: 2"));
/// ```
pub fn lexical_report(analysis: &SenderAnalysis) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Sender: {}", analysis.name);
    let _ = writeln!(out, "Messages: {}", analysis.message_count);
    let _ = writeln!(out, "Placeholders: {}", analysis.ignored_count);
    let _ = writeln!(out, "Words: {}", analysis.word_count);
    let _ = writeln!(out, "Distinct words: {}", analysis.words().distinct());
    let _ = writeln!(out, "Average words per message: {}", analysis.average_words);
    write_busiest_day(&mut out, &analysis.days);
    write_top_words(&mut out, &analysis.top_words);
    out
}

/// Human-readable summary for a whole chat.
pub fn chat_summary(chat_name: &str, stats: &ReassemblyStats, analysis: &ChatAnalysis) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Chat: {chat_name}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Lines: {}", stats.total_lines);
    let _ = writeln!(out, "Valid timestamps: {}", stats.valid_timestamps);
    let _ = writeln!(out, "Valid messages: {}", stats.valid_messages);
    let _ = writeln!(out, "Placeholders: {}", stats.ignored_messages);
    let _ = writeln!(out, "Misattributed headers: {}", stats.misattributed_headers);
    let _ = writeln!(out, "Continuation lines: {}", stats.continuation_lines);
    let _ = writeln!(out, "Orphan lines: {}", stats.orphan_lines);
    let _ = writeln!(out);
    let _ = writeln!(out, "Senders: {}", analysis.sender_count);
    let _ = writeln!(out, "Words: {}", analysis.total_words);
    let _ = writeln!(out, "Mean messages per day: {}", analysis.mean_daily_messages);
    write_busiest_day(&mut out, &analysis.days);

    let _ = writeln!(out);
    let _ = writeln!(out, "Most messages:");
    for (rank, entry) in analysis.top_by_messages.iter().enumerate() {
        let _ = writeln!(out, "  {}. {} ({})", rank + 1, entry.name, entry.value);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Highest average words per message:");
    for (rank, entry) in analysis.top_by_average_words.iter().enumerate() {
        let _ = writeln!(out, "  {}. {} ({})", rank + 1, entry.name, entry.value);
    }

    write_top_words(&mut out, &analysis.top_words);
    out
}

fn write_busiest_day(out: &mut String, days: &DayHistogram) {
    let busiest = days
        .busiest_day()
        .and_then(|(bucket, count)| bucket_date(bucket).map(|d| (d, count)));
    match busiest {
        Some((date, count)) => {
            let _ = writeln!(out, "Busiest day: {} ({count})", date.format("%d %B"));
        }
        None => {
            let _ = writeln!(out, "Busiest day: -");
        }
    }
}

fn write_top_words(out: &mut String, words: &[WordCount]) {
    let _ = writeln!(out);
    let _ = writeln!(out, "Top words:");
    for (rank, entry) in words.iter().enumerate() {
        let _ = writeln!(out, "  {}. {} ({})", rank + 1, entry.word, entry.count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use crate::reassembly::reassemble_str;
    use tempfile::TempDir;

    const CHAT: &str = "\
04/07/2023, 09:00 - Alice: fireworks tonight
04/07/2023, 09:05 - Bob: fireworks sound great
which park?
05/07/2023, 10:00 - Alice: <Media omitted>
";

    fn analyze() -> (crate::reassembly::Reassembly, Vec<SenderAnalysis>, ChatAnalysis) {
        let config = AnalysisConfig::default();
        let result = reassemble_str(CHAT, Default::default());
        let senders: Vec<_> = result
            .senders
            .iter()
            .map(|s| SenderAnalysis::from_stream(s, &config))
            .collect();
        let chat = ChatAnalysis::from_senders(&senders, &config);
        (result, senders, chat)
    }

    #[test]
    fn test_lexical_report() {
        let (_, senders, _) = analyze();
        let report = lexical_report(&senders[1]);
        assert!(report.contains("Sender: Bob"));
        assert!(report.contains("Messages: 1"));
        assert!(report.contains("Words: 4"));
        assert!(report.contains("Busiest day: 04 July (1)"));
        assert!(report.contains("1. fireworks (1)"));
    }

    #[test]
    fn test_chat_summary() {
        let (result, _, chat) = analyze();
        let summary = chat_summary("family", &result.stats, &chat);
        assert!(summary.starts_with("Chat: family\n"));
        assert!(summary.contains("Lines: 4"));
        assert!(summary.contains("Valid messages: 3"));
        assert!(summary.contains("Continuation lines: 1"));
        assert!(summary.contains("1. Alice (2)"));
        assert!(summary.contains("1. fireworks (2)"));
    }

    #[test]
    fn test_empty_days_report() {
        let analysis = SenderAnalysis::from_stream(&SenderStream::new("Nobody"), &Default::default());
        assert!(lexical_report(&analysis).contains("Busiest day: -"));
    }

    #[test]
    fn test_write_sender_texts() {
        let (result, senders, _) = analyze();
        let dir = TempDir::new().unwrap();
        write_sender_texts(dir.path(), &result.senders[1], &senders[1]).unwrap();

        let messages = fs::read_to_string(dir.path().join(MESSAGES_FILE)).unwrap();
        assert_eq!(messages, "fireworks sound great\nwhich park?\n");
        let timestamps = fs::read_to_string(dir.path().join(TIMESTAMPS_FILE)).unwrap();
        assert_eq!(timestamps, "2023-07-04 09:05\n");
        let filtered = fs::read_to_string(dir.path().join(FILTERED_FILE)).unwrap();
        assert_eq!(filtered, "fireworks sound great park");
        assert!(dir.path().join(REPORT_FILE).exists());
    }

    #[test]
    fn test_write_text_missing_dir_is_output_error() {
        let dir = TempDir::new().unwrap();
        let err = write_text(&dir.path().join("missing").join("x.txt"), "x").unwrap_err();
        assert!(err.is_io());
        assert!(!err.is_input());
    }
}
