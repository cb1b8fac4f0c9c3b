//! Per-sender lexical and temporal statistics.

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::reassembly::SenderStream;

use super::calendar::DayHistogram;
use super::histogram::{WordCount, WordHistogram};
use super::round_to;
use super::tokenize::filter_tokens;

/// Statistics derived from one sender's streams.
///
/// Built after reassembly has finished; nothing here feeds back into it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenderAnalysis {
    /// Sanitized sender name.
    pub name: String,

    /// Messages attributed to the sender, placeholders included.
    pub message_count: usize,

    /// Messages whose body was a system placeholder.
    pub ignored_count: usize,

    /// Words left after stopword and punctuation filtering.
    pub word_count: usize,

    /// `word_count / message_count`, rounded.
    pub average_words: f64,

    /// Most frequent filtered words.
    pub top_words: Vec<WordCount>,

    /// Kept messages per day of year.
    pub days: DayHistogram,

    /// Filtered words in stream order.
    #[serde(skip)]
    pub filtered: Vec<String>,

    #[serde(skip)]
    pub(crate) words: WordHistogram,
}

impl SenderAnalysis {
    /// Analyzes a reassembled stream.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatstats::analysis::SenderAnalysis;
    /// use chatstats::config::AnalysisConfig;
    /// use chatstats::reassembly::reassemble_str;
    ///
    /// let chat = "01/01/2024, 10:00 - Alice: Pizza tonight?\n\
    ///             01/01/2024, 10:05 - Alice: pizza pizza!\n";
    /// let result = reassemble_str(chat, Default::default());
    /// let alice = SenderAnalysis::from_stream(&result.senders[0], &AnalysisConfig::default());
    ///
    /// assert_eq!(alice.word_count, 4);
    /// assert_eq!(alice.top_words[0].word, "pizza");
    /// assert_eq!(alice.average_words, 2.0);
    /// ```
    pub fn from_stream(stream: &SenderStream, config: &AnalysisConfig) -> Self {
        let filtered = filter_tokens(&stream.text);

        let mut words = WordHistogram::new();
        words.extend(&filtered);

        let mut days = DayHistogram::new();
        for ts in &stream.timestamps {
            days.record(ts.date());
        }

        let word_count = filtered.len();
        let average_words = if stream.message_count == 0 {
            0.0
        } else {
            round_to(
                word_count as f64 / stream.message_count as f64,
                config.decimals,
            )
        };

        Self {
            name: stream.name.clone(),
            message_count: stream.message_count,
            ignored_count: stream.ignored_count,
            word_count,
            average_words,
            top_words: words.top(config.top_n),
            days,
            filtered,
            words,
        }
    }

    /// Full word histogram for this sender.
    pub fn words(&self) -> &WordHistogram {
        &self.words
    }

    /// Filtered words joined by single spaces.
    pub fn filtered_text(&self) -> String {
        self.filtered.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn stream(name: &str, text: &str, messages: usize, days: &[(u32, u32)]) -> SenderStream {
        let mut s = SenderStream::new(name);
        s.text = text.to_string();
        s.message_count = messages;
        s.timestamps = days
            .iter()
            .map(|&(m, d)| {
                NaiveDate::from_ymd_opt(2023, m, d)
                    .unwrap()
                    .and_hms_opt(12, 0, 0)
                    .unwrap()
            })
            .collect();
        s
    }

    #[test]
    fn test_word_count_and_average() {
        let s = stream("Alice", "Hello world\nhello friend, world!\n", 3, &[(1, 1), (1, 2)]);
        let a = SenderAnalysis::from_stream(&s, &AnalysisConfig::default());
        assert_eq!(a.word_count, 5);
        // 5 / 3 = 1.666..
        assert!((a.average_words - 1.67).abs() < 1e-9);
        assert_eq!(a.top_words[0].word, "hello");
        assert_eq!(a.top_words[0].count, 2);
        assert_eq!(a.top_words[1].word, "world");
        assert_eq!(a.days.total(), 2);
    }

    #[test]
    fn test_top_n_respects_config() {
        let s = stream("Bob", "one two three four five six seven", 1, &[]);
        let a = SenderAnalysis::from_stream(&s, &AnalysisConfig::new().with_top_n(3));
        let top: Vec<_> = a.top_words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(top, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_zero_messages_has_zero_average() {
        let s = stream("Ghost", "", 0, &[]);
        let a = SenderAnalysis::from_stream(&s, &AnalysisConfig::default());
        assert_eq!(a.word_count, 0);
        assert!(a.average_words.abs() < f64::EPSILON);
        assert!(a.top_words.is_empty());
    }

    #[test]
    fn test_only_placeholders() {
        let mut s = SenderStream::new("Media Fan");
        s.push_ignored();
        s.push_ignored();
        let a = SenderAnalysis::from_stream(&s, &AnalysisConfig::default());
        assert_eq!(a.message_count, 2);
        assert_eq!(a.ignored_count, 2);
        assert_eq!(a.word_count, 0);
        assert_eq!(a.days.total(), 0);
    }

    #[test]
    fn test_filtered_text() {
        let s = stream("Carol", "The cat's toy is on the mat\n", 1, &[]);
        let a = SenderAnalysis::from_stream(&s, &AnalysisConfig::default());
        assert_eq!(a.filtered_text(), "cat toy mat");
    }
}
