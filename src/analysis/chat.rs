//! Chat-wide aggregation of per-sender statistics.

use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;

use super::calendar::DayHistogram;
use super::histogram::{WordCount, WordHistogram};
use super::sender::SenderAnalysis;

/// A sender and the value they were ranked by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranked<T> {
    pub name: String,
    pub value: T,
}

/// Statistics for a whole chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatAnalysis {
    /// Distinct senders.
    pub sender_count: usize,

    /// Sum of every sender's message count.
    pub total_messages: usize,

    /// Sum of every sender's filtered word count.
    pub total_words: usize,

    /// Element-wise sum of every sender's day table.
    pub days: DayHistogram,

    /// Mean of the day table, rounded.
    pub mean_daily_messages: f64,

    /// Most frequent words across all senders.
    pub top_words: Vec<WordCount>,

    /// Senders with the most messages.
    pub top_by_messages: Vec<Ranked<usize>>,

    /// Senders with the highest average words per message.
    pub top_by_average_words: Vec<Ranked<f64>>,

    #[serde(skip)]
    words: WordHistogram,
}

impl ChatAnalysis {
    /// Merges per-sender results, given in first-seen sender order.
    ///
    /// Every ranking is stable: on equal values the sender seen first in
    /// the chat ranks higher.
    pub fn from_senders(senders: &[SenderAnalysis], config: &AnalysisConfig) -> Self {
        let mut days = DayHistogram::new();
        let mut words = WordHistogram::new();
        let mut total_messages = 0;
        let mut total_words = 0;

        for sender in senders {
            days.merge(&sender.days);
            words.merge(sender.words());
            total_messages += sender.message_count;
            total_words += sender.word_count;
        }

        let mut by_messages: Vec<Ranked<usize>> = senders
            .iter()
            .map(|s| Ranked {
                name: s.name.clone(),
                value: s.message_count,
            })
            .collect();
        by_messages.sort_by(|a, b| b.value.cmp(&a.value));
        by_messages.truncate(config.top_n);

        let mut by_average: Vec<Ranked<f64>> = senders
            .iter()
            .map(|s| Ranked {
                name: s.name.clone(),
                value: s.average_words,
            })
            .collect();
        by_average.sort_by(|a, b| b.value.total_cmp(&a.value));
        by_average.truncate(config.top_n);

        Self {
            sender_count: senders.len(),
            total_messages,
            total_words,
            mean_daily_messages: days.mean_per_day(config.decimals),
            days,
            top_words: words.top(config.top_n),
            top_by_messages: by_messages,
            top_by_average_words: by_average,
            words,
        }
    }

    /// Chat-wide word histogram.
    pub fn words(&self) -> &WordHistogram {
        &self.words
    }
}
