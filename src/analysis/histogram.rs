//! Insertion-ordered word counts.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A word and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

/// Word frequencies that remember the order words were first seen.
///
/// Rankings are stable: among equal counts, the word seen first wins.
///
/// # Example
///
/// ```rust
/// use chatstats::analysis::WordHistogram;
///
/// let mut words = WordHistogram::new();
/// words.extend(["tea", "cake", "tea", "scone"]);
///
/// let top = words.top(2);
/// assert_eq!(top[0].word, "tea");
/// assert_eq!(top[1].word, "cake");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordHistogram {
    entries: Vec<WordCount>,
    index: HashMap<String, usize>,
}

impl WordHistogram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `n` occurrences of `word`.
    pub fn add_n(&mut self, word: &str, n: usize) {
        if let Some(&idx) = self.index.get(word) {
            self.entries[idx].count += n;
            return;
        }
        self.index.insert(word.to_string(), self.entries.len());
        self.entries.push(WordCount {
            word: word.to_string(),
            count: n,
        });
    }

    /// Adds one occurrence of `word`.
    pub fn add(&mut self, word: &str) {
        self.add_n(word, 1);
    }

    /// Adds one occurrence of every word.
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add(word.as_ref());
        }
    }

    /// Sums another histogram into this one.
    ///
    /// Words new to `self` are appended in `other`'s first-seen order.
    pub fn merge(&mut self, other: &WordHistogram) {
        for entry in &other.entries {
            self.add_n(&entry.word, entry.count);
        }
    }

    /// Count for a single word.
    pub fn get(&self, word: &str) -> usize {
        self.index
            .get(word)
            .map(|&idx| self.entries[idx].count)
            .unwrap_or(0)
    }

    /// Total number of occurrences.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Number of distinct words.
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `n` most frequent words, ties broken by first occurrence.
    pub fn top(&self, n: usize) -> Vec<WordCount> {
        let mut ranked: Vec<&WordCount> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.into_iter().take(n).cloned().collect()
    }

    /// All entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &WordCount> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_total() {
        let mut h = WordHistogram::new();
        h.extend(["a", "b", "a", "c", "a"]);
        assert_eq!(h.get("a"), 3);
        assert_eq!(h.get("z"), 0);
        assert_eq!(h.total(), 5);
        assert_eq!(h.distinct(), 3);
    }

    #[test]
    fn test_top_is_stable_on_ties() {
        let mut h = WordHistogram::new();
        h.extend(["delta", "alpha", "charlie", "bravo", "alpha", "bravo"]);
        let top: Vec<_> = h.top(4).into_iter().map(|w| w.word).collect();
        assert_eq!(top, vec!["alpha", "bravo", "delta", "charlie"]);
    }

    #[test]
    fn test_top_larger_than_len() {
        let mut h = WordHistogram::new();
        h.add("only");
        assert_eq!(h.top(5).len(), 1);
        assert!(WordHistogram::new().top(5).is_empty());
    }

    #[test]
    fn test_merge_sums_and_keeps_order() {
        let mut a = WordHistogram::new();
        a.extend(["x", "y"]);
        let mut b = WordHistogram::new();
        b.extend(["z", "x", "x"]);

        a.merge(&b);
        assert_eq!(a.get("x"), 3);
        let order: Vec<_> = a.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(order, vec!["x", "y", "z"]);
        assert_eq!(a.total(), 5);
    }
}
