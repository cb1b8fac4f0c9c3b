//! The line-classification state machine.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::ReassemblyConfig;
use crate::parsing::{
    IgnorableKind, TIMESTAMP_WIDTH, classify_ignorable, split_sender_and_message,
    validate_timestamp,
};

use super::stream::SenderStream;

/// How a single raw line was classified.
///
/// Exactly one class is assigned per line, and each class maps onto one
/// counter in [`ReassemblyStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineClass {
    /// Valid timestamp and sender; starts a new message.
    ///
    /// `ignorable` is set when the body is a system placeholder.
    Header { ignorable: Option<IgnorableKind> },

    /// Valid timestamp but no real sender (system notice). Breaks any
    /// continuation chain.
    MisattributedHeader,

    /// No valid timestamp; appended to the active sender's stream.
    Continuation,

    /// No valid timestamp and no active sender; dropped.
    Orphan,
}

impl LineClass {
    /// Returns `true` if the line carried a well-formed timestamp.
    pub fn has_timestamp(&self) -> bool {
        matches!(
            self,
            LineClass::Header { .. } | LineClass::MisattributedHeader
        )
    }
}

/// Line tallies for one reassembly run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReassemblyStats {
    /// Every raw line read.
    pub total_lines: usize,

    /// Lines whose timestamp prefix was valid.
    pub valid_timestamps: usize,

    /// Header lines with a real sender, placeholders included.
    pub valid_messages: usize,

    /// Valid messages whose body was a system placeholder.
    pub ignored_messages: usize,

    /// Timestamped lines rejected as system notices.
    pub misattributed_headers: usize,

    /// Lines appended to an active sender.
    pub continuation_lines: usize,

    /// Lines dropped for lack of an active sender.
    pub orphan_lines: usize,
}

impl ReassemblyStats {
    /// Sum of the four exclusive line classes.
    ///
    /// Always equals [`total_lines`](Self::total_lines).
    pub fn lines_accounted(&self) -> usize {
        self.valid_messages + self.misattributed_headers + self.continuation_lines + self.orphan_lines
    }

    fn record(&mut self, class: LineClass) {
        self.total_lines += 1;
        if class.has_timestamp() {
            self.valid_timestamps += 1;
        }
        match class {
            LineClass::Header { ignorable } => {
                self.valid_messages += 1;
                if ignorable.is_some() {
                    self.ignored_messages += 1;
                }
            }
            LineClass::MisattributedHeader => self.misattributed_headers += 1,
            LineClass::Continuation => self.continuation_lines += 1,
            LineClass::Orphan => self.orphan_lines += 1,
        }
    }
}

/// The result of reassembling one chat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reassembly {
    /// Line tallies.
    pub stats: ReassemblyStats,

    /// One stream per sender, in order of first appearance.
    pub senders: Vec<SenderStream>,
}

impl Reassembly {
    /// Looks up a sender's stream by its sanitized name.
    pub fn sender(&self, name: &str) -> Option<&SenderStream> {
        self.senders.iter().find(|s| s.name == name)
    }

    /// Sender names in order of first appearance.
    pub fn sender_names(&self) -> impl Iterator<Item = &str> {
        self.senders.iter().map(|s| s.name.as_str())
    }

    /// Returns `true` if no sender was discovered.
    pub fn is_empty(&self) -> bool {
        self.senders.is_empty()
    }
}

/// Single-pass reassembly state for one chat.
///
/// Holds the counters, the sender-to-stream map and the continuation
/// state. Feed it raw lines (terminators included) in file order, then
/// call [`finish`](Self::finish).
///
/// # Example
///
/// ```rust
/// use chatstats::reassembly::{LineClass, ReassemblySession};
///
/// let mut session = ReassemblySession::default();
/// session.feed_line("12/08/2023, 14:05 - Alice: Hello\n");
/// assert_eq!(session.feed_line("  still Alice\n"), LineClass::Continuation);
///
/// let result = session.finish();
/// assert_eq!(result.senders[0].text, "Hello\n  still Alice\n");
/// ```
#[derive(Debug, Default)]
pub struct ReassemblySession {
    config: ReassemblyConfig,
    stats: ReassemblyStats,
    senders: Vec<SenderStream>,
    index: HashMap<String, usize>,
    active: Option<usize>,
}

impl ReassemblySession {
    /// Creates an empty session.
    pub fn new(config: ReassemblyConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Name of the sender that continuation lines currently attach to.
    pub fn active_sender(&self) -> Option<&str> {
        self.active.map(|idx| self.senders[idx].name.as_str())
    }

    /// Tallies so far.
    pub fn stats(&self) -> &ReassemblyStats {
        &self.stats
    }

    /// Classifies one raw line and routes its text.
    pub fn feed_line(&mut self, line: &str) -> LineClass {
        let class = self.route(line);
        self.stats.record(class);
        class
    }

    fn route(&mut self, line: &str) -> LineClass {
        let Some(timestamp) = validate_timestamp(line) else {
            return match self.active {
                Some(idx) => {
                    self.senders[idx].push_continuation(line);
                    LineClass::Continuation
                }
                None => LineClass::Orphan,
            };
        };

        let Some((sender, message)) = split_sender_and_message(&line[TIMESTAMP_WIDTH..]) else {
            trace!(line = line.trim_end(), "timestamped line without a sender");
            self.active = None;
            return LineClass::MisattributedHeader;
        };

        let idx = self.sender_index(sender);
        self.active = Some(idx);

        let ignorable = classify_ignorable(message);
        let stream = &mut self.senders[idx];
        match ignorable {
            Some(_) if self.config.suppress_ignorable => stream.push_ignored(),
            Some(_) => {
                stream.push_message(message, timestamp);
                stream.ignored_count += 1;
            }
            None => stream.push_message(message, timestamp),
        }

        LineClass::Header { ignorable }
    }

    fn sender_index(&mut self, sender: String) -> usize {
        if let Some(&idx) = self.index.get(&sender) {
            return idx;
        }

        debug!(sender = %sender, "new sender");
        let idx = self.senders.len();
        self.senders.push(SenderStream::new(sender.clone()));
        self.index.insert(sender, idx);
        idx
    }

    /// Ends the session and hands over the streams and tallies.
    pub fn finish(self) -> Reassembly {
        Reassembly {
            stats: self.stats,
            senders: self.senders,
        }
    }
}
