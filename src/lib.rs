//! # Chatstats
//!
//! A Rust library for reassembling exported chat transcripts into
//! per-sender message streams and computing lexical and temporal
//! statistics over them.
//!
//! ## Overview
//!
//! A transcript is a text file where each message starts with a header
//! such as `12/08/2023, 14:05 - Alice: Hello`, and long messages spill onto
//! continuation lines with no header. Chatstats classifies every line,
//! reattaches continuations to the right sender, drops system notices and
//! media placeholders, and then computes:
//!
//! - word counts and top words per sender (stopwords removed)
//! - average words per message
//! - a 366-day activity table per sender and per chat
//! - chat-wide rankings of senders
//!
//! ## Quick Start
//!
//! ```rust
//! use chatstats::prelude::*;
//!
//! let chat = "\
//! 12/08/2023, 14:05 - Alice: Hello there
//! this continues
//! 12/08/2023, 14:06 - Bob: <Media omitted>
//! ";
//!
//! let result = reassemble_str(chat, ReassemblyConfig::default());
//! assert_eq!(result.stats.valid_messages, 2);
//! assert_eq!(result.sender("Alice").unwrap().text, "Hello there\nthis continues\n");
//!
//! let config = AnalysisConfig::default();
//! let senders: Vec<_> = result
//!     .senders
//!     .iter()
//!     .map(|s| SenderAnalysis::from_stream(s, &config))
//!     .collect();
//! let chat = ChatAnalysis::from_senders(&senders, &config);
//! assert_eq!(chat.top_by_messages[0].name, "Alice");
//! ```
//!
//! ## Module Structure
//!
//! - [`parsing`] — Header grammar: timestamps, senders, placeholders
//! - [`reassembly`] — The line-classification state machine
//!   - [`ReassemblySession`](reassembly::ReassemblySession), [`ReassemblyStats`](reassembly::ReassemblyStats)
//!   - [`reassemble_file`](reassembly::reassemble_file), [`reassemble_str`](reassembly::reassemble_str)
//! - [`analysis`] — Tokenization, word and day histograms, rankings
//! - [`output`] — Text reports, JSON summary, CSV table, PNG charts
//! - [`paths`] — Input discovery and output locations
//! - [`pipeline`] — [`process_chat`](pipeline::process_chat), [`process_all`](pipeline::process_all)
//! - [`config`] — Configuration types
//! - [`error`] — Unified error types ([`ChatstatsError`], [`Result`])
//! - [`prelude`] — Convenient re-exports

pub mod analysis;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod parsing;
pub mod paths;
pub mod pipeline;
pub mod reassembly;

// Re-export the main types at the crate root for convenience
pub use error::{ChatstatsError, Result};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use chatstats::prelude::*;
/// ```
pub mod prelude {
    // Error types
    pub use crate::error::{ChatstatsError, Result};

    // Configuration
    pub use crate::config::{AnalysisConfig, OutputConfig, PipelineConfig, ReassemblyConfig};

    // Reassembly
    pub use crate::reassembly::{
        LineClass, Reassembly, ReassemblySession, ReassemblyStats, SenderStream, reassemble_file,
        reassemble_reader, reassemble_str,
    };

    // Analysis
    pub use crate::analysis::{
        ChatAnalysis, DayHistogram, SenderAnalysis, WordCount, WordHistogram, filter_tokens,
    };

    // Pipeline
    pub use crate::pipeline::{BatchOutcome, ChatReport, process_all, process_chat};
}
