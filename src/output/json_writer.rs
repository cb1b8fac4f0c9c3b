//! JSON summary writer.

use std::path::Path;

use serde::Serialize;

use crate::analysis::{ChatAnalysis, SenderAnalysis};
use crate::error::Result;
use crate::reassembly::ReassemblyStats;

use super::text::write_text;

/// Everything `summary.json` contains.
///
/// # Format
/// ```json
/// {
///   "chat": "family",
///   "stats": { "total_lines": 120, "valid_messages": 97, ... },
///   "analysis": { "sender_count": 3, "top_words": [...], ... },
///   "senders": [ { "name": "Alice", "word_count": 310, ... } ]
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ChatSummary<'a> {
    pub chat: &'a str,
    pub stats: &'a ReassemblyStats,
    pub analysis: &'a ChatAnalysis,
    pub senders: &'a [SenderAnalysis],
}

/// Writes the summary as pretty-printed JSON.
pub fn write_json(path: &Path, summary: &ChatSummary<'_>) -> Result<()> {
    let json = to_json(summary)?;
    write_text(path, &json)
}

/// Converts the summary to a pretty-printed JSON string.
pub fn to_json(summary: &ChatSummary<'_>) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}
