//! Artifact writers.
//!
//! Text artifacts are always available; the rest follow cargo features:
//! - [`text`] - message streams, timestamp lists, lexical reports, chat summary
//! - [`write_json`] / [`to_json`] - `summary.json` - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - `senders.csv` with semicolon delimiter - requires `csv-output` feature
//! - [`write_activity_chart`] - 366-bar PNG - requires `charts` feature
//!
//! # Layout
//!
//! | File | Contents |
//! |------|----------|
//! | `senders/<name>/messages.txt` | Reassembled message stream |
//! | `senders/<name>/timestamps.txt` | One `YYYY-MM-DD HH:MM` per kept message |
//! | `senders/<name>/filtered.txt` | Stopword-filtered words |
//! | `senders/<name>/report.txt` | Lexical report |
//! | `senders/<name>/activity.png` | Messages per day of year |
//! | `summary.txt` / `summary.json` | Chat-wide statistics |
//! | `senders.csv` | One row per sender |
//! | `activity.png` | Chat-wide messages per day of year |

#[cfg(feature = "charts")]
mod chart;
#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
pub mod text;

#[cfg(feature = "charts")]
pub use chart::{render_activity, write_activity_chart};
#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{ChatSummary, to_json, write_json};
pub use text::{chat_summary, lexical_report, write_sender_texts, write_text};

pub const MESSAGES_FILE: &str = "messages.txt";
pub const TIMESTAMPS_FILE: &str = "timestamps.txt";
pub const FILTERED_FILE: &str = "filtered.txt";
pub const REPORT_FILE: &str = "report.txt";
pub const CHART_FILE: &str = "activity.png";
pub const SUMMARY_TEXT_FILE: &str = "summary.txt";
pub const SUMMARY_JSON_FILE: &str = "summary.json";
pub const SENDERS_CSV_FILE: &str = "senders.csv";
