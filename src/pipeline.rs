//! End-to-end processing of chat transcripts.
//!
//! Each chat goes through reassembly, per-sender analysis, chat analysis
//! and finally artifact writing. Artifacts are written into a staging
//! directory inside the output root and moved to `<output>/<chat stem>/`
//! only once all of them exist, so a failed chat never leaves a partial
//! directory behind.
//!
//! # Example
//!
//! ```rust,no_run
//! # fn main() -> chatstats::Result<()> {
//! use std::path::Path;
//! use chatstats::config::PipelineConfig;
//! use chatstats::pipeline::process_chat;
//!
//! let report = process_chat(
//!     Path::new("exports/family.txt"),
//!     Path::new("output"),
//!     &PipelineConfig::default(),
//! )?;
//! println!("{} messages", report.stats.valid_messages);
//! # Ok(())
//! # }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tracing::{debug, info, warn};

use crate::analysis::{ChatAnalysis, SenderAnalysis};
use crate::config::{OutputConfig, PipelineConfig};
use crate::error::{ChatstatsError, Result};
use crate::output::{self, SUMMARY_TEXT_FILE};
use crate::paths::{chat_stem, ensure_dir, sender_dir};
use crate::reassembly::{Reassembly, ReassemblyStats, reassemble_file};

/// Result of processing one chat.
#[derive(Debug, Clone)]
pub struct ChatReport {
    /// The transcript that was read.
    pub input: PathBuf,

    /// Final output directory of the chat.
    pub output_dir: PathBuf,

    pub stats: ReassemblyStats,

    /// Per-sender statistics in first-seen order.
    pub senders: Vec<SenderAnalysis>,

    pub analysis: ChatAnalysis,
}

/// Result of processing several chats.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub reports: Vec<ChatReport>,
    pub failures: Vec<(PathBuf, ChatstatsError)>,
}

impl BatchOutcome {
    /// Returns `true` if every chat was processed.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Processes a single transcript and writes its artifacts.
///
/// An existing output directory for the same chat is replaced.
pub fn process_chat(input: &Path, output_root: &Path, config: &PipelineConfig) -> Result<ChatReport> {
    config.validate()?;
    let stem = chat_stem(input)?;
    process_chat_as(input, output_root, &stem, config)
}

/// Processes a transcript into `<output_root>/<stem>/`.
fn process_chat_as(
    input: &Path,
    output_root: &Path,
    stem: &str,
    config: &PipelineConfig,
) -> Result<ChatReport> {
    let reassembly = reassemble_file(input, config.reassembly)?;
    let senders: Vec<SenderAnalysis> = reassembly
        .senders
        .iter()
        .map(|s| SenderAnalysis::from_stream(s, &config.analysis))
        .collect();
    let analysis = ChatAnalysis::from_senders(&senders, &config.analysis);

    ensure_dir(output_root)?;
    let staging = TempDir::with_prefix_in(".chatstats-", output_root)
        .map_err(|e| ChatstatsError::output(output_root, e))?;
    write_artifacts(
        staging.path(),
        stem,
        &reassembly,
        &senders,
        &analysis,
        config.output,
    )?;

    let output_dir = output_root.join(stem);
    if output_dir.exists() {
        debug!(dir = %output_dir.display(), "replacing previous output");
        fs::remove_dir_all(&output_dir).map_err(|e| ChatstatsError::output(&output_dir, e))?;
    }
    fs::rename(staging.path(), &output_dir).map_err(|e| ChatstatsError::output(&output_dir, e))?;

    info!(
        chat = %stem,
        lines = reassembly.stats.total_lines,
        messages = reassembly.stats.valid_messages,
        senders = senders.len(),
        "chat processed"
    );

    Ok(ChatReport {
        input: input.to_path_buf(),
        output_dir,
        stats: reassembly.stats,
        senders,
        analysis,
    })
}

/// Processes transcripts one after another.
///
/// A failing chat is logged and recorded; the remaining chats still run.
/// Inputs sharing a file stem (`a/chat.txt`, `b/chat.txt`) are written to
/// `chat/`, `chat_2/`, ... in input order.
pub fn process_all<P: AsRef<Path>>(inputs: &[P], output_root: &Path, config: &PipelineConfig) -> BatchOutcome {
    let mut outcome = BatchOutcome::default();
    let mut used = HashSet::new();

    for input in inputs {
        let input = input.as_ref();
        let result = config
            .validate()
            .and_then(|()| chat_stem(input))
            .and_then(|stem| {
                let stem = unique_stem(stem, &mut used);
                process_chat_as(input, output_root, &stem, config)
            });
        match result {
            Ok(report) => outcome.reports.push(report),
            Err(e) => {
                warn!(chat = %input.display(), error = %e, "chat failed");
                outcome.failures.push((input.to_path_buf(), e));
            }
        }
    }

    outcome
}

#[cfg_attr(
    not(any(feature = "charts", feature = "json-output", feature = "csv-output")),
    allow(unused_variables)
)]
fn write_artifacts(
    dir: &Path,
    chat_name: &str,
    reassembly: &Reassembly,
    senders: &[SenderAnalysis],
    analysis: &ChatAnalysis,
    output: OutputConfig,
) -> Result<()> {
    let mut used = HashSet::new();
    for (stream, sender) in reassembly.senders.iter().zip(senders) {
        let sender_path = unique_dir(sender_dir(dir, &stream.name), &mut used);
        ensure_dir(&sender_path)?;
        output::write_sender_texts(&sender_path, stream, sender)?;

        #[cfg(feature = "charts")]
        if output.charts {
            output::write_activity_chart(&sender_path.join(output::CHART_FILE), &sender.days)?;
        }
    }

    output::write_text(
        &dir.join(SUMMARY_TEXT_FILE),
        &output::chat_summary(chat_name, &reassembly.stats, analysis),
    )?;

    #[cfg(feature = "json-output")]
    if output.json {
        let summary = output::ChatSummary {
            chat: chat_name,
            stats: &reassembly.stats,
            analysis,
            senders,
        };
        output::write_json(&dir.join(output::SUMMARY_JSON_FILE), &summary)?;
    }

    #[cfg(feature = "csv-output")]
    if output.csv {
        output::write_csv(&dir.join(output::SENDERS_CSV_FILE), senders)?;
    }

    #[cfg(feature = "charts")]
    if output.charts {
        output::write_activity_chart(&dir.join(output::CHART_FILE), &analysis.days)?;
    }

    Ok(())
}

/// Appends `_2`, `_3`, ... when two chats in one batch share a stem.
fn unique_stem(stem: String, used: &mut HashSet<String>) -> String {
    if used.insert(stem.clone()) {
        return stem;
    }
    let mut n = 2;
    loop {
        let candidate = format!("{stem}_{n}");
        if used.insert(candidate.clone()) {
            return candidate;
        }
        n += 1;
    }
}

/// Appends `_2`, `_3`, ... when two senders map onto the same directory.
fn unique_dir(candidate: PathBuf, used: &mut HashSet<PathBuf>) -> PathBuf {
    if used.insert(candidate.clone()) {
        return candidate;
    }
    let base = candidate.as_os_str().to_os_string();
    let mut n = 2;
    loop {
        let mut name = base.clone();
        name.push(format!("_{n}"));
        let path = PathBuf::from(name);
        if used.insert(path.clone()) {
            return path;
        }
        n += 1;
    }
}
