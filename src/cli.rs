//! Command-line interface definition using clap.
//!
//! [`Args`] only describes flags; [`Args::to_config`] turns them into the
//! library's [`PipelineConfig`].
//!
//! ```rust
//! use clap::Parser;
//! use chatstats::cli::Args;
//!
//! let args = Args::parse_from(["chatstats", "family.txt", "--top", "10"]);
//! assert_eq!(args.to_config().analysis.top_n, 10);
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::config::{AnalysisConfig, OutputConfig, PipelineConfig, ReassemblyConfig};

/// Reassemble exported chat transcripts and compute per-sender
/// word and activity statistics.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatstats")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatstats family.txt
    chatstats exports/ -o stats
    chatstats work.txt --top 10 --decimals 3
    chatstats chat.txt --no-charts --no-json")]
pub struct Args {
    /// Transcript files or directories of `*.txt` transcripts
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Output root; each chat gets its own subdirectory
    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,

    /// Size of every top-N ranking
    #[arg(long, value_name = "N", default_value_t = 5)]
    pub top: usize,

    /// Decimal digits kept in averages
    #[arg(long, value_name = "N", default_value_t = 2)]
    pub decimals: u32,

    /// Do not render activity charts
    #[arg(long)]
    pub no_charts: bool,

    /// Do not write summary.json
    #[arg(long)]
    pub no_json: bool,

    /// Do not write senders.csv
    #[arg(long)]
    pub no_csv: bool,

    /// Keep media/deleted/invite placeholders in message streams
    #[arg(long)]
    pub keep_ignorable: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Builds the pipeline configuration from the flags.
    pub fn to_config(&self) -> PipelineConfig {
        PipelineConfig::new()
            .with_reassembly(ReassemblyConfig::new().with_suppress_ignorable(!self.keep_ignorable))
            .with_analysis(
                AnalysisConfig::new()
                    .with_top_n(self.top)
                    .with_decimals(self.decimals),
            )
            .with_output(
                OutputConfig::new()
                    .with_charts(!self.no_charts)
                    .with_json(!self.no_json)
                    .with_csv(!self.no_csv),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["chatstats", "chat.txt"]).unwrap();
        assert_eq!(args.inputs, vec![PathBuf::from("chat.txt")]);
        assert_eq!(args.output, PathBuf::from("output"));
        assert_eq!(args.to_config(), PipelineConfig::default());
    }

    #[test]
    fn test_flags_map_to_config() {
        let args = Args::try_parse_from([
            "chatstats",
            "a.txt",
            "b.txt",
            "-o",
            "stats",
            "--top",
            "3",
            "--decimals",
            "1",
            "--no-charts",
            "--no-csv",
            "--keep-ignorable",
            "-v",
        ])
        .unwrap();
        let config = args.to_config();

        assert_eq!(args.inputs.len(), 2);
        assert_eq!(args.output, PathBuf::from("stats"));
        assert!(args.verbose);
        assert_eq!(config.analysis.top_n, 3);
        assert_eq!(config.analysis.decimals, 1);
        assert!(!config.output.charts);
        assert!(config.output.json);
        assert!(!config.output.csv);
        assert!(!config.reassembly.suppress_ignorable);
    }

    #[test]
    fn test_input_required() {
        assert!(Args::try_parse_from(["chatstats"]).is_err());
    }

    #[test]
    fn test_invalid_number_rejected() {
        assert!(Args::try_parse_from(["chatstats", "a.txt", "--top", "many"]).is_err());
    }
}
