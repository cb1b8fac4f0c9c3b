//! Configuration types for reassembly, analysis and output.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies. The binary fills them from its
//! command-line flags.
//!
//! - [`ReassemblyConfig`] - how transcripts are read and reassembled
//! - [`AnalysisConfig`] - ranking sizes and rounding
//! - [`OutputConfig`] - which artifacts are written
//! - [`PipelineConfig`] - all of the above for one run
//!
//! # Example
//!
//! ```rust
//! use chatstats::config::{AnalysisConfig, PipelineConfig};
//!
//! let config = PipelineConfig::new()
//!     .with_analysis(AnalysisConfig::new().with_top_n(10));
//!
//! assert_eq!(config.analysis.top_n, 10);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{ChatstatsError, Result};

/// Largest supported number of decimal digits for rounded averages.
pub const MAX_DECIMALS: u32 = 6;

/// Configuration for transcript reassembly.
///
/// # Example
///
/// ```rust
/// use chatstats::config::ReassemblyConfig;
///
/// let config = ReassemblyConfig::new()
///     .with_buffer_size(256 * 1024)
///     .with_suppress_ignorable(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReassemblyConfig {
    /// Read buffer size (default: 64KB)
    pub buffer_size: usize,

    /// Keep media/deletion/invite placeholders out of the streams (default: true)
    pub suppress_ignorable: bool,
}

impl Default for ReassemblyConfig {
    fn default() -> Self {
        Self {
            buffer_size: 64 * 1024, // 64KB
            suppress_ignorable: true,
        }
    }
}

impl ReassemblyConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the read buffer size.
    #[must_use]
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size;
        self
    }

    /// Sets whether placeholder bodies are kept out of the streams.
    #[must_use]
    pub fn with_suppress_ignorable(mut self, suppress: bool) -> Self {
        self.suppress_ignorable = suppress;
        self
    }
}

/// Configuration for per-sender and chat-wide statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Size of every top-N ranking (default: 5)
    pub top_n: usize,

    /// Decimal digits kept in averages (default: 2)
    pub decimals: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_n: 5,
            decimals: 2,
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ranking size.
    #[must_use]
    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }

    /// Sets the number of decimal digits kept in averages.
    #[must_use]
    pub fn with_decimals(mut self, decimals: u32) -> Self {
        self.decimals = decimals;
        self
    }

    /// Checks that the values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(ChatstatsError::invalid_config("top_n", "must be at least 1"));
        }
        if self.decimals > MAX_DECIMALS {
            return Err(ChatstatsError::invalid_config(
                "decimals",
                format!("must be at most {MAX_DECIMALS}"),
            ));
        }
        Ok(())
    }
}

/// Controls which artifacts are written for each chat.
///
/// Text streams and reports are always written; the remaining artifacts
/// also depend on the matching cargo features.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Render bar-chart PNGs (feature `charts`)
    pub charts: bool,

    /// Write `summary.json` (feature `json-output`)
    pub json: bool,

    /// Write `senders.csv` (feature `csv-output`)
    pub csv: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            charts: true,
            json: true,
            csv: true,
        }
    }
}

impl OutputConfig {
    /// Creates a new configuration with every artifact enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that only writes text artifacts.
    pub fn text_only() -> Self {
        Self {
            charts: false,
            json: false,
            csv: false,
        }
    }

    #[must_use]
    pub fn with_charts(mut self, enabled: bool) -> Self {
        self.charts = enabled;
        self
    }

    #[must_use]
    pub fn with_json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    #[must_use]
    pub fn with_csv(mut self, enabled: bool) -> Self {
        self.csv = enabled;
        self
    }
}

/// Full configuration for processing chat files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub reassembly: ReassemblyConfig,
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

impl PipelineConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_reassembly(mut self, reassembly: ReassemblyConfig) -> Self {
        self.reassembly = reassembly;
        self
    }

    #[must_use]
    pub fn with_analysis(mut self, analysis: AnalysisConfig) -> Self {
        self.analysis = analysis;
        self
    }

    #[must_use]
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    /// Checks every nested configuration.
    pub fn validate(&self) -> Result<()> {
        if self.reassembly.buffer_size == 0 {
            return Err(ChatstatsError::invalid_config(
                "buffer_size",
                "must be greater than zero",
            ));
        }
        self.analysis.validate()
    }
}
