//! Message reassembly: turning raw transcript lines into per-sender streams.
//!
//! Exports soft-wrap long messages over several lines. Only the first line
//! carries the `DD/MM/YYYY, HH:MM - Sender: ` header; the following lines
//! belong to the same message. [`ReassemblySession`] scans the lines once,
//! keeping track of which sender continuation lines attach to:
//!
//! | Line | Timestamp | Sender | Result |
//! |------|-----------|--------|--------|
//! | header | valid | valid | new message, sender becomes active |
//! | system notice | valid | rejected | no active sender |
//! | continuation | invalid | - | appended to the active sender |
//! | orphan | invalid | - | dropped (no active sender) |
//!
//! # Example
//!
//! ```rust
//! use chatstats::reassembly::reassemble_str;
//!
//! let chat = "\
//! 12/08/2023, 14:05 - Alice: Hello there
//! this line wraps
//! 12/08/2023, 14:06 - Bob: <Media omitted>
//! ";
//!
//! let result = reassemble_str(chat, Default::default());
//! assert_eq!(result.stats.total_lines, 3);
//! assert_eq!(result.sender("Alice").unwrap().text, "Hello there\nthis line wraps\n");
//! assert_eq!(result.sender("Bob").unwrap().text, "");
//! ```
//!
//! Reading from a file is the only fallible step: an unreadable or
//! non-UTF-8 transcript aborts that chat with an I/O error.

mod session;
mod stream;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::config::ReassemblyConfig;
use crate::error::{ChatstatsError, Result};

pub use session::{LineClass, Reassembly, ReassemblySession, ReassemblyStats};
pub use stream::{SenderStream, parse_timestamp_stream, render_timestamp_stream};

/// Reassembles a transcript held in memory.
///
/// Lines are split after each `\n`, so the result is identical to reading
/// the same text from a file.
pub fn reassemble_str(content: &str, config: ReassemblyConfig) -> Reassembly {
    let mut session = ReassemblySession::new(config);
    for line in content.split_inclusive('\n') {
        session.feed_line(line);
    }
    session.finish()
}

/// Reassembles a transcript from any buffered reader.
///
/// Line terminators are preserved in the streams.
pub fn reassemble_reader<R: BufRead>(mut reader: R, config: ReassemblyConfig) -> io::Result<Reassembly> {
    let mut session = ReassemblySession::new(config);
    let mut line = String::with_capacity(4096);

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        session.feed_line(&line);
    }

    Ok(session.finish())
}

/// Opens and reassembles a transcript file.
pub fn reassemble_file(path: &Path, config: ReassemblyConfig) -> Result<Reassembly> {
    let file = File::open(path).map_err(|e| ChatstatsError::input(path, e))?;
    let reader = BufReader::with_capacity(config.buffer_size, file);
    let result = reassemble_reader(reader, config).map_err(|e| ChatstatsError::input(path, e))?;

    debug!(
        path = %path.display(),
        lines = result.stats.total_lines,
        senders = result.senders.len(),
        "reassembled chat"
    );
    Ok(result)
}
