//! Input discovery and output locations.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ChatstatsError, Result};

/// Directory used for a sender whose sanitized name is empty.
pub const UNNAMED_SENDER_DIR: &str = "_unnamed";

/// Subdirectory of a chat's output that holds per-sender files.
pub const SENDERS_DIR: &str = "senders";

/// Longest sender directory name in bytes, leaving room for a `_N` suffix
/// under the usual 255-byte file name limit.
pub const MAX_SENDER_DIR_BYTES: usize = 200;

/// Creates `path` and its parents if missing.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| ChatstatsError::output(path, e))
}

/// Name of a chat's output directory: the input file name without extension.
///
/// # Example
///
/// ```rust
/// use std::path::Path;
/// use chatstats::paths::chat_stem;
///
/// assert_eq!(chat_stem(Path::new("exports/Family Chat.txt")).unwrap(), "Family Chat");
/// assert!(chat_stem(Path::new("/")).is_err());
/// ```
pub fn chat_stem(input: &Path) -> Result<String> {
    input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ChatstatsError::invalid_path(input, "has no file name"))
}

/// Directory holding one sender's files under a chat's output directory.
///
/// Sender names are already free of path-hostile characters, except that
/// they may be empty, consist of dots only, or be arbitrarily long. Long
/// names are cut to [`MAX_SENDER_DIR_BYTES`] on a char boundary.
pub fn sender_dir(chat_root: &Path, sender: &str) -> PathBuf {
    let trimmed = truncate_bytes(sender.trim(), MAX_SENDER_DIR_BYTES).trim_end();
    let name = if trimmed.is_empty() || trimmed.chars().all(|c| c == '.') {
        UNNAMED_SENDER_DIR
    } else {
        trimmed
    };
    chat_root.join(SENDERS_DIR).join(name)
}

fn truncate_bytes(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Expands the given paths into the list of transcripts to process.
///
/// Files are taken as given. Directories contribute their `*.txt` files
/// (not recursive), sorted by name. Missing paths are an error.
pub fn collect_inputs<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<PathBuf>> {
    let mut inputs = Vec::new();

    for path in paths {
        let path = path.as_ref();
        if path.is_dir() {
            let entries = fs::read_dir(path).map_err(|e| ChatstatsError::input(path, e))?;
            let mut found = Vec::new();
            for entry in entries {
                let entry = entry.map_err(|e| ChatstatsError::input(path, e))?;
                let file = entry.path();
                let is_txt = file
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
                if is_txt && file.is_file() {
                    found.push(file);
                }
            }
            found.sort();
            inputs.extend(found);
        } else if path.is_file() {
            inputs.push(path.to_path_buf());
        } else {
            return Err(ChatstatsError::invalid_path(path, "does not exist"));
        }
    }

    Ok(inputs)
}
