//! Line-level parsing primitives for chat transcripts.
//!
//! A transcript header line has a fixed 20-character prefix followed by
//! `Sender: message`:
//!
//! ```text
//! 12/08/2023, 14:05 - Alice: Hello there
//! └──── 20 chars ────┘└──────────────────
//! ```
//!
//! This module holds the three leaf checks the reassembly state machine
//! composes:
//! - [`timestamp`] - validates the fixed-width prefix and parses it
//! - [`sender`] - splits the remainder into sender and message body
//! - [`ignorable`] - recognises system placeholders (media, deletions, invites)

pub mod ignorable;
pub mod sender;
pub mod timestamp;

// Re-export commonly used items
pub use ignorable::{IgnorableKind, classify_ignorable, is_ignorable};
pub use sender::{is_system_header, sanitize_sender, split_sender_and_message};
pub use timestamp::{
    TIMESTAMP_WIDTH, format_timestamp, has_timestamp_shape, parse_timestamp, validate_timestamp,
};
