//! Recognition of system-generated message bodies.
//!
//! Exports replace attachments, deleted messages and group invites with
//! fixed placeholder text. These bodies still count as messages from their
//! sender but are kept out of the text and timestamp streams.

use serde::{Deserialize, Serialize};

/// Placeholder written in place of an attachment.
pub const MEDIA_OMITTED: &str = "<Media omitted>";

/// Placeholder written in place of a deleted message.
pub const MESSAGE_DELETED: &str = "This message was deleted";

/// Invite-link preamble as exported on most devices.
pub const INVITE_PREAMBLE: &str = "Open this link to join my WhatsApp Group: ";

/// Invite-link preamble preceded by a U+200E LEFT-TO-RIGHT MARK.
pub const INVITE_PREAMBLE_MARKED: &str = "\u{200E}Open this link to join my WhatsApp Group: ";

/// Kind of system placeholder a message body was recognised as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnorableKind {
    /// An omitted attachment.
    Media,
    /// A deleted message.
    Deleted,
    /// A group invite link.
    InviteLink,
}

impl std::fmt::Display for IgnorableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IgnorableKind::Media => write!(f, "media"),
            IgnorableKind::Deleted => write!(f, "deleted"),
            IgnorableKind::InviteLink => write!(f, "invite link"),
        }
    }
}

/// Classifies a message body, returning `None` for ordinary messages.
///
/// Placeholders are matched exactly; the trailing line terminator (`\n` or
/// `\r\n`) is not part of the comparison, so a final line without a newline
/// is still recognised. Invite links are matched by prefix.
pub fn classify_ignorable(message: &str) -> Option<IgnorableKind> {
    let body = message.trim_end_matches(['\n', '\r']);

    if body == MEDIA_OMITTED {
        Some(IgnorableKind::Media)
    } else if body == MESSAGE_DELETED {
        Some(IgnorableKind::Deleted)
    } else if body.starts_with(INVITE_PREAMBLE) || body.starts_with(INVITE_PREAMBLE_MARKED) {
        Some(IgnorableKind::InviteLink)
    } else {
        None
    }
}

/// Returns `true` if `message` is a system placeholder.
///
/// # Example
///
/// ```rust
/// use chatstats::parsing::is_ignorable;
///
/// assert!(is_ignorable("<Media omitted>\n"));
/// assert!(!is_ignorable("Hello\n"));
/// ```
pub fn is_ignorable(message: &str) -> bool {
    classify_ignorable(message).is_some()
}
