//! Sender/message splitting for header lines.
//!
//! After the 20-character timestamp prefix a header reads `Sender: message`.
//! The sender ends at the first `:`; the message starts two characters after
//! it, which assumes exactly one space follows the colon. A header written
//! as `Alice:hello` therefore loses the `h`, and `Alice:  hello` keeps a
//! leading space. That offset is part of the export grammar and is kept.
//!
//! Some system lines look like `Sender: text` because a quoted group name
//! contains a colon, e.g. `Alice created group "Trip: 2024"`. Those are
//! rejected by [`is_system_header`].

/// Substrings that mark a candidate sender as a system notice.
const SYSTEM_HEADER_MARKERS: &[&str] = &[" created group \"", " changed the subject from \""];

/// Characters that cannot appear in a sender used as a file name.
const FORBIDDEN_NAME_CHARS: &[char] = &['\\', '/', '?', '*', '"', '<', '>', '|'];

/// Returns `true` if `candidate` is the head of a group-creation or
/// subject-change notice rather than a real sender name.
pub fn is_system_header(candidate: &str) -> bool {
    SYSTEM_HEADER_MARKERS
        .iter()
        .any(|marker| candidate.contains(marker))
}

/// Replaces filesystem-forbidden characters in a sender name with a space.
///
/// # Example
///
/// ```rust
/// use chatstats::parsing::sanitize_sender;
///
/// assert_eq!(sanitize_sender("AC/DC fan"), "AC DC fan");
/// assert_eq!(sanitize_sender("Alice"), "Alice");
/// ```
pub fn sanitize_sender(name: &str) -> String {
    name.replace(FORBIDDEN_NAME_CHARS, " ")
}

/// Splits the part of a header after the timestamp into sender and message.
///
/// Returns `None` when there is no `:` at all, or when the text before the
/// first `:` is a system notice. The returned sender is sanitized with
/// [`sanitize_sender`]; the message is borrowed from `remainder` and keeps
/// its line terminator.
///
/// # Example
///
/// ```rust
/// use chatstats::parsing::split_sender_and_message;
///
/// let (sender, message) = split_sender_and_message("Alice: Hello there\n").unwrap();
/// assert_eq!(sender, "Alice");
/// assert_eq!(message, "Hello there\n");
///
/// assert!(split_sender_and_message("Messages are end-to-end encrypted\n").is_none());
/// ```
pub fn split_sender_and_message(remainder: &str) -> Option<(String, &str)> {
    let colon = remainder.find(':')?;
    let candidate = &remainder[..colon];

    if is_system_header(candidate) {
        return None;
    }

    // Skip the colon and exactly one following character.
    let after_colon = &remainder[colon + 1..];
    let message = match after_colon.chars().next() {
        Some(c) => &after_colon[c.len_utf8()..],
        None => "",
    };

    Some((sanitize_sender(candidate), message))
}
