//! Chapter publication rules: word-count derivation and the
//! `published_at` state machine.
//!
//! A chapter is `draft`, `scheduled`, or `published`. `published_at` is
//! non-null exactly while the chapter is in its current published period:
//! entering `published` stamps it, leaving `published` clears it, and
//! staying `published` never touches it.

use crate::types::Timestamp;

/// Count whitespace-delimited tokens in trimmed content.
///
/// Empty or all-whitespace content counts as zero words.
pub fn word_count(content: &str) -> i32 {
    content.split_whitespace().count() as i32
}

/// Resolve the `published_at` value for a chapter whose status is moving
/// from `was_published` to `is_published`.
///
/// Callers that receive no status in a partial update pass the current
/// publication state for both arguments, which leaves the timestamp
/// untouched.
pub fn resolve_published_at(
    was_published: bool,
    is_published: bool,
    current: Option<Timestamp>,
    now: Timestamp,
) -> Option<Timestamp> {
    match (was_published, is_published) {
        // First transition into published stamps the clock.
        (false, true) => Some(now),
        // Leaving published clears the stamp.
        (true, false) | (false, false) => None,
        // Staying published keeps the original stamp.
        (true, true) => current,
    }
}
