//! Best-effort matching of free-form messages to calendar entries.
//!
//! The conversation layer often needs to know which planned email a message
//! is discussing without being handed an id. Exact correlation is impossible
//! against model-generated prose, so this is a two-tier heuristic: a date
//! substring is precise when present, and keyword overlap catches messages
//! that paraphrase a description without naming its date.

use tracing::trace;

use crate::text::significant_words;

use super::model::PlannedEmail;

/// Minimum number of significant description words that must appear in the
/// message for a keyword-overlap match. One shared word is too easy to hit
/// by accident; two is where matches start meaning something.
const KEYWORD_MATCH_THRESHOLD: usize = 2;

/// Try to identify which calendar entry a message is talking about,
/// returning the entry's id.
///
/// Rules run as full passes over the calendar, in priority order:
///
/// 1. Date substring: the first entry (scan order) whose lower-cased date
///    token appears verbatim in the lower-cased message wins outright.
/// 2. Keyword overlap, only if no date matched anywhere: the first entry
///    with at least [`KEYWORD_MATCH_THRESHOLD`] significant description
///    words contained in the message wins.
///
/// Returns `None` when neither rule matches any entry.
pub fn match_message_to_email<'a>(
    message: &str,
    plan_emails: &'a [PlannedEmail],
) -> Option<&'a str> {
    let message_lower = message.to_lowercase();

    for email in plan_emails {
        if message_lower.contains(&email.date.to_lowercase()) {
            trace!(id = %email.id, date = %email.date, "matched message by date token");
            return Some(&email.id);
        }
    }

    for email in plan_emails {
        let hits = significant_words(&email.description)
            .iter()
            .filter(|word| message_lower.contains(word.as_str()))
            .count();
        if hits >= KEYWORD_MATCH_THRESHOLD {
            trace!(id = %email.id, hits, "matched message by keyword overlap");
            return Some(&email.id);
        }
    }

    None
}
