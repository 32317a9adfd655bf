//! Prompt-side formatting for the next planned email.
//!
//! Pure string construction, no side effects. The suggestion sentence is
//! what the conversation layer shows or injects when steering the model
//! toward the next undrafted entry; the prompt block wraps it with drafting
//! instructions for a full generation request.

use super::model::PlannedEmail;

/// Produce the human-readable suggestion sentence for a planned email.
///
/// Deterministic; embeds the description, date, and phase verbatim.
pub fn format_next_email_suggestion(next_email: &PlannedEmail) -> String {
    format!(
        "The next planned email is \"{}\" ({} phase), scheduled for {}.",
        next_email.description, next_email.phase, next_email.date
    )
}

/// Build the prompt block asking the model to draft the next planned email.
///
/// Contains the suggestion sentence from [`format_next_email_suggestion`]
/// verbatim, followed by drafting instructions. Deterministic for a given
/// entry.
pub fn next_email_prompt(next_email: &PlannedEmail) -> String {
    let mut prompt = String::with_capacity(512);

    prompt.push_str(&format_next_email_suggestion(next_email));
    prompt.push_str("\n\n");
    prompt.push_str("Draft this email now. Requirements:\n");
    prompt.push_str(&format!(
        "- Stay on the planned topic: {}.\n",
        next_email.description
    ));
    prompt.push_str(&format!(
        "- Match the tone of the {} phase of the campaign.\n",
        next_email.phase
    ));
    prompt.push_str(&format!(
        "- The send date is {}; reference timing only where it helps.\n",
        next_email.date
    ));
    prompt.push_str("- Provide a subject line and body, nothing else.\n");

    prompt
}
