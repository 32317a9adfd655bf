//! Campaign touchplan extraction and progress tracking.
//!
//! Extracts an ordered calendar of planned marketing emails from free-form
//! plan text produced by a generative model, and provides progress-tracking,
//! message-matching, and prompt-formatting helpers over that calendar.
//!
//! Every operation is a pure function over its inputs: parsing never fails
//! (unrecognized structure degrades to an empty calendar), absence is
//! expressed as `Option`, and nothing is cached between calls.

pub mod plan;
pub mod text;

pub use plan::{
    PlanProgress, PlanState, PlannedEmail, find_next_email, format_next_email_suggestion,
    match_message_to_email, next_email_prompt, parse_plan_emails, plan_progress,
};
