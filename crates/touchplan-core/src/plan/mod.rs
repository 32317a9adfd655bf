//! Touchplan handling: text parsing, progress tracking, matching, prompts.

pub mod matcher;
pub mod model;
pub mod parser;
pub mod progress;
pub mod suggest;

pub use matcher::match_message_to_email;
pub use model::{PlanProgress, PlanState, PlannedEmail};
pub use parser::parse_plan_emails;
pub use progress::{find_next_email, plan_progress};
pub use suggest::{format_next_email_suggestion, next_email_prompt};
