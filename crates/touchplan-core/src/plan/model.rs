//! Data types for the extracted campaign calendar.
//!
//! These types are the output contract of [`parse_plan_emails`]: an ordered,
//! immutable sequence of planned emails. They carry `serde` derives because
//! the conversation layer that consumes them serializes entries alongside
//! its record of generated ids.
//!
//! [`parse_plan_emails`]: crate::plan::parse_plan_emails

use serde::{Deserialize, Serialize};

/// One entry in the extracted campaign calendar.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlannedEmail {
    /// Stable identifier derived from `date` and the opening of
    /// `description`. Deterministic but NOT guaranteed unique: two emails on
    /// the same date with near-identical description openings collide.
    /// Downstream progress tracking relies on stability, not uniqueness.
    pub id: String,
    /// The literal date-like token as it appeared in the text (e.g.
    /// "Nov 4"). Never parsed or normalized into a calendar type.
    pub date: String,
    /// Name of the campaign phase this email belongs to (e.g. "Warm-up").
    /// Phases are string labels, not first-class entities.
    pub phase: String,
    /// Free-text description of the email's purpose.
    pub description: String,
    /// Zero-based position in document scan order, shared across all phases
    /// (never reset per phase).
    pub index: usize,
}

/// Generation state derived from a calendar plus a set of generated ids.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PlanState {
    /// No entry has generated content yet (including the empty calendar).
    NotStarted,
    /// Some but not all entries have generated content.
    InProgress,
    /// Every entry has generated content.
    Complete,
}

/// Snapshot summary of generation progress over a calendar.
///
/// Computed by [`plan_progress`], never stored: the authoritative state is
/// the caller's generated-id list, and this is a derived view over it.
///
/// [`plan_progress`]: crate::plan::plan_progress
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanProgress {
    /// Total number of planned emails in the calendar.
    pub total: usize,
    /// How many of them appear in the generated-id list.
    pub generated: usize,
    /// Classification of the counts above.
    pub state: PlanState,
}
