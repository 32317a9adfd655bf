//! Derived progress views over a parsed calendar.
//!
//! Generation progress is owned by the caller as a growing list of generated
//! entry ids; nothing here stores or mutates state. Both helpers take a
//! snapshot of the calendar plus that list and compute a view.

use std::collections::HashSet;

use super::model::{PlanProgress, PlanState, PlannedEmail};

/// Return the first calendar entry (in stored order) whose id is absent from
/// `generated_ids`, or `None` once every entry has been generated.
///
/// `generated_ids` needs no particular order and may contain duplicates or
/// ids from stale parses; only membership matters.
pub fn find_next_email<'a>(
    plan_emails: &'a [PlannedEmail],
    generated_ids: &[String],
) -> Option<&'a PlannedEmail> {
    plan_emails
        .iter()
        .find(|email| !generated_ids.iter().any(|id| *id == email.id))
}

/// Summarize generation progress: how many entries are generated and where
/// that puts the plan in `NotStarted -> InProgress -> Complete`.
///
/// Duplicate ids in `generated_ids` count once. An empty calendar reports
/// `NotStarted` with zero totals.
pub fn plan_progress(plan_emails: &[PlannedEmail], generated_ids: &[String]) -> PlanProgress {
    let generated_set: HashSet<&str> = generated_ids.iter().map(String::as_str).collect();
    let generated = plan_emails
        .iter()
        .filter(|email| generated_set.contains(email.id.as_str()))
        .count();
    let total = plan_emails.len();

    let state = if generated == 0 {
        PlanState::NotStarted
    } else if generated < total {
        PlanState::InProgress
    } else {
        PlanState::Complete
    };

    PlanProgress {
        total,
        generated,
        state,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, index: usize) -> PlannedEmail {
        PlannedEmail {
            id: id.to_owned(),
            date: "Nov 4".to_owned(),
            phase: "Warm-up".to_owned(),
            description: "Test entry".to_owned(),
            index,
        }
    }

    fn three_entries() -> Vec<PlannedEmail> {
        vec![entry("a", 0), entry("b", 1), entry("c", 2)]
    }

    #[test]
    fn next_email_skips_generated_in_scan_order() {
        let emails = three_entries();
        let generated = vec!["a".to_owned()];
        let next = find_next_email(&emails, &generated).expect("plan not exhausted");
        assert_eq!(next.id, "b", "first ungenerated entry wins, not a later one");
    }

    #[test]
    fn next_email_with_nothing_generated_is_first_entry() {
        let emails = three_entries();
        let next = find_next_email(&emails, &[]).expect("plan not exhausted");
        assert_eq!(next.id, "a");
    }

    #[test]
    fn next_email_exhausted_returns_none() {
        let emails = three_entries();
        // Out of order and duplicated: only membership matters.
        let generated = vec![
            "c".to_owned(),
            "a".to_owned(),
            "b".to_owned(),
            "a".to_owned(),
        ];
        assert!(find_next_email(&emails, &generated).is_none());
    }

    #[test]
    fn next_email_on_empty_calendar_is_none() {
        assert!(find_next_email(&[], &[]).is_none());
    }

    #[test]
    fn progress_not_started() {
        let progress = plan_progress(&three_entries(), &[]);
        assert_eq!(progress.total, 3);
        assert_eq!(progress.generated, 0);
        assert_eq!(progress.state, PlanState::NotStarted);
    }

    #[test]
    fn progress_in_progress_counts_duplicates_once() {
        let generated = vec!["a".to_owned(), "a".to_owned(), "b".to_owned()];
        let progress = plan_progress(&three_entries(), &generated);
        assert_eq!(progress.generated, 2);
        assert_eq!(progress.state, PlanState::InProgress);
    }

    #[test]
    fn progress_complete() {
        let generated = vec!["b".to_owned(), "c".to_owned(), "a".to_owned()];
        let progress = plan_progress(&three_entries(), &generated);
        assert_eq!(progress.generated, 3);
        assert_eq!(progress.state, PlanState::Complete);
    }

    #[test]
    fn progress_ignores_unknown_ids() {
        let generated = vec!["zz".to_owned()];
        let progress = plan_progress(&three_entries(), &generated);
        assert_eq!(progress.generated, 0);
        assert_eq!(progress.state, PlanState::NotStarted);
    }

    #[test]
    fn progress_empty_calendar_is_not_started() {
        let progress = plan_progress(&[], &[]);
        assert_eq!(progress.total, 0);
        assert_eq!(progress.state, PlanState::NotStarted);
    }
}
