//! Touchplan text parser.
//!
//! Extracts planned emails from free-form plan text via a two-level scan:
//! locate the touchplan calendar section, then walk its phase blocks, then
//! the dated email lines inside each block. The text comes from a generative
//! model and matches no fixed grammar, so extraction is strictly best-effort:
//! anything unrecognized contributes nothing, and the degenerate outcome is
//! an empty calendar, never an error.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::text::slugify;

use super::model::PlannedEmail;

/// Heading phrase that introduces the calendar section of a plan document.
const CALENDAR_HEADING: &str = "Phases, dates, and touchplan";

/// Captures the calendar section body: everything after the heading up to a
/// blank line followed by a capitalized line, or end of text.
static SECTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?s){CALENDAR_HEADING}(.*?)(?:\n\s*\n[A-Z]|\z)"))
        .expect("SECTION_RE should compile")
});

/// Matches a phase header line: `- <PhaseName> (<DateRange>)` with nothing
/// after the closing paren. Email lines carry a `:` there and never match.
static PHASE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*-[ \t]*([^(\n]+?)[ \t]*\(([^)\n]*)\)[ \t]*$")
        .expect("PHASE_RE should compile")
});

/// Matches a dated email line: `- <Month Day> (<Weekday>): <Description>`.
/// The description capture is greedy to end of line, so colons or parens
/// inside it do not cut the match short.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*-[ \t]*([A-Za-z]{3,9}\.?[ \t]+\d{1,2})[ \t]*\(([^)\n]*)\)[ \t]*:[ \t]*(.+)$")
        .expect("EMAIL_RE should compile")
});

/// How much of the description participates in the id slug.
const ID_SLUG_PREFIX_CHARS: usize = 30;

/// Extract the ordered calendar of planned emails from plan text.
///
/// `index` values are assigned in document scan order across all phases,
/// contiguous from 0. Re-parsing identical text yields an element-wise
/// identical calendar. A missing heading, an empty document, or structure
/// that matches nothing all yield an empty vec; this is a legitimate "no
/// plan detected" outcome, not a failure.
pub fn parse_plan_emails(plan_text: &str) -> Vec<PlannedEmail> {
    let section = match SECTION_RE.captures(plan_text) {
        Some(caps) => caps.get(1).map_or("", |m| m.as_str()),
        None => {
            debug!(heading = CALENDAR_HEADING, "no calendar section in plan text");
            return Vec::new();
        }
    };

    // Phase headers partition the section; each block runs from the end of
    // its header to the start of the next header (or end of section).
    let headers: Vec<(String, usize, usize)> = PHASE_RE
        .captures_iter(section)
        .map(|caps| {
            let whole = caps.get(0).expect("capture 0 always present");
            let name = caps[1].trim().to_owned();
            (name, whole.start(), whole.end())
        })
        .collect();

    let mut emails = Vec::new();
    for (i, (phase, _, body_start)) in headers.iter().enumerate() {
        let body_end = headers
            .get(i + 1)
            .map_or(section.len(), |(_, next_start, _)| *next_start);
        let body = &section[*body_start..body_end];

        for caps in EMAIL_RE.captures_iter(body) {
            let date = caps[1].trim().to_owned();
            let description = caps[3].trim().to_owned();
            let index = emails.len();
            let id = derive_id(&date, &description);
            trace!(%id, %date, phase = %phase, "extracted planned email");
            emails.push(PlannedEmail {
                id,
                date,
                phase: phase.clone(),
                description,
                index,
            });
        }
    }

    debug!(
        phases = headers.len(),
        emails = emails.len(),
        "parsed touchplan calendar"
    );
    emails
}

/// Derive the stable entry id: the hyphenated lower-case date token followed
/// by a slug of the opening of the description.
///
/// The id is a pure function of `date` and `description`. It is NOT unique
/// by construction: two entries on the same date whose descriptions share an
/// opening produce the same id. Downstream tracking depends only on
/// stability, so collisions are documented rather than deduplicated.
fn derive_id(date: &str, description: &str) -> String {
    let date_slug = slugify(date);
    let prefix: String = description.chars().take(ID_SLUG_PREFIX_CHARS).collect();
    let desc_slug = slugify(&prefix);
    if desc_slug.is_empty() {
        date_slug
    } else {
        format!("{date_slug}-{desc_slug}")
    }
}
