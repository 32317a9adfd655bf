//! Text helpers shared by the parser and the message matcher.

/// Lower-case a string and collapse every run of non-alphanumeric characters
/// into a single hyphen, trimming hyphens from both ends.
///
/// `"Nov 4"` becomes `"nov-4"`; `"Intro email to donors!"` becomes
/// `"intro-email-to-donors"`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

/// Split a description into lower-cased "significant" words: whitespace
/// tokens with surrounding punctuation trimmed, keeping only those longer
/// than 4 characters. Short connective words carry no signal for matching.
pub fn significant_words(description: &str) -> Vec<String> {
    description
        .split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|word| word.len() > 4)
        .collect()
}
