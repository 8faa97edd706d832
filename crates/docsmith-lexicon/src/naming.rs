//! Identifier segmentation and acronym handling

use crate::tables::ACRONYMS;

/// Normalize a word against the acronym table
///
/// The lookup is case-insensitive and exact; unmatched input is returned
/// unchanged.
#[must_use]
pub fn check_acronym(value: &str) -> &str {
    ACRONYMS
        .get(value.to_lowercase().as_str())
        .copied()
        .unwrap_or(value)
}

/// Check whether `name` begins with `word` followed by a word boundary
///
/// The prefix comparison ignores case, `name` must be strictly longer than
/// `word`, and the character right after the prefix must be an upper-case
/// letter or `_` (`PascalCase` / `snake_case` boundary).
///
/// ```
/// use docsmith_lexicon::starts_with_word;
///
/// assert!(starts_with_word("GetValue", "get"));
/// assert!(starts_with_word("is_empty", "is"));
/// assert!(!starts_with_word("Getter", "get"));
/// assert!(!starts_with_word("Get", "get"));
/// ```
#[must_use]
pub fn starts_with_word(name: &str, word: &str) -> bool {
    if name.is_empty() {
        return false;
    }

    let mut chars = name.chars();
    for expected in word.chars() {
        match chars.next() {
            Some(c) if c.to_lowercase().eq(expected.to_lowercase()) => {}
            _ => return false,
        }
    }

    matches!(chars.next(), Some(c) if c.is_uppercase() || c == '_')
}

/// Split an identifier into lower-case words
///
/// # Rules
/// - A leading `@` (verbatim identifier marker) is skipped
/// - `_` flushes the current word
/// - A lower → upper transition starts a new word; runs of capitals
///   (`XMLParser`) therefore stay together
/// - Every word passes through [`check_acronym`]
///
/// When `capitalize` is set, only the very first character that is appended
/// outside a case transition is upper-cased.
#[must_use]
pub fn split(name: &str, capitalize: bool) -> Vec<String> {
    let body = name.strip_prefix('@').unwrap_or(name);

    let mut words = Vec::new();
    let mut current = String::with_capacity(body.len());
    let mut capitalize = capitalize;
    let mut last_was_lower = false;

    for c in body.chars() {
        if c == '_' {
            flush(&mut words, &mut current);
        } else if c.is_uppercase() && last_was_lower {
            flush(&mut words, &mut current);
            current.extend(c.to_lowercase());
        } else {
            if capitalize {
                current.extend(c.to_uppercase());
            } else {
                current.extend(c.to_lowercase());
            }
            capitalize = false;
        }

        last_was_lower = c.is_lowercase();
    }

    flush(&mut words, &mut current);
    words
}

fn flush(words: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        words.push(check_acronym(current).to_string());
        current.clear();
    }
}
