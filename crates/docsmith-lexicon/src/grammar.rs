//! Word inflection heuristics

use crate::tables::{is_consonant, is_vowel, ACRONYM_VOWELS};

/// Form the past tense of a present-tense verb
///
/// - `…ed` words are returned unchanged
/// - `…e` words get `d`
/// - consonant–vowel–consonant endings double the final consonant, except
///   for `w`, `x`, `y` and `l` (US spelling)
/// - everything else gets `ed`
#[must_use]
pub fn past_tense(present: &str) -> String {
    if present.is_empty() || present.ends_with("ed") {
        return present.to_string();
    }

    if present.ends_with('e') {
        return format!("{present}d");
    }

    // Reversed: [last, second to last, third to last]
    let tail: Vec<char> = present.chars().rev().take(3).collect();
    if let [last, middle, first] = tail[..] {
        if is_consonant(first) && is_vowel(middle) && is_consonant(last) {
            return if matches!(last, 'w' | 'x' | 'y' | 'l') {
                format!("{present}ed")
            } else {
                format!("{present}{last}ed")
            };
        }
    }

    format!("{present}ed")
}

/// Estimate the number of syllables in a word
///
/// Each run of vowels counts once; a trailing `e`, `es` or `ed` (but not
/// `le`) is treated as silent. The result is not clamped; a word whose only
/// vowel is the silent ending (`"the"`) counts as zero.
#[must_use]
pub fn syllable_count(word: &str) -> i32 {
    if word.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut last_was_vowel = false;

    for c in word.chars() {
        let vowel = c.to_lowercase().all(is_vowel);
        if vowel && !last_was_vowel {
            count += 1;
        }
        last_was_vowel = vowel;
    }

    let silent_ending = word.ends_with('e') || word.ends_with("es") || word.ends_with("ed");
    if silent_ending && !word.ends_with("le") {
        count -= 1;
    }

    count
}

/// Pick the indefinite article for a word
///
/// Acronyms (no lower-case letters) take `an` only when their first letter's
/// name starts with a vowel sound (`M`, `N`, `S`). Other words take `an` when
/// they start with a vowel, except a literal lower-case `u`.
#[must_use]
pub fn a_or_an(word: &str) -> &'static str {
    let Some(first) = word.chars().next() else {
        return "a";
    };

    let acronym = word.chars().all(|c| !c.is_alphabetic() || c.is_uppercase());
    if acronym {
        return if ACRONYM_VOWELS.contains(&first) { "an" } else { "a" };
    }

    if first != 'u' && first.to_lowercase().all(is_vowel) {
        "an"
    } else {
        "a"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn past_tense_regular() {
        assert_eq!(past_tense("jump"), "jumped");
        assert_eq!(past_tense("create"), "created");
        assert_eq!(past_tense("closed"), "closed");
    }

    #[test]
    fn past_tense_doubles_final_consonant() {
        assert_eq!(past_tense("stop"), "stopped");
        assert_eq!(past_tense("plan"), "planned");
    }

    #[test]
    fn past_tense_excluded_consonants() {
        assert_eq!(past_tense("play"), "played");
        assert_eq!(past_tense("show"), "showed");
        assert_eq!(past_tense("fix"), "fixed");
        assert_eq!(past_tense("cancel"), "canceled");
    }

    #[test]
    fn past_tense_short_and_empty() {
        assert_eq!(past_tense(""), "");
        assert_eq!(past_tense("go"), "goed");
    }

    #[test]
    fn syllables() {
        assert_eq!(syllable_count("value"), 1);
        assert_eq!(syllable_count("table"), 2);
        assert_eq!(syllable_count("documentation"), 5);
        assert_eq!(syllable_count("QUEUE"), 1);
        assert_eq!(syllable_count(""), 0);
    }

    #[test]
    fn silent_ending_can_cancel_the_only_vowel() {
        assert_eq!(syllable_count("the"), 0);
        assert_eq!(syllable_count("bed"), 0);
        assert_eq!(syllable_count("THE"), 1);
    }

    #[test]
    fn article_for_words() {
        assert_eq!(a_or_an("apple"), "an");
        assert_eq!(a_or_an("user"), "a");
        assert_eq!(a_or_an("value"), "a");
        assert_eq!(a_or_an("item"), "an");
        assert_eq!(a_or_an(""), "a");
    }

    #[test]
    fn article_for_acronyms() {
        assert_eq!(a_or_an("SQL"), "an");
        assert_eq!(a_or_an("URL"), "a");
        assert_eq!(a_or_an("MSDN"), "an");
        assert_eq!(a_or_an("XML"), "a");
        assert_eq!(a_or_an("I/O"), "a");
    }
}
