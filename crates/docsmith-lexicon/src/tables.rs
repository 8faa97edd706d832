//! Static lookup tables shared by the naming and grammar helpers.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Acronyms keyed by their lower-case spelling
pub(crate) static ACRONYMS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    [("xml", "XML"), ("html", "HTML"), ("json", "JSON"), ("uri", "URI"), ("url", "URL")]
        .into_iter()
        .collect()
});

pub(crate) static VOWELS: Lazy<HashSet<char>> =
    Lazy::new(|| ['a', 'e', 'i', 'o', 'u'].into_iter().collect());

// `y` counts as a consonant.
pub(crate) static CONSONANTS: Lazy<HashSet<char>> = Lazy::new(|| {
    "bcdfghjklmnpqrstvwxyz".chars().collect()
});

/// Capital letters whose spoken name starts with a vowel sound (em, en, es)
pub(crate) static ACRONYM_VOWELS: Lazy<HashSet<char>> =
    Lazy::new(|| ['M', 'N', 'S'].into_iter().collect());

#[inline]
pub(crate) fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

#[inline]
pub(crate) fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(&c)
}
