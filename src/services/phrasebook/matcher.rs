use super::dictionary::{PhraseDictionary, PhraseEntry};
use crate::model::translation::MatchMode;

pub fn exact<'a>(dict: &'a PhraseDictionary, norm: &str) -> Option<&'a PhraseEntry> {
    dict.get(norm)
}

/// First key, longest first, that occurs in `norm`.
///
/// In word-boundary mode only multi-word keys take part; single words are
/// left to `word_by_word` so the rest of the sentence survives.
pub fn longest_phrase<'a>(
    dict: &'a PhraseDictionary,
    norm: &str,
    mode: MatchMode,
) -> Option<&'a PhraseEntry> {
    dict.longest_first().find(|e| match mode {
        MatchMode::WordBoundary => e.is_multi_word() && e.matches_word(norm),
        MatchMode::Substring => e.matches_substring(norm),
    })
}

/// Replaces every word that has a translation. `None` when the mapped text is
/// identical to `norm`.
pub fn word_by_word(dict: &PhraseDictionary, norm: &str) -> Option<String> {
    let mapped = norm
        .split(' ')
        .map(|w| dict.translate_word(w).unwrap_or(w))
        .collect::<Vec<_>>()
        .join(" ");

    if mapped != norm {
        Some(mapped)
    } else {
        None
    }
}
