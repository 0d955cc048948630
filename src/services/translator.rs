use crate::model::language::Language;
use crate::model::translation::{MatchKind, MatchMode, TranslationResult};
use crate::services::phrasebook::{matcher, normalize, Phrasebook};

/// Exact phrase, then longest contained phrase, then word-by-word.
/// Never fails: unmatched input is passed through untouched.
#[derive(Debug, Clone)]
pub struct Translator {
    phrasebook: Phrasebook,
    mode: MatchMode,
}

impl Translator {
    pub fn new(phrasebook: Phrasebook, mode: MatchMode) -> Self {
        Translator { phrasebook, mode }
    }

    pub fn phrasebook(&self) -> &Phrasebook {
        &self.phrasebook
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn translate(&self, text: &str, lang: Language) -> TranslationResult {
        self.translate_with(text, lang, self.mode)
    }

    pub fn translate_with(&self, text: &str, lang: Language, mode: MatchMode) -> TranslationResult {
        let norm = normalize::normalize(text);

        let result = |out: String, matched: MatchKind, phrase: Option<String>| TranslationResult {
            language: lang,
            text: out,
            normalized: norm.clone(),
            matched,
            phrase,
        };

        let dict = match self.phrasebook.dictionary(lang) {
            Some(d) => d,
            None => return result(text.to_string(), MatchKind::Passthrough, None),
        };

        if let Some(e) = matcher::exact(dict, &norm) {
            return result(e.value.clone(), MatchKind::Exact, Some(e.key.clone()));
        }

        if let Some(e) = matcher::longest_phrase(dict, &norm, mode) {
            log::debug!("phrase '{}' matched in '{norm}'", e.key);
            return result(e.value.clone(), MatchKind::Phrase, Some(e.key.clone()));
        }

        match matcher::word_by_word(dict, &norm) {
            Some(mapped) => result(mapped, MatchKind::Words, None),
            None => result(text.to_string(), MatchKind::Passthrough, None),
        }
    }
}
