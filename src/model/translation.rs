use serde::{Deserialize, Serialize};

use super::language::Language;

/// Which tier of the phrasebook produced the output.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Phrase,
    Words,
    Passthrough,
}

/// How the phrase tier decides that a dictionary key occurs in the input.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    WordBoundary,
    Substring,
}

impl Default for MatchMode {
    fn default() -> Self {
        MatchMode::WordBoundary
    }
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct TranslationResult {
    pub language: Language,
    pub text: String,
    pub normalized: String,
    pub matched: MatchKind,

    /// Dictionary key that matched in the exact or phrase tier.
    pub phrase: Option<String>,
}
