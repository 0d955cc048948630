use serde::{Deserialize, Serialize};

use super::language::Language;
use super::translation::MatchKind;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    #[serde(default)]
    pub id: String,

    pub language: Language,

    #[serde(default)]
    pub input: String,

    #[serde(default)]
    pub output: String,

    pub matched: MatchKind,

    /// Seconds since the Unix epoch.
    #[serde(default)]
    pub created_at: u64,
}
