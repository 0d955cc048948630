use std::cmp::Reverse;
use std::collections::HashMap;

use regex::Regex;

use super::normalize;
use crate::error::Result;

#[derive(Debug, Clone)]
pub struct PhraseEntry {
    pub key: String,
    pub value: String,
    pattern: Regex,
}

impl PhraseEntry {
    fn new(key: String, value: String) -> Result<Self> {
        // normalized text is single-space separated, so words are the
        // whitespace-delimited tokens
        let pattern = Regex::new(&format!(r"(?:^|\s){}(?:\s|$)", regex::escape(&key)))?;
        Ok(PhraseEntry { key, value, pattern })
    }

    /// True when the key occurs in `norm` as whole whitespace-delimited words.
    pub fn matches_word(&self, norm: &str) -> bool {
        self.pattern.is_match(norm)
    }

    pub fn is_multi_word(&self) -> bool {
        self.key.contains(' ')
    }

    pub fn matches_substring(&self, norm: &str) -> bool {
        norm.contains(self.key.as_str())
    }
}

/// Normalized phrase -> translation table for one target language.
///
/// Entries keep declaration order. `longest_first` walks them by descending
/// key length in characters, equal lengths in declaration order.
#[derive(Debug, Clone, Default)]
pub struct PhraseDictionary {
    entries: Vec<PhraseEntry>,
    index: HashMap<String, usize>,
    by_length: Vec<usize>,
}

impl PhraseDictionary {
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut entries: Vec<PhraseEntry> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for (raw_key, value) in pairs {
            let key = normalize::normalize(raw_key.as_ref());
            if key.is_empty() {
                log::warn!("skipping phrase with empty key: {:?}", raw_key.as_ref());
                continue;
            }

            let value = value.into();
            match index.get(&key) {
                Some(&i) => {
                    log::debug!("phrase '{key}' redefined");
                    entries[i].value = value;
                }
                None => {
                    index.insert(key.clone(), entries.len());
                    entries.push(PhraseEntry::new(key, value)?);
                }
            }
        }

        let mut by_length: Vec<usize> = (0..entries.len()).collect();
        by_length.sort_by_key(|&i| Reverse(entries[i].key.chars().count()));

        Ok(PhraseDictionary {
            entries,
            index,
            by_length,
        })
    }

    pub fn get(&self, norm: &str) -> Option<&PhraseEntry> {
        self.index.get(norm).map(|&i| &self.entries[i])
    }

    pub fn translate_word(&self, word: &str) -> Option<&str> {
        self.get(word).map(|e| e.value.as_str())
    }

    pub fn longest_first(&self) -> impl Iterator<Item = &PhraseEntry> {
        self.by_length.iter().map(|&i| &self.entries[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &PhraseEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
