pub mod builtin;
pub mod dictionary;
pub mod hash;
pub mod matcher;
pub mod normalize;

use std::collections::HashMap;
use std::path::Path;

use serde_json::Value;

use crate::error::{CoreError, Result};
use crate::model::language::Language;
use crate::services::encoding;
use dictionary::PhraseDictionary;

/// One phrase dictionary per target language, frozen after construction.
#[derive(Debug, Clone, Default)]
pub struct Phrasebook {
    dictionaries: HashMap<Language, PhraseDictionary>,
}

impl Phrasebook {
    pub fn builtin() -> Result<Self> {
        let mut dictionaries = HashMap::new();
        for lang in Language::ALL {
            dictionaries.insert(lang, PhraseDictionary::from_pairs(builtin::table(lang).iter().copied())?);
        }
        Ok(Phrasebook { dictionaries })
    }

    /// Builtin tables extended by a user dictionary file:
    /// `{ "ta": { "phrase": "translation", ... }, ... }`.
    pub fn load(path: &Path) -> Result<Self> {
        let decoded = encoding::decode_file(path)?;
        log::info!(
            "loading phrase dictionary {} ({})",
            path.display(),
            decoded.encoding
        );
        let text = decoded.text;
        let extra: Value = serde_json::from_str(&text)?;
        Self::with_overrides(&extra)
    }

    pub fn with_overrides(extra: &Value) -> Result<Self> {
        let root = extra
            .as_object()
            .ok_or_else(|| CoreError::Dictionary("top level must be an object".into()))?;

        let mut book = Self::builtin()?;

        for (code, table) in root {
            let lang: Language = code.parse()?;
            let table = table
                .as_object()
                .ok_or_else(|| CoreError::Dictionary(format!("'{code}' must be an object")))?;

            let mut pairs: Vec<(String, String)> = builtin::table(lang)
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect();

            for (phrase, value) in table {
                let value = value.as_str().ok_or_else(|| {
                    CoreError::Dictionary(format!("'{code}.{phrase}' must be a string"))
                })?;
                pairs.push((phrase.clone(), value.to_string()));
            }

            let dict = PhraseDictionary::from_pairs(pairs)?;
            log::info!("{} phrases for '{code}'", dict.len());
            book.dictionaries.insert(lang, dict);
        }

        Ok(book)
    }

    #[cfg(test)]
    pub fn with_dictionary(mut self, lang: Language, dict: PhraseDictionary) -> Self {
        self.dictionaries.insert(lang, dict);
        self
    }

    pub fn dictionary(&self, lang: Language) -> Option<&PhraseDictionary> {
        self.dictionaries.get(&lang)
    }
}
