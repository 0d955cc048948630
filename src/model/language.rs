use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ta,
    Hi,
    Ml,
}

impl Language {
    pub const ALL: [Language; 4] = [Language::En, Language::Ta, Language::Hi, Language::Ml];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ta => "ta",
            Language::Hi => "hi",
            Language::Ml => "ml",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ta => "Tamil",
            Language::Hi => "Hindi",
            Language::Ml => "Malayalam",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Ta
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "ta" => Ok(Language::Ta),
            "hi" => Ok(Language::Hi),
            "ml" => Ok(Language::Ml),
            _ => Err(CoreError::UnsupportedLanguage(s.to_string())),
        }
    }
}
