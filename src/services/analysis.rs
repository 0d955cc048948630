use serde::Serialize;

use crate::error::{CoreError, Result};

const SENTENCE_END: [char; 3] = ['.', '!', '?'];

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct TextAnalysis {
    pub text: String,
    pub words: usize,
    pub characters: usize,
    pub sentences: usize,
}

/// Rejects blank input and reports simple counts for the trimmed text.
pub fn analyze(text: &str) -> Result<TextAnalysis> {
    let trimmed = require_text(text)?;

    let sentences = trimmed
        .split(|c: char| SENTENCE_END.contains(&c))
        .filter(|s| !s.trim().is_empty())
        .count();

    Ok(TextAnalysis {
        text: trimmed.to_string(),
        words: trimmed.split_whitespace().count(),
        characters: trimmed.chars().count(),
        sentences,
    })
}

pub fn require_text(text: &str) -> Result<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CoreError::EmptyInput);
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_words_chars_sentences() {
        let a = analyze("  Hello, how are you? I am hungry.  ").unwrap();
        assert_eq!(a.text, "Hello, how are you? I am hungry.");
        assert_eq!(a.words, 7);
        assert_eq!(a.characters, 32);
        assert_eq!(a.sentences, 2);
    }

    #[test]
    fn repeated_terminators_are_one_break() {
        let a = analyze("Wait!!! Really?!").unwrap();
        assert_eq!(a.sentences, 2);
    }

    #[test]
    fn text_without_terminator_is_one_sentence() {
        assert_eq!(analyze("thank you").unwrap().sentences, 1);
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(analyze("நன்றி").unwrap().characters, 5);
    }

    #[test]
    fn rejects_blank_input() {
        assert!(matches!(analyze(""), Err(CoreError::EmptyInput)));
        assert!(matches!(analyze(" \t\n "), Err(CoreError::EmptyInput)));
    }
}
