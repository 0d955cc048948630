use crate::model::sign::{AlphabetSign, SignPhrase};

pub static SIGN_PHRASES: [SignPhrase; 8] = [
    SignPhrase { id: 1, text: "Good morning", video: "video/good-morning.mp4" },
    SignPhrase { id: 2, text: "Thank you", video: "video/thank-you.mp4" },
    SignPhrase { id: 3, text: "Hello", video: "video/hello.mp4" },
    SignPhrase { id: 4, text: "Can you help me", video: "video/can-you-help-me.mp4" },
    SignPhrase { id: 5, text: "I need help", video: "video/i-need-help.mp4" },
    SignPhrase { id: 6, text: "I love this", video: "video/i-love-this.mp4" },
    SignPhrase { id: 8, text: "I understand", video: "video/i-understand.mp4" },
    SignPhrase { id: 9, text: "Let's go", video: "video/lets-go.mp4" },
];

pub fn lookup(text: &str) -> Option<&'static SignPhrase> {
    let wanted = text.trim().to_lowercase();
    SIGN_PHRASES.iter().find(|p| p.text.to_lowercase() == wanted)
}

fn alphabet_sign(letter: char) -> AlphabetSign {
    AlphabetSign {
        letter,
        image: format!("alphabet/{letter}.jpg"),
    }
}

pub fn alphabet() -> Vec<AlphabetSign> {
    ('A'..='Z').map(alphabet_sign).collect()
}

/// Letter-by-letter signs for words that have no phrase video.
pub fn fingerspell(text: &str) -> Vec<AlphabetSign> {
    text.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| alphabet_sign(c.to_ascii_uppercase()))
        .collect()
}
