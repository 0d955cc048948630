const QUOTES: [char; 4] = ['\u{2018}', '\u{2019}', '`', '\''];
const PUNCTUATION: [char; 10] = ['.', ',', '!', '?', ';', ':', '(', ')', '[', ']'];

fn is_stripped(ch: char) -> bool {
    PUNCTUATION.contains(&ch) || ch == '"'
}

/// Lowercases, unifies apostrophes, turns punctuation into spaces and
/// collapses whitespace.
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();

    let mut s = String::with_capacity(lower.len());
    for ch in lower.chars() {
        if QUOTES.contains(&ch) {
            s.push('\'');
        } else if is_stripped(ch) {
            s.push(' ');
        } else {
            s.push(ch);
        }
    }

    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
