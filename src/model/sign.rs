use serde::Serialize;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct SignPhrase {
    pub id: u32,
    pub text: &'static str,
    pub video: &'static str,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct AlphabetSign {
    pub letter: char,
    pub image: String,
}
