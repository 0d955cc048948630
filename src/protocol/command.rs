#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Ping,
    LanguagesList,
    ExamplesList,
    PhrasesList,
    Translate,
    Analyze,
    SignList,
    SignLookup,
    SignAlphabet,
    SignSpell,
    TtsHealth,
    TtsSpeak,
    HistoryList,
    HistoryClear,
    Unknown,
}

impl From<&str> for Command {
    fn from(s: &str) -> Self {
        match s {
            "ping" => Command::Ping,
            "languages.list" => Command::LanguagesList,
            "examples.list" => Command::ExamplesList,
            "phrases.list" => Command::PhrasesList,
            "translate" => Command::Translate,
            "analyze" => Command::Analyze,
            "sign.list" => Command::SignList,
            "sign.lookup" => Command::SignLookup,
            "sign.alphabet" => Command::SignAlphabet,
            "sign.spell" => Command::SignSpell,
            "tts.health" => Command::TtsHealth,
            "tts.speak" => Command::TtsSpeak,
            "history.list" => Command::HistoryList,
            "history.clear" => Command::HistoryClear,
            _ => Command::Unknown,
        }
    }
}
