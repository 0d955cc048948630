use crate::config::Config;
use crate::error::Result;
use crate::model::translation::TranslationResult;
use crate::services::history::HistoryStore;
use crate::services::phrasebook::Phrasebook;
use crate::services::translator::Translator;
use crate::services::tts::TtsClient;

/// Everything a request handler needs, built once at startup.
pub struct App {
    pub config: Config,
    pub translator: Translator,
    pub history: HistoryStore,
}

impl App {
    pub fn from_config(config: Config) -> Result<Self> {
        let phrasebook = match &config.translation.dictionary_path {
            Some(path) => match Phrasebook::load(path) {
                Ok(book) => book,
                Err(e) => {
                    log::error!("failed to load {}: {e}; using builtin phrases", path.display());
                    Phrasebook::builtin()?
                }
            },
            None => Phrasebook::builtin()?,
        };

        let translator = Translator::new(phrasebook, config.translation.match_mode);
        let history = HistoryStore::new(config.history.path.clone(), config.history.max_entries);

        Ok(App {
            config,
            translator,
            history,
        })
    }

    pub fn tts(&self) -> Result<TtsClient> {
        TtsClient::new(&self.config.tts)
    }

    /// History is best effort: a failed write never fails the request.
    pub fn remember(&self, input: &str, result: &TranslationResult) {
        if !self.config.history.enabled {
            return;
        }
        if let Err(e) = self.history.record(input, result) {
            log::warn!("failed to record history: {e}");
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::model::language::Language;
    use std::path::Path;

    pub(crate) fn test_app(dir: &Path, server_url: &str) -> App {
        let mut config = Config::default();
        config.tts.server_url = server_url.to_string();
        config.tts.max_retries = 1;
        config.tts.timeout_secs = 5;
        config.history.path = dir.join("history.json");
        App::from_config(config).unwrap()
    }

    #[test]
    fn bad_dictionary_falls_back_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.translation.dictionary_path = Some(dir.path().join("missing.json"));
        config.history.path = dir.path().join("history.json");

        let app = App::from_config(config).unwrap();
        assert_eq!(app.translator.translate("hello", Language::Ta).text, "வணக்கம்");
    }

    #[test]
    fn remember_respects_disabled_history() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path(), "http://127.0.0.1:9");
        app.config.history.enabled = false;

        let r = app.translator.translate("hello", Language::Hi);
        app.remember("hello", &r);
        assert!(app.history.load().is_empty());

        app.config.history.enabled = true;
        app.remember("hello", &r);
        assert_eq!(app.history.load().len(), 1);
    }
}
