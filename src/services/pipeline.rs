use crate::app::App;
use crate::error::Result;
use crate::model::language::Language;
use crate::model::translation::MatchKind;
use crate::services::{analysis, atomic};

use std::path::Path;

pub struct SpeakRequest<'a> {
    pub text: &'a str,
    pub lang: Language,
    pub output_path: &'a Path,
}

#[derive(Debug, serde::Serialize)]
pub struct SpeakReport {
    pub translated: String,
    pub matched: MatchKind,
    pub audio_path: String,
    pub bytes: usize,
    pub content_type: String,
    pub server_text: Option<String>,
}

/// Validate, translate, synthesize, save the audio, remember the translation.
pub fn speak(app: &App, req: SpeakRequest) -> Result<SpeakReport> {
    let text = analysis::require_text(req.text)?;

    let translation = app.translator.translate(text, req.lang);
    log::info!(
        "speaking {:?} translation in '{}' ({} chars)",
        translation.matched,
        req.lang,
        translation.text.chars().count()
    );

    let audio = app.tts()?.synthesize(&translation.text, req.lang)?;
    atomic::write_atomic(req.output_path, &audio.bytes)?;

    // only successful runs go to history
    app.remember(text, &translation);

    Ok(SpeakReport {
        translated: translation.text,
        matched: translation.matched,
        audio_path: req.output_path.to_string_lossy().to_string(),
        bytes: audio.bytes.len(),
        content_type: audio.content_type,
        server_text: audio.server_text,
    })
}
