use serde_json::{json, Value};

use crate::app::App;
use crate::error::CoreError;
use crate::model::language::Language;
use crate::model::translation::MatchMode;
use crate::services::phrasebook::builtin::EXAMPLE_PHRASES;
use crate::services::{analysis, pipeline, sign};

mod command;
use command::Command;

fn get_cmd(req: &Value) -> &str {
    req.get("cmd").and_then(|v| v.as_str()).unwrap_or("")
}

fn get_id(req: &Value) -> Value {
    req.get("id").cloned().unwrap_or(Value::Null)
}

fn get_payload<'a>(req: &'a Value) -> &'a Value {
    static EMPTY: Value = Value::Null;
    req.get("payload").unwrap_or(&EMPTY)
}

fn get_str<'a>(payload: &'a Value, key: &str) -> &'a str {
    payload.get(key).and_then(|v| v.as_str()).unwrap_or("")
}

fn ok(id: Value, payload: Value) -> String {
    json!({
        "id": id,
        "status": "ok",
        "payload": payload
    })
    .to_string()
}

fn err(id: Value, message: impl Into<String>) -> String {
    json!({
        "id": id,
        "status": "error",
        "message": message.into()
    })
    .to_string()
}

/// `payload.lang`, or the configured default when absent.
fn get_lang(app: &App, payload: &Value) -> Result<Language, CoreError> {
    match get_str(payload, "lang") {
        "" => Ok(app.config.translation.default_language),
        code => code.parse(),
    }
}

fn get_mode(app: &App, payload: &Value) -> Result<MatchMode, String> {
    match payload.get("mode") {
        None | Some(Value::Null) => Ok(app.translator.mode()),
        Some(v) => serde_json::from_value(v.clone()).map_err(|_| format!("invalid payload.mode: {v}")),
    }
}

pub fn handle(app: &App, input: &str) -> String {
    let req: Value = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(_) => {
            return json!({
                "status": "error",
                "message": "invalid json"
            })
            .to_string();
        }
    };

    let id = get_id(&req);
    let cmd_str = get_cmd(&req);
    let payload = get_payload(&req);

    log::debug!("cmd '{cmd_str}'");

    match Command::from(cmd_str) {
        Command::Ping => ok(id, json!({ "message": "signvoice-core alive" })),

        Command::LanguagesList => {
            let languages: Vec<Value> = Language::ALL
                .iter()
                .map(|l| json!({ "code": l.code(), "name": l.display_name() }))
                .collect();
            ok(
                id,
                json!({
                    "languages": languages,
                    "default": app.config.translation.default_language
                }),
            )
        }

        Command::ExamplesList => ok(id, json!({ "examples": EXAMPLE_PHRASES })),

        Command::PhrasesList => {
            let lang = match get_lang(app, payload) {
                Ok(l) => l,
                Err(e) => return err(id, e.to_string()),
            };
            let phrases: Vec<Value> = app
                .translator
                .phrasebook()
                .dictionary(lang)
                .map(|d| {
                    d.iter()
                        .map(|e| json!({ "phrase": e.key, "translation": e.value }))
                        .collect()
                })
                .unwrap_or_default();
            ok(id, json!({ "lang": lang, "phrases": phrases }))
        }

        Command::Translate => {
            let text = get_str(payload, "text");
            if let Err(e) = analysis::require_text(text) {
                return err(id, e.to_string());
            }
            let lang = match get_lang(app, payload) {
                Ok(l) => l,
                Err(e) => return err(id, e.to_string()),
            };
            let mode = match get_mode(app, payload) {
                Ok(m) => m,
                Err(e) => return err(id, e),
            };

            let result = app.translator.translate_with(text, lang, mode);
            app.remember(text, &result);
            ok(id, json!({ "translation": result }))
        }

        Command::Analyze => match analysis::analyze(get_str(payload, "text")) {
            Ok(a) => ok(id, json!({ "analysis": a })),
            Err(e) => err(id, e.to_string()),
        },

        Command::SignList => ok(id, json!({ "phrases": sign::SIGN_PHRASES })),

        Command::SignLookup => {
            let text = get_str(payload, "text");
            match sign::lookup(text) {
                Some(p) => ok(id, json!({ "phrase": p })),
                None => ok(
                    id,
                    json!({ "phrase": Value::Null, "fingerspelling": sign::fingerspell(text) }),
                ),
            }
        }

        Command::SignAlphabet => ok(id, json!({ "alphabet": sign::alphabet() })),

        Command::SignSpell => ok(
            id,
            json!({ "letters": sign::fingerspell(get_str(payload, "text")) }),
        ),

        Command::TtsHealth => match app.tts() {
            Ok(client) => ok(id, json!({ "health": client.health() })),
            Err(e) => err(id, e.to_string()),
        },

        Command::TtsSpeak => {
            let output_path = get_str(payload, "output_path");
            if output_path.is_empty() {
                return err(id, "payload.output_path is required");
            }
            let lang = match get_lang(app, payload) {
                Ok(l) => l,
                Err(e) => return err(id, e.to_string()),
            };

            let req = pipeline::SpeakRequest {
                text: get_str(payload, "text"),
                lang,
                output_path: std::path::Path::new(output_path),
            };
            match pipeline::speak(app, req) {
                Ok(report) => ok(id, json!({ "report": report })),
                Err(e) => err(id, e.to_string()),
            }
        }

        Command::HistoryList => {
            let mut entries = app.history.load();
            if let Some(limit) = payload.get("limit").and_then(|v| v.as_u64()) {
                entries.truncate(limit as usize);
            }
            ok(id, json!({ "entries": entries }))
        }

        Command::HistoryClear => match app.history.clear() {
            Ok(()) => ok(id, json!({})),
            Err(e) => err(id, e.to_string()),
        },

        Command::Unknown => err(id, "unknown command"),
    }
}
