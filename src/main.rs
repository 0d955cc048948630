#![windows_subsystem = "windows"]
use std::io::{self, BufRead, Write};
use std::panic::{self, AssertUnwindSafe};

mod app;
mod config;
mod error;
mod model;
mod protocol;
mod services;

fn main() {
    // stdout carries protocol responses; logs go to stderr
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cfg = config::load_config();
    let app = match app::App::from_config(cfg) {
        Ok(a) => a,
        Err(e) => {
            log::error!("failed to start: {e}");
            std::process::exit(1);
        }
    };
    log::info!(
        "signvoice-core ready (default language '{}', speech server {})",
        app.config.translation.default_language,
        app.config.tts.server_url
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => continue,
        };

        if line.trim().is_empty() {
            continue;
        }

        let result = panic::catch_unwind(AssertUnwindSafe(|| protocol::handle(&app, &line)));

        let response = match result {
            Ok(resp) => resp,
            Err(_) => {
                log::error!("handler panicked on: {line}");
                serde_json::json!({
                    "status": "error",
                    "message": "internal core error"
                })
                .to_string()
            }
        };

        if writeln!(stdout, "{response}").is_err() {
            break;
        }

        let _ = stdout.flush();
    }
}
