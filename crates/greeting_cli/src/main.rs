//! CLI smoke entry point.
//!
//! # Responsibility
//! - Build a `Greeting` from arguments and print its text and JSON forms.
//! - Keep output deterministic for quick local sanity checks.
//!
//! Usage: `greeting_cli [ID] [CONTENT...]`
//!
//! Environment:
//! - `GREETING_LOG_DIR`: absolute directory; enables file logging when set.
//! - `GREETING_LOG_LEVEL`: log level, defaults to the build-mode default.

use greeting_core::{core_version, default_log_level, init_logging, Greeting};
use log::info;
use std::io::Write;
use std::process::ExitCode;

const DEFAULT_ID: i64 = 1;
const DEFAULT_CONTENT: &str = "Hello, World!";
const LOG_DIR_ENV: &str = "GREETING_LOG_DIR";
const LOG_LEVEL_ENV: &str = "GREETING_LOG_LEVEL";

fn main() -> ExitCode {
    setup_logging();
    run(
        std::env::args().skip(1),
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )
}

fn run(
    args: impl Iterator<Item = String>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> ExitCode {
    let greeting = match parse_args(args) {
        Ok(greeting) => greeting,
        Err(message) => {
            let _ = writeln!(err, "greeting_cli: {message}");
            let _ = writeln!(err, "usage: greeting_cli [ID] [CONTENT...]");
            return ExitCode::from(2);
        }
    };

    let json = match serde_json::to_string(&greeting) {
        Ok(json) => json,
        Err(source) => {
            let _ = writeln!(err, "greeting_cli: failed to encode greeting: {source}");
            return ExitCode::FAILURE;
        }
    };

    info!(
        "event=greeting_built module=cli status=ok id={} content_len={}",
        greeting.id(),
        greeting.content().len()
    );
    if let Err(source) = write_greeting(out, &greeting, &json) {
        let _ = writeln!(err, "greeting_cli: failed to write output: {source}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

// Order is fixed: version, text form, JSON form.
fn write_greeting(out: &mut impl Write, greeting: &Greeting, json: &str) -> std::io::Result<()> {
    writeln!(out, "greeting_core version={}", core_version())?;
    writeln!(out, "{greeting}")?;
    writeln!(out, "{json}")?;
    out.flush()
}

fn setup_logging() {
    let Ok(log_dir) = std::env::var(LOG_DIR_ENV) else {
        return;
    };
    let level = std::env::var(LOG_LEVEL_ENV).unwrap_or_else(|_| default_log_level().to_string());
    if let Err(err) = init_logging(&level, &log_dir) {
        eprintln!("greeting_cli: logging disabled: {err}");
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Greeting, String> {
    let id = match args.next() {
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|err| format!("invalid id `{raw}`: {err}"))?,
        None => return Ok(Greeting::new(DEFAULT_ID, DEFAULT_CONTENT)),
    };

    let words: Vec<String> = args.collect();
    if words.is_empty() {
        Ok(Greeting::new(id, DEFAULT_CONTENT))
    } else {
        Ok(Greeting::new(id, words.join(" ")))
    }
}
