//! CLI command implementations
//!
//! Each command loads configuration (file, then environment), does its work
//! and returns the `data` payload of the JSON envelope.

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::ServiceConfig;
use crate::engine::{Derivation, DerivationMode, InterpretationRecord, NumeralEngine};
use crate::generator::{Generation, Generator};
use crate::history::{FileHistoryStore, HistoryStore};
use crate::http_server::HttpServer;
use crate::observability::{log_event, log_event_with_fields, Event, Logger, Severity};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_error, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    let result = run_command(cli.config.as_deref(), cli.command);

    if let Err(e) = &result {
        // stdout may already be gone; the caller still reports on stderr
        let _ = write_error(e.code_str(), e.message());
    }

    result
}

/// Run the appropriate command based on CLI args
pub fn run_command(config_path: Option<&Path>, cmd: Command) -> CliResult<()> {
    let config = load_config(config_path, matches!(cmd, Command::Serve { .. }))?;

    match cmd {
        Command::Derive {
            date,
            time,
            year,
            shio,
            signals,
            salt,
            unweighted,
            explain,
        } => {
            let record = InterpretationRecord::from_strings(&date, &time, year, shio, signals)?;
            let salt = salt.unwrap_or_else(|| config.salt.clone());
            let mode = if unweighted {
                DerivationMode::Unweighted
            } else {
                config.mode
            };
            write_response(derive(&record, &salt, mode, explain)?)
        }
        Command::Evaluate { explain } => {
            let request = read_request()?;
            write_response(evaluate(&config, request, explain)?)
        }
        Command::Generate => write_response(generate(&config)?),
        Command::Serve { port } => serve(&config, port),
        Command::History { clear } => write_response(history(&config, clear)?),
    }
}

fn load_config(path: Option<&Path>, serving: bool) -> CliResult<ServiceConfig> {
    let config = ServiceConfig::load_or_default(path)?;

    let severity = config.severity()?;
    // One-shot commands keep stdout for the JSON envelope
    let severity = if serving {
        severity
    } else {
        severity.max(Severity::Warn)
    };
    Logger::set_min_severity(severity);

    let source = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    log_event_with_fields(Event::ConfigLoaded, &[("source", source.as_str())]);

    Ok(config)
}

/// Derive a numeral for an explicit record
pub fn derive(
    record: &InterpretationRecord,
    salt: &str,
    mode: DerivationMode,
    explain: bool,
) -> CliResult<Value> {
    let derivation = match NumeralEngine::new().derive(record, salt, mode) {
        Ok(derivation) => derivation,
        Err(e) => {
            let reason = e.to_string();
            log_event_with_fields(
                Event::DerivationRejected,
                &[("code", e.code()), ("reason", reason.as_str())],
            );
            return Err(e.into());
        }
    };

    Ok(derivation_value(record, &derivation, explain))
}

fn derivation_value(record: &InterpretationRecord, derivation: &Derivation, explain: bool) -> Value {
    if explain {
        json!({
            "number": derivation.numeral,
            "mode": derivation.mode,
            "record": record,
            "canonical": derivation.canonical,
            "digest": derivation.digest_hex,
            "seed": derivation.seed,
            "weights": derivation.weights,
        })
    } else {
        json!({
            "number": derivation.numeral,
            "mode": derivation.mode,
        })
    }
}

/// `evaluate` input: a complete record plus optional salt and mode
#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub record: InterpretationRecord,
    #[serde(default)]
    pub salt: Option<String>,
    #[serde(default)]
    pub weighted: Option<bool>,
}

/// Derive a numeral for a record taken as given
pub fn evaluate(config: &ServiceConfig, request: Value, explain: bool) -> CliResult<Value> {
    let request: EvaluateRequest = serde_json::from_value(request)?;

    let salt = request.salt.unwrap_or_else(|| config.salt.clone());
    let mode = request
        .weighted
        .map(DerivationMode::from_weighted)
        .unwrap_or(config.mode);

    derive(&request.record, &salt, mode, explain)
}

/// One generation round against the configured sources and history
pub fn generate(config: &ServiceConfig) -> CliResult<Value> {
    let generator = Generator::from_config(config)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::io_error(format!("Failed to create tokio runtime: {}", e)))?;

    let generation = rt.block_on(generator.generate())?;
    Ok(generation_value(&generation))
}

fn generation_value(generation: &Generation) -> Value {
    json!({
        "number": generation.number,
        "record": generation.record,
        "sourceHealth": generation.report.health(),
        "errors": generation.report.errors(),
        "recorded": generation.recorded,
    })
}

/// Start the HTTP server
///
/// Builds the generator from configuration and serves until the listener
/// fails.
pub fn serve(config: &ServiceConfig, port: Option<u16>) -> CliResult<()> {
    let generator = Arc::new(Generator::from_config(config)?);

    let http_config = match port {
        Some(port) => config.http.clone().with_port(port),
        None => config.http.clone(),
    };
    let server = HttpServer::with_state(http_config, generator)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server.start().await.map_err(|e| {
            let reason = e.to_string();
            log_event_with_fields(Event::ServeFailed, &[("reason", reason.as_str())]);
            CliError::serve_failed(format!("HTTP server failed: {}", e))
        })
    })?;

    Ok(())
}

/// List or clear the history file
pub fn history(config: &ServiceConfig, clear: bool) -> CliResult<Value> {
    let store = FileHistoryStore::open(&config.history.path, config.history.limit);

    if clear {
        store.clear()?;
        log_event(Event::HistoryCleared);
        return Ok(json!({ "cleared": true }));
    }

    let entries = store.list()?;
    Ok(json!({
        "total": entries.len(),
        "entries": entries,
    }))
}
