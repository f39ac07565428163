mod cli;
mod commands;

use std::path::Path;

use clap::Parser;
use serde_json::{Value, json};
use skin_analysis::AnalysisConfig;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::Cli;
use crate::commands::{CliError, Output, dispatch};

const CLI_VERSION: &str = "1.0";

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let name = cli.command.name();
    let result = load_config(cli.config.as_deref())
        .map_err(|e| CliError::analysis(name, e))
        .and_then(|config| dispatch(cli.command, config));

    match result {
        Ok(output) => print_success(cli.json, name, output),
        Err(err) => print_error(cli.json, err),
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        _ => EnvFilter::new("debug"),
    };
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn load_config(path: Option<&Path>) -> skin_analysis::Result<AnalysisConfig> {
    match path {
        Some(path) => AnalysisConfig::load(path),
        None => Ok(AnalysisConfig::default()),
    }
}

fn print_success(json_mode: bool, command: &str, output: Output) {
    if json_mode {
        let response = json!({
            "status": "ok",
            "version": CLI_VERSION,
            "command": command,
            "data": output.data,
            "error": null
        });
        println!("{}", to_pretty(&response));
    } else {
        println!("{}", output.text);
    }
}

fn print_error(json_mode: bool, err: CliError) -> ! {
    if json_mode {
        let response = json!({
            "status": "error",
            "version": CLI_VERSION,
            "command": err.command,
            "data": null,
            "error": {
                "code": err.code,
                "type": err.kind,
                "message": err.message
            }
        });
        eprintln!("{}", to_pretty(&response));
    } else {
        eprintln!("Error: {}", err.message);
    }
    std::process::exit(err.code);
}

fn to_pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
