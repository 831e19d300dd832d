//! salon - account CLI for the salon booking API
//!
//! # Examples
//!
//! ```bash
//! # Create an account (token is kept in .salon/auth_token)
//! salon signup --name Ana --email ana@example.com --password secret1
//!
//! # Who does the stored token belong to?
//! salon whoami --pretty
//!
//! # Would a stylist-only page render?
//! salon dashboard --role peluquera
//! ```

use salon_cli::{App, Cli, CliResult, logger};
use salon_client::FileTokenStorage;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::debug;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logger::initialize(cli.verbose) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    let pretty = cli.pretty;
    match run(cli).await {
        Ok(value) => print_json(&value, pretty),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> CliResult<Value> {
    let config = salon_config::Config::load()?;
    let client = cli.client_config(config.client.clone())?;
    let token_path = config.token_path()?;
    debug!(
        "Using {} with token file {}",
        client.api_url,
        token_path.display()
    );

    let mut app = App::new(
        &client.api_url,
        client.timeout(),
        client.validator_timeout(),
        Arc::new(FileTokenStorage::new(token_path)),
    );

    app.run(cli.command).await
}

fn print_json(value: &Value, pretty: bool) -> ExitCode {
    let output = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };

    match output {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error serializing response: {}", e);
            ExitCode::FAILURE
        }
    }
}
