use crate::{CliResult, commands::Commands};

use clap::Parser;
use salon_config::ClientConfig;

#[derive(Parser, Debug)]
#[command(name = "salon")]
#[command(about = "Salon booking account CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL (defaults to client.api_url from config.toml)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Log requests and session changes to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Client settings with `--server` applied on top, then validated
    pub fn client_config(&self, mut client: ClientConfig) -> CliResult<ClientConfig> {
        // Explicit flag > config.toml / SALON_API_URL
        if let Some(server) = &self.server {
            client.api_url = server.clone();
        }
        client.validate()?;
        Ok(client)
    }
}
