use crate::{CliError, CliResult};

use std::time::SystemTime;

use fern::Dispatch;
use log::LevelFilter;

/// Diagnostics go to stderr so stdout stays pure JSON
pub fn initialize(verbose: bool) -> CliResult<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    Dispatch::new()
        .level(level)
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message}",
                date = humantime::format_rfc3339_seconds(SystemTime::now()),
                level = record.level(),
                message = message,
            ))
        })
        .chain(std::io::stderr())
        .apply()
        .map_err(|e| CliError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })
}
