use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

use reltime::time::{DateInput, format_relative_time, normalize};
use reltime::util::config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "reltime", version, about = "Compact relative timestamps")]
struct Cli {
    /// Timestamps to format (epoch milliseconds or ISO-8601 text)
    #[arg(required = true, allow_negative_numbers = true)]
    inputs: Vec<String>,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Reference instant to measure against (defaults to now)
    #[arg(short, long)]
    reference: Option<String>,

    /// Phrase future timestamps as "in 5m"
    #[arg(short, long)]
    future: bool,

    /// Enable debug logging to file
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;

    let guard = setup_logging(&config, cli.debug)?;

    info!(count = cli.inputs.len(), "reltime starting");

    let mut options = config.format_options();
    if cli.future {
        options = options.with_future(true);
    }
    if let Some(ref raw) = cli.reference {
        let reference = normalize(&parse_arg(raw)).context("Invalid --reference value")?;
        options = options.with_reference_date(reference);
    }

    let mut failed = false;
    for raw in &cli.inputs {
        match format_relative_time(parse_arg(raw), &options) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                warn!(input = %raw, error = %e, "Formatting failed");
                eprintln!("{e}");
                failed = true;
            }
        }
    }

    if failed {
        // Flush the log writer before exiting.
        drop(guard);
        std::process::exit(1);
    }
    Ok(())
}

/// Integers are epoch milliseconds; everything else is parsed as text.
fn parse_arg(raw: &str) -> DateInput {
    match raw.trim().parse::<i64>() {
        Ok(ms) => DateInput::from(ms),
        Err(_) => DateInput::from(raw),
    }
}

fn setup_logging(
    config: &AppConfig,
    debug: bool,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    if !debug {
        return Ok(None);
    }

    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "reltime.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(config.log.filter.as_str())
        .with_ansi(false)
        .init();

    Ok(Some(guard))
}
