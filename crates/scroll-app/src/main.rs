use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use scroll_config::LogFormat;
use tracing_subscriber::EnvFilter;

pub mod commands;
pub mod library;
pub mod settings;
pub mod state;

#[cfg(test)]
mod tests;

use self::commands::Command;
use self::state::AppState;

/// Read the King James Bible with Strong's concordance lookups
#[derive(Debug, Parser)]
#[command(name = "scroll", version)]
struct Cli {
    /// JSON config file, defaults to ./scroll.json when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the book and dictionary JSON files
    #[arg(long, global = true)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config = settings::load_config(cli.config.as_deref())?;
    settings::apply_overrides(&mut config, cli.data_dir.as_deref());

    init_tracing(config.log_format);
    tracing::debug!("Using data dir {}", config.library.data_dir);

    let state = AppState::new(config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::run(&state, cli.command, &mut out).await?;
    out.flush()?;

    Ok(())
}
