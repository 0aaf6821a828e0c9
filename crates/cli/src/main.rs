//! httpscrub CLI
//!
//! Offline access to the redaction engine: redact recorded messages, inspect
//! which rules apply to a URL, and validate settings files.

mod commands;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use httpscrub_core::Settings;
use tracing_subscriber::{EnvFilter, fmt};

/// httpscrub: redact HTTP messages before they are logged.
#[derive(Parser, Debug)]
#[command(name = "httpscrub", version, about)]
struct Cli {
    /// Settings file (`.json`, `.yaml`/`.yml` or `.toml`).
    #[arg(long, env = "HTTPSCRUB_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Output format.
    #[arg(long, default_value = "text", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Redact a recorded message.
    Redact(commands::redact::RedactArgs),
    /// Show the rules that apply to a URL.
    Resolve(commands::resolve::ResolveArgs),
    /// Check whether traffic to a URL is whitelisted for logging.
    Check(commands::check::CheckArgs),
    /// Load and validate the settings file.
    Validate,
}

fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => httpscrub_rules::load_settings(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => {
            tracing::debug!("no settings file given, using empty settings");
            Settings::default()
        }
    };

    match cli.command {
        Command::Redact(args) => commands::redact::run(settings, &args, &cli.format),
        Command::Resolve(args) => commands::resolve::run(&settings, &args, &cli.format),
        Command::Check(args) => commands::check::run(settings, &args, &cli.format),
        Command::Validate => commands::validate::run(&settings, cli.config.as_deref(), &cli.format),
    }
}
