//! SmsSeg CLI - Main entry point

mod cli;

use clap::{Parser, Subcommand};
use cli::OutputFormat;
use smsseg_foundation::{ConfigLoader, SmsConfig};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// SmsSeg - SMS segment counter and splitter
#[derive(Parser, Debug)]
#[command(name = "smsseg")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Load settings from this file only
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Count characters and message parts
    Count {
        /// Text to measure (reads stdin if omitted)
        text: Option<String>,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Split text into message parts
    Split {
        /// Text to split (reads stdin if omitted)
        text: Option<String>,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },
    /// Rewrite typographic characters and replace non-GSM characters
    Normalize {
        /// Text to normalize (reads stdin if omitted)
        text: Option<String>,

        /// Replacement for non-GSM characters (default from settings)
        #[arg(short, long)]
        replacement: Option<String>,
    },
    /// Show per-character GSM kind and slot sizes
    Classify {
        /// Text to classify (reads stdin if omitted)
        text: Option<String>,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<SmsConfig> {
    let config = match path {
        Some(path) => ConfigLoader::load_from(path)?,
        None => {
            let working_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            ConfigLoader::new(&working_dir).load_all()?
        }
    };
    debug!(
        "Using capacity {}/{} bytes, replacement {:?}",
        config.capacity.sms_bytes, config.capacity.concat_header_bytes, config.replacement
    );
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging (stderr, stdout 은 결과 전용)
    let log_level = if args.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = load_config(args.config.as_ref())?;
    let stdin = std::io::stdin();

    let output = match args.command {
        Command::Count { text, json } => {
            let text = cli::read_input(text, stdin.lock())?;
            cli::count(&config, &text, OutputFormat::from_json_flag(json))?
        }
        Command::Split { text, json } => {
            let text = cli::read_input(text, stdin.lock())?;
            cli::split(&config, &text, OutputFormat::from_json_flag(json))?
        }
        Command::Normalize { text, replacement } => {
            let text = cli::read_input(text, stdin.lock())?;
            let replacement = replacement.unwrap_or_else(|| config.replacement.clone());
            cli::normalize(&text, &replacement)
        }
        Command::Classify { text, json } => {
            let text = cli::read_input(text, stdin.lock())?;
            cli::classify(&text, OutputFormat::from_json_flag(json))?
        }
    };

    println!("{}", output);
    Ok(())
}
