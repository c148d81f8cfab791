//! Mindscan - keyword-based emotion analysis for free-form text.
//!
//! Reports go to stdout; logs go to stderr and, with `--log-dir`, to a
//! daily rotated file.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use mindscan_app::report::{render_catalog, render_json, render_report};
use mindscan_app::{load_analyzer, Session};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Mindscan - scan text for emotionally charged keywords and phrases
#[derive(Parser, Debug)]
#[command(name = "mindscan", version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Rule catalog file (JSON); defaults to catalog.json in the config directory
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Also write logs to daily rotated files in this directory
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze text given as arguments, read from a file, or piped on stdin
    Analyze {
        /// Text to analyze
        text: Vec<String>,

        /// Read the text from a file
        #[arg(long, short, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Analyze one line at a time and keep a session history
    Interactive {
        /// Print results and history as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the active rule catalog
    Catalog {
        /// Print the catalog as a catalog file that reproduces it
        #[arg(long)]
        json: bool,
    },
}

/// Initialize logging, optionally with file rotation.
fn init_logging(args: &Args) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let log_level = if args.debug { "debug" } else { args.log_level.as_str() };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mindscan={},warn", log_level)));

    if let Some(log_dir) = &args.log_dir {
        if std::fs::create_dir_all(log_dir).is_ok() {
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .max_log_files(5)
                .filename_prefix("mindscan")
                .filename_suffix("log")
                .build(log_dir)
                .ok();

            if let Some(appender) = file_appender {
                let (non_blocking, guard) = tracing_appender::non_blocking(appender);

                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(fmt::layer().with_writer(io::stderr))
                    .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
                    .init();

                tracing::info!("Logging to {:?}", log_dir);
                return Some(guard);
            }
        }

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(io::stderr)
            .init();
        tracing::warn!("File logging unavailable in {:?}, using console only", log_dir);
        return None;
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
    None
}

/// Collect the text to analyze from a file, the arguments, or stdin.
fn read_input(text: &[String], file: Option<&Path>) -> anyhow::Result<String> {
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }

    if !text.is_empty() {
        return Ok(text.join(" "));
    }

    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read stdin")?;
    Ok(buf)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(&args);

    tracing::debug!("Args: {:?}", args);

    let analyzer = load_analyzer(args.catalog.as_deref())?;

    match &args.command {
        Command::Analyze { text, file, json } => {
            let input = read_input(text, file.as_deref())?;
            if input.trim().is_empty() {
                anyhow::bail!("Nothing to analyze: input text is blank");
            }

            let result = analyzer.analyze(&input);
            if *json {
                println!("{}", render_json(&result)?);
            } else {
                print!("{}", render_report(&result));
            }
        }
        Command::Interactive { json } => {
            let mut session = Session::new(&analyzer, *json);
            session.run(io::stdin().lock(), io::stdout().lock())?;
        }
        Command::Catalog { json } => {
            if *json {
                println!("{}", analyzer.to_config().to_json()?);
            } else {
                print!("{}", render_catalog(&analyzer));
            }
        }
    }

    Ok(())
}
