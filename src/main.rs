//! taglog command line.
//!
//! Emits records through the facade, answers loggability questions and
//! validates option files.
//!
//! ```text
//! taglog --config log.toml emit --level warn --tag Disk "space low"
//! taglog check Net debug
//! tail -f app.out | taglog --config log.toml pipe --tag App --watch
//! ```

use std::fs;
use std::io::{self, BufRead, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};

use taglog::config::{load_option, OptionWatcher};
use taglog::observability::logging::init_diagnostics;
use taglog::{Log, LogLevel, LogOption};

#[derive(Parser)]
#[command(name = "taglog")]
#[command(about = "Emit and inspect tagged log records", long_about = None)]
struct Cli {
    /// Option file (TOML). Without it records go to stderr at info and up.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Filter for taglog's own diagnostics when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    diagnostics: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Emit one record
    Emit {
        #[arg(short, long, default_value = "info")]
        level: LogLevel,
        #[arg(short, long)]
        tag: String,
        message: String,
    },
    /// Print whether TAG would be emitted at LEVEL; exits 1 when it would not
    Check { tag: String, level: LogLevel },
    /// Emit a JSON payload read from FILE or stdin
    Json {
        #[arg(short, long)]
        tag: String,
        file: Option<PathBuf>,
    },
    /// Emit an XML payload read from FILE or stdin
    Xml {
        #[arg(short, long)]
        tag: String,
        file: Option<PathBuf>,
    },
    /// Emit every stdin line as a record
    Pipe {
        #[arg(short, long)]
        tag: String,
        #[arg(short, long, default_value = "info")]
        level: LogLevel,
        /// Reload the --config file whenever it changes
        #[arg(long)]
        watch: bool,
    },
    /// Validate an option file and print the effective option
    Validate { path: PathBuf },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_diagnostics(&cli.diagnostics)?;
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Emit {
            level,
            tag,
            message,
        } => {
            let log = open_log(config)?;
            let written = log.log(level, &tag, &message, None)?;
            tracing::debug!(written, "Record emitted");
            log.flush()?;
        }
        Commands::Check { tag, level } => {
            let loggable = open_log(config)?.is_loggable(&tag, level)?;
            println!("{loggable}");
            if !loggable {
                std::process::exit(1);
            }
        }
        Commands::Json { tag, file } => {
            let log = open_log(config)?;
            log.json(&tag, &read_payload(file.as_deref())?)?;
            log.flush()?;
        }
        Commands::Xml { tag, file } => {
            let log = open_log(config)?;
            log.xml(&tag, &read_payload(file.as_deref())?)?;
            log.flush()?;
        }
        Commands::Pipe { tag, level, watch } => {
            let log = open_log(config)?;
            let _watcher = match (config, watch) {
                (Some(path), true) => Some(OptionWatcher::new(path, Arc::clone(&log)).run()?),
                (None, true) => return Err("--watch requires --config".into()),
                (_, false) => None,
            };
            for line in io::stdin().lock().lines() {
                log.log(level, &tag, &line?, None)?;
            }
            log.flush()?;
        }
        Commands::Validate { path } => {
            let option = load_option(&path)?;
            print!("{}", toml::to_string_pretty(&option)?);
        }
    }

    Ok(())
}

/// Builds the facade from `config`, or from the default option.
fn open_log(config: Option<&Path>) -> Result<Arc<Log>, Box<dyn std::error::Error>> {
    let option = match config {
        Some(path) => load_option(path)?,
        None => LogOption::default(),
    };
    tracing::debug!(config = ?config, "Option loaded");
    Ok(Arc::new(Log::with_option(option)?))
}

fn read_payload(file: Option<&Path>) -> io::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut payload = String::new();
            io::stdin().read_to_string(&mut payload)?;
            Ok(payload)
        }
    }
}
