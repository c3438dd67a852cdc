//! pl0c - command line entry point.
//!
//! Parses arguments with clap, sets up logging, loads configuration and
//! prints the token stream of the input file.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pl0c_drv::{Charset, Config, DrvError};
use pl0c_util::SourceFile;

/// pl0c - Tokenize PL/0 source files
#[derive(Parser, Debug)]
#[command(name = "pl0c")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize PL/0 source files", long_about = None)]
struct Cli {
    /// Source file to tokenize
    input: PathBuf,

    /// Characters identifiers are built from
    #[arg(long, value_enum)]
    charset: Option<Charset>,

    /// Prefix each token with its source range
    #[arg(long)]
    spans: bool,

    /// Path to configuration file
    #[arg(short, long, env = "PL0C_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, env = "PL0C_VERBOSE")]
    verbose: bool,

    /// Disable color output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    if let Err(e) = run() {
        match e.downcast_ref::<DrvError>() {
            Some(DrvError::Tokenize { .. }) => eprintln!("{}", e),
            _ => eprintln!("error: {:#}", e),
        }
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(charset) = cli.charset {
        config.lexer.charset = charset;
    }
    if cli.spans {
        config.output.spans = true;
    }
    debug!(?config, "configuration loaded");

    let content = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let file = SourceFile::new(cli.input.display().to_string(), content);

    let output = pl0c_drv::dump_tokens(&file, &config)?;
    print!("{}", output);
    Ok(())
}

/// Initialize the logging system.
///
/// `RUST_LOG` selects the filter unless `verbose` forces `debug`; the
/// default is `warn`. Logs go to stderr so the token dump stays clean.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .context("failed to initialize logging")?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Ok(Config::load(path)?),
        None => Ok(Config::default()),
    }
}
