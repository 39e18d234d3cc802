//! Vmlt CLI - A command-line tool for VML document tokenization.
//!
//! This is the main entry point for the vmlt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{run_tokenize, TokenizeArgs};
use config::Config;
use error::{Result, VmltError};

/// Vmlt - A CLI tool for VML document tokenization
///
/// Vmlt scans VML markup documents into their token sequences, for
/// inspecting scanner output and feeding downstream tooling.
#[derive(Parser, Debug)]
#[command(name = "vmlt")]
#[command(author = "VML Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A CLI tool for VML document tokenization", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "VMLT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "VMLT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "VMLT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the vmlt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize a VML document
    ///
    /// Scans the document into its token sequence and prints it as an
    /// aligned listing or as JSON. Reads standard input when no file is
    /// given.
    Tokenize(TokenizeCommand),
}

/// Arguments for the tokenize subcommand.
#[derive(Parser, Debug)]
struct TokenizeCommand {
    /// Input file (default: standard input)
    input: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Only print tokens of this kind (comment, delimiter, identifier, string, text)
    #[arg(short, long)]
    kind: Option<String>,

    /// Append a per-kind token count summary
    #[arg(long)]
    stats: bool,
}

/// Main entry point for the vmlt CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler.
///
/// # Returns
/// * `Result<()>` - Success or an error
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose, cli.no_color)?;

    // Load configuration
    let config = load_config(cli.config.as_deref())?;

    // Execute the selected command
    execute_command(cli.command, cli.verbose, config)
}

/// Initialize the logging system.
///
/// # Arguments
/// * `verbose` - Whether to enable verbose logging
/// * `no_color` - Whether to disable colored output
///
/// # Returns
/// * `Result<()>` - Success or an error
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| VmltError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
///
/// # Arguments
/// * `config_path` - Optional path to configuration file
///
/// # Returns
/// * `Result<Config>` - The loaded configuration or an error
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
///
/// # Arguments
/// * `command` - The command to execute
/// * `verbose` - Whether verbose output is enabled
/// * `config` - The application configuration
///
/// # Returns
/// * `Result<()>` - Success or an error
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokenize(args) => execute_tokenize(args, verbose, config),
    }
}

/// Execute the tokenize command.
fn execute_tokenize(args: TokenizeCommand, verbose: bool, config: Config) -> Result<()> {
    let tokenize_args = TokenizeArgs {
        verbose,
        input: args.input,
        format: args.format,
        kind: args.kind,
        stats: args.stats,
    };
    run_tokenize(tokenize_args, config)
}
