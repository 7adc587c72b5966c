//! CLI commands module
//!
//! Argument parsing, logging setup and the command loop.

pub mod dispatch;
pub mod repl;

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use dispatch::{Dispatcher, OutputFormat};
use todo_core::config::Config;
use todo_core::query::QueryEngine;
use todo_storage::FileSystemLister;

/// todo-helper - find and query TODO comments in source files
#[derive(Debug, Parser)]
#[command(name = "todo-helper")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory to scan (defaults to the current directory)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Extension of files to scan, without the dot
    #[arg(long = "ext", value_name = "EXT")]
    pub extension: Option<String>,

    /// Print results as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Run a command and skip the interactive prompt (repeatable)
    #[arg(short, long = "exec", value_name = "COMMAND")]
    pub exec: Vec<String>,
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let mut config =
        Config::resolve(cli.config.as_deref(), &cwd).context("Failed to load configuration")?;
    if let Some(extension) = &cli.extension {
        config.scan.extension = extension.trim_start_matches('.').to_string();
    }
    config.validate().context("Invalid configuration")?;

    let root = cli.root.clone().unwrap_or(cwd);
    let lister = FileSystemLister::from_config(&config.scan);
    let engine = QueryEngine::new(lister, root, config.scan.extension.clone());
    tracing::info!("Scanning .{} files under {:?}", engine.extension(), engine.root());
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Table
    };

    let stdout = std::io::stdout();
    let mut dispatcher = Dispatcher::new(engine, stdout.lock())
        .with_format(format)
        .with_limits(config.table);

    if cli.exec.is_empty() {
        let stdin = std::io::stdin();
        repl::run(&mut dispatcher, stdin.lock())
    } else {
        repl::run_batch(&mut dispatcher, &cli.exec)
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_text() {
        let cmd = Cli::command();
        assert!(cmd.get_about().is_some());
    }

    #[test]
    fn test_exec_is_repeatable() {
        let cli = Cli::parse_from(["todo-helper", "-e", "show", "--exec", "sort user", "--ext", "ts"]);
        assert_eq!(cli.exec, vec!["show".to_string(), "sort user".to_string()]);
        assert_eq!(cli.extension.as_deref(), Some("ts"));
        assert_eq!(cli.verbose, 0);
    }
}
