//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use super::commands;
use quell::output::OutputMode;

/// quell - suppress accepted static-analysis findings
#[derive(Parser, Debug)]
#[command(
    name = "quell",
    version,
    about = "Suppress accepted static-analysis findings across runs",
    long_about = "Keep a committed ledger of accepted finding counts per (file, rule)\n\
                  and silence exactly those findings on later runs.\n\n\
                  Batches come from your analyzer as JSON; new or regressed findings\n\
                  always stay visible."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level CLI commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Reconcile a result batch against the ledger and show what remains
    Report {
        /// Analysis results JSON (file path, or '-' for stdin)
        #[arg(short, long, default_value = "-")]
        results: String,

        /// Explicit ledger path (overrides .quell.toml)
        #[arg(short, long)]
        ledger: Option<String>,
    },

    /// Accept every current finding, overwriting ledger counts
    AcceptAll {
        /// Analysis results JSON (file path, or '-' for stdin)
        #[arg(short, long, default_value = "-")]
        results: String,

        /// Explicit ledger path (overrides .quell.toml)
        #[arg(short, long)]
        ledger: Option<String>,
    },

    /// Accept current findings for a single rule
    AcceptRule {
        /// Rule id to accept (e.g. no-console)
        rule: String,

        /// Analysis results JSON (file path, or '-' for stdin)
        #[arg(short, long, default_value = "-")]
        results: String,

        /// Explicit ledger path (overrides .quell.toml)
        #[arg(short, long)]
        ledger: Option<String>,
    },

    /// Remove ledger entries with no current occurrences
    ///
    /// Requires a full-repository batch, so entries for files simply not
    /// analyzed this run are never deleted.
    Prune {
        /// Analysis results JSON (file path, or '-' for stdin)
        #[arg(short, long, default_value = "-")]
        results: String,

        /// Explicit ledger path (overrides .quell.toml)
        #[arg(short, long)]
        ledger: Option<String>,

        /// Preview the stale entries without saving
        #[arg(long)]
        dry_run: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Report { results, ledger }) => {
            commands::report(&results, ledger.as_deref(), output_mode)
        },
        Some(Command::AcceptAll { results, ledger }) => {
            commands::accept_all(&results, ledger.as_deref(), output_mode)
        },
        Some(Command::AcceptRule {
            rule,
            results,
            ledger,
        }) => commands::accept_rule(&rule, &results, ledger.as_deref(), output_mode),
        Some(Command::Prune {
            results,
            ledger,
            dry_run,
        }) => commands::prune(&results, ledger.as_deref(), dry_run, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("quell v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("quell v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'quell --help' for usage");
            }
            Ok(())
        },
    }
}
