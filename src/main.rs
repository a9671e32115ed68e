//! gitcommit - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gitcommit::config::{self, Config};
use gitcommit::git::check_git_installed;
use gitcommit::{ChatClient, Outcome, RunOptions, TerminalPrompter, run_pipeline};

/// Suggest commit messages for your staged changes and commit the one you pick.
#[derive(Parser, Debug)]
#[command(name = "gitcommit")]
#[command(about = "Suggest commit messages for your staged changes and commit the one you pick")]
#[command(version)]
struct Cli {
    /// Logging level: trace, debug, info, warn, error (RUST_LOG takes precedence)
    #[arg(long = "log", value_name = "LEVEL", default_value = "warn")]
    log: String,

    /// Path to the config file (defaults to $GITCOMMIT_CONFIG or the platform config dir)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Model to use for this run (overrides MODEL_NAME)
    #[arg(short, long)]
    model: Option<String>,

    /// Send oversized requests without asking
    #[arg(short = 'y', long)]
    yes: bool,

    /// Print the chosen message instead of committing
    #[arg(long)]
    dry_run: bool,

    /// Use a picked suggestion as-is instead of offering to edit it
    #[arg(long)]
    no_edit: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli.log);

    // Step 1: Check prerequisites
    check_git_installed().context("git is required")?;

    // Step 2: Load config, filling in first-run secrets
    let config_path = match cli.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };
    let config = load_config(&config_path, cli.model)?;

    // Step 3: Run the pipeline
    let prompter = TerminalPrompter;
    let client = ChatClient::from_config(&config).context("Failed to create API client")?;
    let options = RunOptions {
        workdir: PathBuf::from("."),
        dry_run: cli.dry_run,
        assume_yes: cli.yes,
        edit: !cli.no_edit,
    };

    let outcome = run_pipeline(&config, &options, &prompter, &client)
        .await
        .context("Failed to create commit")?;

    match outcome {
        Outcome::Committed { output, .. } => print!("{}", output),
        Outcome::DryRun { message } => {
            println!("--- Dry Run: commit message ---");
            println!("{}", message);
        }
        Outcome::Cancelled => println!("Cancelled. Nothing was committed."),
    }

    Ok(())
}

/// Initialize tracing to stderr, honoring RUST_LOG over `--log`.
fn init_logging(level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

/// Load and validate the config, persisting any newly entered secrets.
fn load_config(path: &std::path::Path, model: Option<String>) -> Result<Config> {
    let mut config = config::load(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;

    if config::resolve_secrets(&mut config, &TerminalPrompter)? {
        config::save(path, &config).context("Failed to save configuration")?;
    }

    if let Some(model) = model {
        config.model_name = model;
    }

    config.validate()?;
    Ok(config)
}
