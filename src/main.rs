use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use treebak::config::AppConfig;
use treebak::core::notifications::{self, RunSummary};
use treebak::core::{BackupTarget, DiskClient, Orchestrator, TreeEngine};
use treebak::{gate, logging};

#[derive(Parser)]
#[command(name = "treebak")]
#[command(about = "Back up directory tree listings to cloud storage", long_about = None)]
struct Cli {
    /// PATH=LABEL pairs overriding the configured items
    targets: Vec<String>,

    #[arg(long, default_value = "treebak.toml")]
    config: PathBuf,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,

    #[arg(long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = AppConfig::load(&cli.config)?;

    let targets = if cli.targets.is_empty() {
        config.targets()
    } else {
        cli.targets
            .iter()
            .map(|pair| pair.parse())
            .collect::<Result<Vec<BackupTarget>>>()?
    };
    if targets.is_empty() {
        bail!(
            "no backup targets: add [[items]] to {} or pass PATH=LABEL arguments",
            cli.config.display()
        );
    }

    if !cli.yes {
        let prompt = format!("Back up {} target(s) now?", targets.len());
        let timeout = config.confirm_timeout_secs.map(Duration::from_secs);
        if gate::confirm(&prompt, timeout).await? == gate::Decision::Decline {
            tracing::info!("Backup declined");
            return Ok(());
        }
    }

    let uploader =
        DiskClient::new(&config.token).context("Failed to build storage client")?;
    let engine = Arc::new(TreeEngine::new(config.tree_command.as_str()));
    let orchestrator = Orchestrator::new(engine, uploader);

    let report = orchestrator.run(&targets).await;
    let summary = RunSummary::from_report(&report);

    if let Some(notifier) = notifications::create_notifier(&config.notify) {
        if let Err(e) = notifier.notify(&summary).await {
            tracing::warn!("Failed to send notification: {e:#}");
        }
    }

    println!("{}", summary.body);
    if summary.has_errors {
        std::process::exit(1);
    }
    Ok(())
}
