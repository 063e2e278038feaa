use std::io;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tl_cli::commands::{add, reset, restart, start, stats, stop};
use tl_cli::{Cli, Commands, Config, git, store};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // --verbose forces debug-level tracing regardless of RUST_LOG
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // try_init: a second initialization (e.g. under a test harness) is not fatal
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let mut config =
        Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    if cli.git {
        config.git.enabled = true;
    }
    if cli.no_git {
        config.git.enabled = false;
    }
    tracing::debug!(?config, "loaded configuration");

    let workdate = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let path = store::day_file(&config.data_dir, workdate);

    if config.git.enabled {
        git::pull(&config.data_dir);
    }

    let mut set = store::load(&path)?;
    tracing::debug!(records = set.len(), path = %path.display(), "loaded day file");

    let mut out = io::stdout().lock();

    let mutates = !matches!(cli.command, Commands::Stats);
    match &cli.command {
        Commands::Start => start::run(&mut out, &mut set, &cli.tags)?,
        Commands::Stop => stop::run(&mut out, &mut set)?,
        Commands::Reset => reset::run(&mut out, &mut set)?,
        Commands::Restart => restart::run(&mut out, &mut set)?,
        Commands::Add { from, to } => {
            add::run(&mut out, &mut set, workdate, *from, *to, &cli.tags)?;
        }
        Commands::Stats => stats::run(&mut out, &set, workdate)?,
    }

    if mutates {
        store::save(&path, &set)?;
        tracing::debug!(
            records = set.len(),
            new = set.new_records().len(),
            "wrote day file"
        );

        if config.git.enabled {
            git::commit_and_push(&config.data_dir);
        }
    }

    Ok(())
}
