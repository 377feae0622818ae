// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tokio::io::AsyncReadExt;

use humarizer::config::{load_or_default, Config};
use humarizer::engine::{Orchestrator, TerminalView, TextStats, Timing};
use humarizer::history::{FileStore, HistoryStore};
use humarizer::observability::init_tracing;
use humarizer::observability::messages::build::BuildFailed;
use humarizer::observability::messages::StructuredLog;
use humarizer::processors::{Mode, ProcessorFactory};
use humarizer::site::{run_dev_server, SiteBuilder};
use humarizer::traits::SeededRandom;

/// Build the Ai Humarizer page and run its transforms from the terminal.
#[derive(Parser)]
#[command(name = "humarizer", version, about)]
struct Cli {
    /// YAML config file (defaults to ./humarizer.yaml when present)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// After building, serve the output and rebuild on change
    #[arg(long)]
    dev: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Build the site (the default)
    Build,
    /// Humanize text or code
    Convert(ConvertArgs),
    /// Show or clear conversion history
    History(HistoryArgs),
}

#[derive(Args)]
struct ConvertArgs {
    /// text or code
    #[arg(long, default_value = "text")]
    mode: Mode,

    /// Tone (text) or style (code); the mode's first option when omitted
    #[arg(long)]
    option: Option<String>,

    /// Probability in [0, 1] applied to every optional rewrite
    #[arg(long)]
    intensity: Option<f64>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the processing delay and the character-by-character reveal
    #[arg(long)]
    instant: bool,

    /// Input to convert; read from stdin when absent
    text: Option<String>,
}

#[derive(Args)]
struct HistoryArgs {
    /// Erase all saved conversions
    #[arg(long)]
    clear: bool,

    /// Number of entries to list
    #[arg(long, default_value_t = 20)]
    show: usize,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_or_default(cli.config.as_deref()).context("failed to load configuration")?;

    match cli.command {
        None | Some(Command::Build) => build(&config, cli.config.as_deref(), cli.dev).await,
        Some(Command::Convert(args)) => convert(&config, args).await,
        Some(Command::History(args)) => history(&config, args),
    }
}

async fn build(config: &Config, config_path: Option<&Path>, dev: bool) -> Result<()> {
    let rules = Arc::new(config.compile_rules().context("invalid rule table")?);
    let builder = SiteBuilder::new(config.build.clone(), rules);

    let report = match builder.build() {
        Ok(report) => report,
        Err(e) => {
            BuildFailed { error: &e }.log();
            return Err(e).context("build failed");
        }
    };

    println!("✅ Build complete: {}", report.index_path.display());
    println!(
        "   {} assets copied, {} skipped",
        report.copied.len(),
        report.skipped.len()
    );

    if dev {
        run_dev_server(config, config_path, builder)
            .await
            .context("dev server failed")?;
    }
    Ok(())
}

async fn convert(config: &Config, args: ConvertArgs) -> Result<()> {
    let input = match args.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buf)
                .await
                .context("failed to read input from stdin")?;
            buf
        }
    };

    let rules = Arc::new(config.compile_rules().context("invalid rule table")?);
    let history = HistoryStore::open(FileStore::new(&config.history.dir), config.history.capacity);
    let timing = if args.instant {
        Timing::instant()
    } else {
        Timing::from(&config.orchestrator)
    };

    let mut orchestrator = Orchestrator::new(ProcessorFactory::new(rules), history, timing)
        .with_intensity(args.intensity.unwrap_or(config.orchestrator.default_intensity));
    if let Some(seed) = args.seed {
        orchestrator = orchestrator.with_random(Box::new(SeededRandom::new(seed)));
    }
    orchestrator.set_mode(args.mode);
    if let Some(option) = &args.option {
        orchestrator.set_option(option)?;
    }

    let mut view = TerminalView::new(!args.instant);
    match orchestrator.convert(&input, &mut view).await? {
        Some(output) => {
            view.finish().await;
            eprintln!("Input:  {}", TextStats::of(&input));
            eprintln!("Output: {}", TextStats::of(&output));
        }
        None => eprintln!("Nothing to convert: input is empty"),
    }
    Ok(())
}

fn history(config: &Config, args: HistoryArgs) -> Result<()> {
    let mut store = HistoryStore::open(FileStore::new(&config.history.dir), config.history.capacity);

    if args.clear {
        store.clear().context("failed to clear history")?;
        println!("🧹 History cleared");
        return Ok(());
    }

    if store.is_empty() {
        println!("No conversions yet");
        return Ok(());
    }

    for (i, entry) in store.items().iter().take(args.show).enumerate() {
        println!(
            "{:>2}. {} / {} @ {}  {}",
            i + 1,
            entry.mode,
            entry.option,
            entry.intensity,
            entry.time.with_timezone(&chrono::Local).format("%H:%M:%S"),
        );
        println!("    {}", entry.preview(80));
    }
    Ok(())
}
