//! Panel Repair - CLI
//!
//! Console and TUI front ends for the code-breaking puzzle.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use panel_repair::{
    commands::{HttpNotifier, Notifier, SessionEnd, run_console},
    config::{
        ConfigError, DEMO, PuzzleConfig,
        loader::{load_from_file, locate_config},
    },
    engine::GameEngine,
    output::{Effects, effects::SEARCH_ACTIONS, formatters::join},
};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "panel_repair",
    about = "Repair the panel: find the hidden utility sequence before the attempts run out",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Puzzle definition (default: $PANEL_REPAIR_CONFIG, then ./panel_repair.toml)
    #[arg(short, long, global = true, conflicts_with = "demo")]
    config: Option<PathBuf>,

    /// Play the bundled demo puzzle
    #[arg(long, global = true)]
    demo: bool,

    /// Skip the text animations and loading bars
    #[arg(long, global = true)]
    no_effects: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Line-based console session (default)
    Console,

    /// Interactive TUI session
    Play,

    /// Validate the puzzle definition without playing
    Check,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut cli = Cli::parse();
    let command = cli.command.take().unwrap_or(Commands::Console);

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            if matches!(command, Commands::Console)
                && !cli.no_effects
                && let Some(ConfigError::NotFound { .. }) = err.downcast_ref::<ConfigError>()
            {
                Effects::new(true, Duration::ZERO).diagnostic(
                    &mut io::stdout(),
                    2,
                    "ERROR! NO CHIPS OR UTILITIES DETECTED. PROGRAM TERMINATED.",
                    SEARCH_ACTIONS,
                )?;
            }
            return Err(err);
        }
    };

    match command {
        Commands::Console => run_console_command(&cli, &config),
        Commands::Play => run_play_command(&config),
        Commands::Check => run_check_command(&config),
    }
}

fn load_config(cli: &Cli) -> Result<PuzzleConfig> {
    if cli.demo {
        return PuzzleConfig::from_toml(DEMO).context("bundled demo puzzle is invalid");
    }

    let path = locate_config(cli.config.as_deref())?;
    let config = load_from_file(&path)
        .with_context(|| format!("failed to load puzzle from {}", path.display()))?;
    Ok(config)
}

fn build_notifier(config: &PuzzleConfig) -> Result<Option<HttpNotifier>> {
    config
        .notify
        .as_ref()
        .map(HttpNotifier::from_config)
        .transpose()
        .context("failed to set up success notification")
}

fn report(end: SessionEnd) {
    match end {
        SessionEnd::Won { turns } => info!(turns, "panel repaired"),
        SessionEnd::Lost => info!("repair attempts exceeded"),
        SessionEnd::Abandoned => info!("session abandoned"),
    }
}

fn run_console_command(cli: &Cli, config: &PuzzleConfig) -> Result<()> {
    let mut engine = GameEngine::new(config.puzzle()?);
    let effects = if cli.no_effects {
        Effects::disabled()
    } else {
        Effects::from_config(&config.presentation)
    };
    let notifier = build_notifier(config)?;

    let stdin = io::stdin();
    let end = run_console(
        &mut engine,
        &effects,
        notifier.as_ref().map(|n| n as &dyn Notifier),
        stdin.lock(),
        io::stdout(),
    )?;
    report(end);
    Ok(())
}

fn run_play_command(config: &PuzzleConfig) -> Result<()> {
    use panel_repair::interactive::{App, run_tui};

    let engine = GameEngine::new(config.puzzle()?);
    let notifier = build_notifier(config)?.map(|n| Box::new(n) as Box<dyn Notifier>);

    let end = run_tui(App::new(engine, notifier))?;
    report(end);
    Ok(())
}

fn run_check_command(config: &PuzzleConfig) -> Result<()> {
    let puzzle = config.puzzle()?;

    println!("{}", "Puzzle definition OK".green().bold());
    println!("  chips:      {}", join(puzzle.slots(), ", "));
    println!("  utilities:  {}", join(puzzle.vocabulary(), ", "));
    println!("  phases:     {}", puzzle.turn_budget());
    println!(
        "  effects:    {} ({} ms per step)",
        if config.presentation.effects { "on" } else { "off" },
        config.presentation.load_time_ms
    );
    match &config.notify {
        Some(notify) => println!(
            "  notify:     {} ({} attempts)",
            notify.url, notify.attempts
        ),
        None => println!("  notify:     none"),
    }
    Ok(())
}
