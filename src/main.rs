use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cloud_defender::build_info;
use cloud_defender::catalog::Catalog;
use cloud_defender::console::ConsoleGame;
use cloud_defender::core::config::user_file_path;
use cloud_defender::core::constants::CATALOG_FILE_NAME;
use cloud_defender::core::{GameConfig, GameEngine};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cloud-defender", about = "Cloud Defender - turn-based cloud security board game")]
struct Cli {
    /// Seed for reproducible dice, cards and threat damage
    #[arg(long)]
    seed: Option<u64>,

    /// Number of players (prompted when omitted)
    #[arg(long)]
    players: Option<usize>,

    /// Game config JSON (defaults to ~/.cloud-defender/config.json when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog JSON replacing the built-in regions, measures, spells and threats
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Disable coloured status output
    #[arg(long)]
    no_color: bool,

    /// Log filter, e.g. `info` or `cloud_defender=debug` (overrides RUST_LOG)
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Print build date and commit
    Version,
}

fn init_logging(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("warn")),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<GameConfig> {
    match path {
        Some(path) => GameConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => GameConfig::load_user_or_default().context("loading user config"),
    }
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    if let Some(path) = path {
        return Catalog::from_file(path)
            .with_context(|| format!("loading catalog {}", path.display()));
    }
    match user_file_path(CATALOG_FILE_NAME) {
        Ok(path) if path.exists() => Catalog::from_file(&path)
            .with_context(|| format!("loading catalog {}", path.display())),
        _ => Ok(Catalog::builtin()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(Cmd::Version) = cli.cmd {
        println!("{}", build_info::version_line());
        return Ok(());
    }

    init_logging(cli.log_level.as_deref());

    let config = load_config(cli.config.as_ref())?;
    let catalog = load_catalog(cli.catalog.as_ref())?;
    let engine =
        GameEngine::new(config, Arc::new(catalog)).context("rejecting game configuration")?;

    let rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    tracing::info!(seed = ?cli.seed, "starting game");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut game =
        ConsoleGame::new(engine, stdin.lock(), stdout.lock(), rng).with_color(!cli.no_color);
    game.run(cli.players)?;
    Ok(())
}
