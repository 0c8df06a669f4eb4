//! `reel` — interactive console for the Reel movie review store.
//!
//! # Usage
//!
//! ```
//! reel --store ~/.local/share/reel/reel.db
//! reel --config reel.toml
//! REEL_STORE_PATH=/tmp/reel.db reel
//! ```

mod console;
mod settings;

use std::{io, path::PathBuf};

use anyhow::{Context as _, Result};
use clap::Parser;
use console::Console;
use reel_core::ReviewService;
use reel_store_sqlite::SqliteStore;
use settings::{Settings, expand_tilde};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "reel", version, about = "Console for movie reviews")]
struct Args {
  /// Path to the TOML configuration file.
  #[arg(short, long, value_name = "FILE", default_value = "reel.toml")]
  config: PathBuf,

  /// SQLite database file; overrides `store_path` from the config.
  #[arg(long, value_name = "PATH")]
  store: Option<PathBuf>,

  /// Use a throwaway in-memory database.
  #[arg(long, conflicts_with = "store")]
  in_memory: bool,
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  // Logs go to stderr so they never interleave with the menu on stdout.
  tracing_subscriber::fmt()
    .with_writer(io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy(),
    )
    .init();

  let args = Args::parse();

  let store = if args.in_memory {
    SqliteStore::open_in_memory()
      .await
      .context("failed to open in-memory store")?
  } else {
    let settings = Settings::load(&args.config)?;
    let path = expand_tilde(&args.store.unwrap_or(settings.store_path));
    tracing::info!(?path, "opening store");
    SqliteStore::open(&path)
      .await
      .with_context(|| format!("failed to open store at {path:?}"))?
  };

  let service = ReviewService::new(store.movies(), store.opinions());

  let stdin = io::stdin();
  let mut console = Console::new(&service, stdin.lock(), io::stdout());
  console.run().await
}
