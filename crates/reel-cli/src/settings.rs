//! Runtime configuration, layered from an optional TOML file and `REEL_*`
//! environment variables.

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;

/// Runtime configuration, deserialised from `reel.toml` and the environment.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
  /// SQLite database file. A leading `~/` expands to `$HOME`.
  #[serde(default = "default_store_path")]
  pub store_path: PathBuf,
}

fn default_store_path() -> PathBuf { PathBuf::from("reel.db") }

impl Settings {
  /// Read `file` (if it exists) and overlay `REEL_*` environment variables.
  pub fn load(file: &Path) -> anyhow::Result<Self> {
    Self::load_with(file, config::Environment::with_prefix("REEL"))
  }

  fn load_with(file: &Path, env: config::Environment) -> anyhow::Result<Self> {
    let raw = config::Config::builder()
      .add_source(config::File::from(file.to_path_buf()).required(false))
      .add_source(env)
      .build()
      .with_context(|| format!("failed to read config file {}", file.display()))?;

    raw.try_deserialize().context("failed to deserialise settings")
  }
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
