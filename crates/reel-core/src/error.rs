//! Error types for `reel-core`.

use thiserror::Error;

use crate::movie::MovieId;

#[derive(Debug, Error)]
pub enum Error {
  #[error("movie not found: {0}")]
  MovieNotFound(MovieId),

  #[error("score {0} is outside the range 0..=10")]
  ScoreOutOfRange(i32),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  /// Wrap a backend error.
  pub fn store<E>(e: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(e))
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
