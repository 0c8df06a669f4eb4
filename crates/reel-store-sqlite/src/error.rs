//! Error type for `reel-store-sqlite`.

use reel_core::{movie::MovieId, opinion::OpinionId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// Attempted to update a movie whose row no longer exists.
  #[error("movie not found: {0}")]
  MovieNotFound(MovieId),

  /// Attempted to update an opinion whose row no longer exists.
  #[error("opinion not found: {0}")]
  OpinionNotFound(OpinionId),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
