//! Opinion — one reviewer's description and score for a movie.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{movie::MovieId, store::Entity};

/// Lowest score a reviewer may give.
pub const MIN_SCORE: i32 = 0;
/// Highest score a reviewer may give.
pub const MAX_SCORE: i32 = 10;
/// Scores at or below this mark a movie as low-rated.
pub const LOW_SCORE_THRESHOLD: i32 = 3;

/// Store-assigned surrogate key of an [`Opinion`].
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct OpinionId(pub i64);

impl fmt::Display for OpinionId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opinion {
  pub id:          Option<OpinionId>,
  pub description: Option<String>,
  /// Email-like handle of whoever left the opinion. Compared
  /// case-insensitively.
  pub reviewer:    String,
  pub score:       Option<i32>,
  pub movie_id:    Option<MovieId>,
}

impl Opinion {
  /// An unsaved opinion about `movie_id`.
  pub fn new(
    movie_id: MovieId,
    description: Option<String>,
    reviewer: impl Into<String>,
    score: Option<i32>,
  ) -> Self {
    Self {
      id: None,
      description,
      reviewer: reviewer.into(),
      score,
      movie_id: Some(movie_id),
    }
  }

  /// Whether this opinion was written by `reviewer`, ignoring case.
  pub fn is_by(&self, reviewer: &str) -> bool {
    self.reviewer.to_lowercase() == reviewer.to_lowercase()
  }

  /// A present score at or below [`LOW_SCORE_THRESHOLD`].
  pub fn is_low(&self) -> bool {
    self.score.is_some_and(|s| s <= LOW_SCORE_THRESHOLD)
  }
}

impl Entity for Opinion {
  type Id = OpinionId;

  fn id(&self) -> Option<OpinionId> { self.id }
}

/// Check that `score` lies within [`MIN_SCORE`]..=[`MAX_SCORE`].
pub fn validate_score(score: i32) -> crate::Result<i32> {
  if (MIN_SCORE..=MAX_SCORE).contains(&score) {
    Ok(score)
  } else {
    Err(crate::Error::ScoreOutOfRange(score))
  }
}
