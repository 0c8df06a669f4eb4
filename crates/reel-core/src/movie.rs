//! Movie — a film title that opinions are attached to.
//!
//! A movie does not hold its opinions. They are fetched on demand through
//! [`ReviewService::opinions_for_movie`](crate::ReviewService::opinions_for_movie).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::store::Entity;

/// Store-assigned surrogate key of a [`Movie`].
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MovieId(pub i64);

impl fmt::Display for MovieId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.0.fmt(f) }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
  /// `None` until the movie has been saved; immutable afterwards.
  pub id:    Option<MovieId>,
  pub title: String,
}

impl Movie {
  /// A movie that has not been persisted yet.
  pub fn new(title: impl Into<String>) -> Self {
    Self { id: None, title: title.into() }
  }
}

impl Entity for Movie {
  type Id = MovieId;

  fn id(&self) -> Option<MovieId> { self.id }
}
