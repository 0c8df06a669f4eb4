//! The `Repository` traits implemented by storage backends.
//!
//! Backends (e.g. `reel-store-sqlite`) implement [`Repository`] once per
//! entity type. [`ReviewService`](crate::ReviewService) depends on these
//! abstractions, not on any concrete backend.

use std::{fmt, future::Future};

use crate::{movie::MovieId, opinion::Opinion};

/// A persistable value whose identity is assigned by the store.
pub trait Entity: Clone + Send + Sync + 'static {
  type Id: Copy + Eq + fmt::Debug + fmt::Display + Send + Sync + 'static;

  /// `None` until the entity has been saved for the first time.
  fn id(&self) -> Option<Self::Id>;
}

/// CRUD over one entity type.
///
/// Every method is its own unit of work: it commits or rolls back before the
/// returned future resolves. No two calls share a transaction.
pub trait Repository<T: Entity>: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Insert `entity` if it has no id yet, otherwise update the stored row.
  /// Returns the persisted copy with its id populated.
  fn save(&self, entity: T) -> impl Future<Output = Result<T, Self::Error>> + Send + '_;

  /// Returns `None` if no entity has this id.
  fn find_by_id(
    &self,
    id: T::Id,
  ) -> impl Future<Output = Result<Option<T>, Self::Error>> + Send + '_;

  /// All stored entities in the backend's natural order.
  fn find_all(&self) -> impl Future<Output = Result<Vec<T>, Self::Error>> + Send + '_;

  /// Remove `entity` if it is stored. Returns the removed entity, or `None`
  /// if it was never saved or is already gone.
  fn delete(&self, entity: T) -> impl Future<Output = Result<Option<T>, Self::Error>> + Send + '_;

  /// Remove the entity with this id. Returns what was removed.
  fn delete_by_id(
    &self,
    id: T::Id,
  ) -> impl Future<Output = Result<Option<T>, Self::Error>> + Send + '_;

  fn count(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}

/// [`Repository`] over opinions, plus a filtered read by movie.
pub trait OpinionRepository: Repository<Opinion> {
  /// All opinions whose movie reference equals `movie_id`. Empty if none
  /// match or the movie does not exist. The filter runs in the store.
  fn find_by_movie_id(
    &self,
    movie_id: MovieId,
  ) -> impl Future<Output = Result<Vec<Opinion>, Self::Error>> + Send + '_;
}
