//! [`ReviewService`] — the business operations over movies and opinions.
//!
//! The service owns no state of its own. Each operation is a sequence of
//! independent store calls; none of them are wrapped in a shared transaction.

use tracing::{debug, info};

use crate::{
  Error, Result,
  movie::{Movie, MovieId},
  opinion::{Opinion, validate_score},
  store::{OpinionRepository, Repository},
};

/// Composes a movie store and an opinion store.
///
/// Both stores are injected at construction; the service never opens or
/// manages a store handle itself.
#[derive(Debug, Clone)]
pub struct ReviewService<M, O> {
  movies:   M,
  opinions: O,
}

impl<M, O> ReviewService<M, O>
where
  M: Repository<Movie>,
  O: OpinionRepository,
{
  pub fn new(movies: M, opinions: O) -> Self { Self { movies, opinions } }

  /// Persist a new movie titled `title`.
  ///
  /// Neither duplicate nor blank titles are rejected here.
  pub async fn register_movie(&self, title: impl Into<String>) -> Result<Movie> {
    let movie = self
      .movies
      .save(Movie::new(title))
      .await
      .map_err(Error::store)?;
    info!(id = ?movie.id, title = %movie.title, "registered movie");
    Ok(movie)
  }

  /// Every opinion left by `reviewer`, compared case-insensitively.
  ///
  /// An absent reviewer yields an empty list without reading the store.
  pub async fn opinions_by_reviewer(&self, reviewer: Option<&str>) -> Result<Vec<Opinion>> {
    let Some(reviewer) = reviewer else {
      return Ok(Vec::new());
    };

    let mut opinions = self.opinions.find_all().await.map_err(Error::store)?;
    opinions.retain(|o| o.is_by(reviewer));
    debug!(reviewer, matches = opinions.len(), "filtered opinions by reviewer");
    Ok(opinions)
  }

  /// Attach a new opinion to the movie with id `movie_id`.
  ///
  /// Fails with [`Error::MovieNotFound`] if the movie does not exist and with
  /// [`Error::ScoreOutOfRange`] for a score outside `0..=10`; nothing is
  /// persisted in either case. A missing movie is reported even when the
  /// score is also invalid. The existence check and the insert are two
  /// separate store calls.
  pub async fn add_opinion_to_movie(
    &self,
    movie_id: MovieId,
    description: Option<String>,
    reviewer: impl Into<String>,
    score: Option<i32>,
  ) -> Result<Opinion> {
    let movie = self
      .movies
      .find_by_id(movie_id)
      .await
      .map_err(Error::store)?
      .ok_or_else(|| {
        debug!(%movie_id, "opinion target movie does not exist");
        Error::MovieNotFound(movie_id)
      })?;

    let score = score.map(validate_score).transpose()?;

    // The movie came from the store, so its id is always populated.
    let target = movie.id.unwrap_or(movie_id);
    let opinion = self
      .opinions
      .save(Opinion::new(target, description, reviewer, score))
      .await
      .map_err(Error::store)?;

    info!(id = ?opinion.id, %movie_id, "added opinion");
    Ok(opinion)
  }

  /// Titles of movies with at least one opinion scored at or below 3.
  ///
  /// Movies without opinions, or whose opinions are all unscored or above the
  /// threshold, are excluded. Issues one opinion query per movie.
  pub async fn movies_with_low_score(&self) -> Result<Vec<String>> {
    let movies = self.movies.find_all().await.map_err(Error::store)?;

    let mut titles = Vec::new();
    for movie in movies {
      let opinions = self.opinions_for_movie(&movie).await?;
      if opinions.iter().any(Opinion::is_low) {
        titles.push(movie.title);
      }
    }
    Ok(titles)
  }

  /// The opinions attached to `movie`. An unsaved movie has none.
  pub async fn opinions_for_movie(&self, movie: &Movie) -> Result<Vec<Opinion>> {
    match movie.id {
      Some(id) => self.opinions.find_by_movie_id(id).await.map_err(Error::store),
      None => Ok(Vec::new()),
    }
  }

  pub async fn list_movies(&self) -> Result<Vec<Movie>> {
    self.movies.find_all().await.map_err(Error::store)
  }

  pub async fn list_opinions(&self) -> Result<Vec<Opinion>> {
    self.opinions.find_all().await.map_err(Error::store)
  }

  /// Total stored opinions.
  pub async fn opinion_count(&self) -> Result<u64> {
    self.opinions.count().await.map_err(Error::store)
  }
}
