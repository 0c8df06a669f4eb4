//! Integration tests for the SQLite stores against an in-memory database.

use reel_core::{
  movie::{Movie, MovieId},
  opinion::{Opinion, OpinionId},
  store::{OpinionRepository, Repository},
};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn opinion(movie_id: MovieId, reviewer: &str, score: Option<i32>) -> Opinion {
  Opinion::new(movie_id, Some("text".into()), reviewer, score)
}

// ─── Movies ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn save_assigns_id_and_find_returns_it() {
  let s = store().await;
  let movies = s.movies();

  let saved = movies.save(Movie::new("Alpha")).await.unwrap();
  let id = saved.id.expect("id assigned on insert");
  assert_eq!(saved.title, "Alpha");

  let fetched = movies.find_by_id(id).await.unwrap().unwrap();
  assert_eq!(fetched, saved);
}

#[tokio::test]
async fn find_missing_movie_returns_none() {
  let s = store().await;
  assert!(s.movies().find_by_id(MovieId(42)).await.unwrap().is_none());
}

#[tokio::test]
async fn ids_are_assigned_in_sequence() {
  let s = store().await;
  let movies = s.movies();

  let a = movies.save(Movie::new("Alpha")).await.unwrap();
  let b = movies.save(Movie::new("Beta")).await.unwrap();
  assert_eq!(a.id, Some(MovieId(1)));
  assert_eq!(b.id, Some(MovieId(2)));
}

#[tokio::test]
async fn save_with_id_updates_in_place() {
  let s = store().await;
  let movies = s.movies();

  let mut movie = movies.save(Movie::new("Alpah")).await.unwrap();
  movie.title = "Alpha".into();
  let updated = movies.save(movie.clone()).await.unwrap();

  assert_eq!(updated.id, movie.id);
  assert_eq!(movies.count().await.unwrap(), 1);
  let fetched = movies.find_by_id(movie.id.unwrap()).await.unwrap().unwrap();
  assert_eq!(fetched.title, "Alpha");
}

#[tokio::test]
async fn save_with_stale_id_fails() {
  let s = store().await;
  let stale = Movie { id: Some(MovieId(7)), title: "Ghost".into() };

  let err = s.movies().save(stale).await.unwrap_err();
  assert!(matches!(err, Error::MovieNotFound(MovieId(7))));
  assert_eq!(s.movies().count().await.unwrap(), 0);
}

#[tokio::test]
async fn find_all_and_count_movies() {
  let s = store().await;
  let movies = s.movies();
  for title in ["Alpha", "Beta", "Gamma"] {
    movies.save(Movie::new(title)).await.unwrap();
  }

  let all = movies.find_all().await.unwrap();
  let titles: Vec<_> = all.iter().map(|m| m.title.as_str()).collect();
  assert_eq!(titles, ["Alpha", "Beta", "Gamma"]);
  assert_eq!(movies.count().await.unwrap(), 3);
}

#[tokio::test]
async fn count_on_empty_store_is_zero() {
  let s = store().await;
  assert_eq!(s.movies().count().await.unwrap(), 0);
  assert_eq!(s.opinions().count().await.unwrap(), 0);
}

#[tokio::test]
async fn delete_movie_returns_removed() {
  let s = store().await;
  let movies = s.movies();
  let movie = movies.save(Movie::new("Alpha")).await.unwrap();

  let removed = movies.delete(movie.clone()).await.unwrap();
  assert_eq!(removed, Some(movie.clone()));
  assert_eq!(movies.count().await.unwrap(), 0);

  // Second delete finds nothing.
  assert!(movies.delete_by_id(movie.id.unwrap()).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_unsaved_movie_is_noop() {
  let s = store().await;
  let movies = s.movies();
  movies.save(Movie::new("Alpha")).await.unwrap();

  assert!(movies.delete(Movie::new("Alpha")).await.unwrap().is_none());
  assert_eq!(movies.count().await.unwrap(), 1);
}

#[tokio::test]
async fn deleted_movie_id_is_not_reused() {
  let s = store().await;
  let movies = s.movies();
  let first = movies.save(Movie::new("Alpha")).await.unwrap();
  movies.delete(first.clone()).await.unwrap();

  let second = movies.save(Movie::new("Beta")).await.unwrap();
  assert_ne!(second.id, first.id);
}

#[tokio::test]
async fn overlong_title_is_rejected_and_rolled_back() {
  let s = store().await;
  let movies = s.movies();
  let mut movie = movies.save(Movie::new("Alpha")).await.unwrap();

  movie.title = "x".repeat(256);
  let err = movies.save(movie.clone()).await.unwrap_err();
  assert!(matches!(err, Error::Database(_)));

  let fetched = movies.find_by_id(movie.id.unwrap()).await.unwrap().unwrap();
  assert_eq!(fetched.title, "Alpha");
}

// ─── Opinions ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn opinion_roundtrip_keeps_nullable_fields() {
  let s = store().await;
  let movie = s.movies().save(Movie::new("Alpha")).await.unwrap();
  let movie_id = movie.id.unwrap();

  let input = Opinion {
    id:          None,
    description: None,
    reviewer:    "x@y.com".into(),
    score:       None,
    movie_id:    Some(movie_id),
  };
  let saved = s.opinions().save(input).await.unwrap();
  assert!(saved.id.is_some());

  let fetched = s.opinions().find_by_id(saved.id.unwrap()).await.unwrap().unwrap();
  assert_eq!(fetched.description, None);
  assert_eq!(fetched.score, None);
  assert_eq!(fetched.movie_id, Some(movie_id));
}

#[tokio::test]
async fn opinion_without_movie_is_allowed() {
  let s = store().await;
  let input = Opinion {
    id:          None,
    description: Some("orphan".into()),
    reviewer:    "x@y.com".into(),
    score:       Some(5),
    movie_id:    None,
  };
  let saved = s.opinions().save(input).await.unwrap();
  assert_eq!(saved.movie_id, None);
}

#[tokio::test]
async fn opinion_referencing_missing_movie_fails() {
  let s = store().await;
  let err = s
    .opinions()
    .save(opinion(MovieId(99), "x@y.com", Some(5)))
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Database(_)));
  assert_eq!(s.opinions().count().await.unwrap(), 0);
}

#[tokio::test]
async fn overlong_reviewer_is_rejected() {
  let s = store().await;
  let movie = s.movies().save(Movie::new("Alpha")).await.unwrap();
  let reviewer = format!("{}@example.com", "a".repeat(60));

  let err = s
    .opinions()
    .save(opinion(movie.id.unwrap(), &reviewer, Some(5)))
    .await
    .unwrap_err();
  assert!(matches!(err, Error::Database(_)));
}

#[tokio::test]
async fn update_opinion_and_stale_update() {
  let s = store().await;
  let movie = s.movies().save(Movie::new("Alpha")).await.unwrap();
  let opinions = s.opinions();

  let mut saved = opinions
    .save(opinion(movie.id.unwrap(), "x@y.com", Some(5)))
    .await
    .unwrap();
  saved.score = Some(9);
  opinions.save(saved.clone()).await.unwrap();
  let fetched = opinions.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();
  assert_eq!(fetched.score, Some(9));

  let stale = Opinion { id: Some(OpinionId(500)), ..saved };
  let err = opinions.save(stale).await.unwrap_err();
  assert!(matches!(err, Error::OpinionNotFound(OpinionId(500))));
}

#[tokio::test]
async fn delete_opinion_by_id() {
  let s = store().await;
  let movie = s.movies().save(Movie::new("Alpha")).await.unwrap();
  let opinions = s.opinions();
  let saved = opinions
    .save(opinion(movie.id.unwrap(), "x@y.com", Some(5)))
    .await
    .unwrap();

  let removed = opinions.delete_by_id(saved.id.unwrap()).await.unwrap();
  assert_eq!(removed, Some(saved));
  assert_eq!(opinions.count().await.unwrap(), 0);
}

#[tokio::test]
async fn movie_with_opinions_cannot_be_deleted() {
  let s = store().await;
  let movie = s.movies().save(Movie::new("Alpha")).await.unwrap();
  s.opinions()
    .save(opinion(movie.id.unwrap(), "x@y.com", Some(5)))
    .await
    .unwrap();

  let err = s.movies().delete(movie).await.unwrap_err();
  assert!(matches!(err, Error::Database(_)));
  assert_eq!(s.movies().count().await.unwrap(), 1);
}

#[tokio::test]
async fn find_by_movie_id_filters() {
  let s = store().await;
  let alpha = s.movies().save(Movie::new("Alpha")).await.unwrap().id.unwrap();
  let beta = s.movies().save(Movie::new("Beta")).await.unwrap().id.unwrap();
  let opinions = s.opinions();

  opinions.save(opinion(alpha, "a@x.com", Some(1))).await.unwrap();
  opinions.save(opinion(beta, "b@x.com", Some(7))).await.unwrap();
  opinions.save(opinion(alpha, "c@x.com", Some(9))).await.unwrap();

  let for_alpha = opinions.find_by_movie_id(alpha).await.unwrap();
  assert_eq!(for_alpha.len(), 2);
  assert!(for_alpha.iter().all(|o| o.movie_id == Some(alpha)));

  let for_beta = opinions.find_by_movie_id(beta).await.unwrap();
  assert_eq!(for_beta.len(), 1);
  assert_eq!(for_beta[0].reviewer, "b@x.com");
}

#[tokio::test]
async fn find_by_unknown_movie_id_is_empty() {
  let s = store().await;
  assert!(s.opinions().find_by_movie_id(MovieId(3)).await.unwrap().is_empty());
}

#[tokio::test]
async fn stores_share_one_database() {
  let s = store().await;
  let movie = s.movies().save(Movie::new("Alpha")).await.unwrap();

  // A second handle from a clone sees the same rows.
  let clone = s.clone();
  assert_eq!(clone.movies().count().await.unwrap(), 1);
  assert!(clone.movies().find_by_id(movie.id.unwrap()).await.unwrap().is_some());
}
