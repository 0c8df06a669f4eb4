//! [`SqliteMovieStore`] — the SQLite implementation of `Repository<Movie>`.

use reel_core::{
  movie::{Movie, MovieId},
  store::Repository,
};
use rusqlite::OptionalExtension as _;

use crate::{
  Error, Result,
  rows::{MOVIE_COLUMNS, movie_from_row},
  store::unit_of_work,
};

/// Movie CRUD over a connection shared with the owning
/// [`SqliteStore`](crate::SqliteStore).
#[derive(Clone)]
pub struct SqliteMovieStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteMovieStore {
  pub(crate) fn new(conn: tokio_rusqlite::Connection) -> Self { Self { conn } }
}

impl Repository<Movie> for SqliteMovieStore {
  type Error = Error;

  async fn save(&self, movie: Movie) -> Result<Movie> {
    let title = movie.title.clone();

    match movie.id {
      None => {
        let id = unit_of_work(&self.conn, move |tx| {
          tx.execute("INSERT INTO movies (title) VALUES (?1)", rusqlite::params![title])?;
          Ok(tx.last_insert_rowid())
        })
        .await?;
        Ok(Movie { id: Some(MovieId(id)), ..movie })
      }
      Some(id) => {
        let changed = unit_of_work(&self.conn, move |tx| {
          tx.execute(
            "UPDATE movies SET title = ?1 WHERE id = ?2",
            rusqlite::params![title, id.0],
          )
        })
        .await?;
        if changed == 0 {
          return Err(Error::MovieNotFound(id));
        }
        Ok(movie)
      }
    }
  }

  async fn find_by_id(&self, id: MovieId) -> Result<Option<Movie>> {
    unit_of_work(&self.conn, move |tx| {
      tx.query_row(
        &format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE id = ?1"),
        rusqlite::params![id.0],
        movie_from_row,
      )
      .optional()
    })
    .await
  }

  async fn find_all(&self) -> Result<Vec<Movie>> {
    unit_of_work(&self.conn, |tx| {
      let mut stmt = tx.prepare(&format!("SELECT {MOVIE_COLUMNS} FROM movies ORDER BY id"))?;
      let rows = stmt
        .query_map([], movie_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
      Ok(rows)
    })
    .await
  }

  async fn delete(&self, movie: Movie) -> Result<Option<Movie>> {
    match movie.id {
      Some(id) => self.delete_by_id(id).await,
      None => Ok(None),
    }
  }

  async fn delete_by_id(&self, id: MovieId) -> Result<Option<Movie>> {
    unit_of_work(&self.conn, move |tx| {
      let found = tx
        .query_row(
          &format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE id = ?1"),
          rusqlite::params![id.0],
          movie_from_row,
        )
        .optional()?;
      if found.is_some() {
        tx.execute("DELETE FROM movies WHERE id = ?1", rusqlite::params![id.0])?;
      }
      Ok(found)
    })
    .await
  }

  async fn count(&self) -> Result<u64> {
    unit_of_work(&self.conn, |tx| {
      tx.query_row("SELECT COUNT(*) FROM movies", [], |r| r.get::<_, u64>(0))
    })
    .await
  }
}
