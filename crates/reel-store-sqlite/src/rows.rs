//! Row mapping between SQLite result rows and domain types.

use reel_core::{
  movie::{Movie, MovieId},
  opinion::{Opinion, OpinionId},
};
use rusqlite::Row;

pub const MOVIE_COLUMNS: &str = "id, title";

pub const OPINION_COLUMNS: &str = "id, description, reviewer, score, movie_id";

pub fn movie_from_row(row: &Row<'_>) -> rusqlite::Result<Movie> {
  Ok(Movie {
    id:    Some(MovieId(row.get(0)?)),
    title: row.get(1)?,
  })
}

pub fn opinion_from_row(row: &Row<'_>) -> rusqlite::Result<Opinion> {
  Ok(Opinion {
    id:          Some(OpinionId(row.get(0)?)),
    description: row.get(1)?,
    reviewer:    row.get(2)?,
    score:       row.get(3)?,
    movie_id:    row.get::<_, Option<i64>>(4)?.map(MovieId),
  })
}
