//! [`SqliteOpinionStore`] — the SQLite implementation of
//! [`OpinionRepository`].

use reel_core::{
  movie::MovieId,
  opinion::{Opinion, OpinionId},
  store::{OpinionRepository, Repository},
};
use rusqlite::OptionalExtension as _;

use crate::{
  Error, Result,
  rows::{OPINION_COLUMNS, opinion_from_row},
  store::unit_of_work,
};

/// Opinion CRUD over a connection shared with the owning
/// [`SqliteStore`](crate::SqliteStore).
#[derive(Clone)]
pub struct SqliteOpinionStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteOpinionStore {
  pub(crate) fn new(conn: tokio_rusqlite::Connection) -> Self { Self { conn } }
}

impl Repository<Opinion> for SqliteOpinionStore {
  type Error = Error;

  async fn save(&self, opinion: Opinion) -> Result<Opinion> {
    let description = opinion.description.clone();
    let reviewer    = opinion.reviewer.clone();
    let score       = opinion.score;
    let movie_id    = opinion.movie_id.map(|m| m.0);

    match opinion.id {
      None => {
        let id = unit_of_work(&self.conn, move |tx| {
          tx.execute(
            "INSERT INTO opinions (description, reviewer, score, movie_id)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![description, reviewer, score, movie_id],
          )?;
          Ok(tx.last_insert_rowid())
        })
        .await?;
        Ok(Opinion { id: Some(OpinionId(id)), ..opinion })
      }
      Some(id) => {
        let changed = unit_of_work(&self.conn, move |tx| {
          tx.execute(
            "UPDATE opinions
             SET description = ?1, reviewer = ?2, score = ?3, movie_id = ?4
             WHERE id = ?5",
            rusqlite::params![description, reviewer, score, movie_id, id.0],
          )
        })
        .await?;
        if changed == 0 {
          return Err(Error::OpinionNotFound(id));
        }
        Ok(opinion)
      }
    }
  }

  async fn find_by_id(&self, id: OpinionId) -> Result<Option<Opinion>> {
    unit_of_work(&self.conn, move |tx| {
      tx.query_row(
        &format!("SELECT {OPINION_COLUMNS} FROM opinions WHERE id = ?1"),
        rusqlite::params![id.0],
        opinion_from_row,
      )
      .optional()
    })
    .await
  }

  async fn find_all(&self) -> Result<Vec<Opinion>> {
    unit_of_work(&self.conn, |tx| {
      let mut stmt =
        tx.prepare(&format!("SELECT {OPINION_COLUMNS} FROM opinions ORDER BY id"))?;
      let rows = stmt
        .query_map([], opinion_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
      Ok(rows)
    })
    .await
  }

  async fn delete(&self, opinion: Opinion) -> Result<Option<Opinion>> {
    match opinion.id {
      Some(id) => self.delete_by_id(id).await,
      None => Ok(None),
    }
  }

  async fn delete_by_id(&self, id: OpinionId) -> Result<Option<Opinion>> {
    unit_of_work(&self.conn, move |tx| {
      let found = tx
        .query_row(
          &format!("SELECT {OPINION_COLUMNS} FROM opinions WHERE id = ?1"),
          rusqlite::params![id.0],
          opinion_from_row,
        )
        .optional()?;
      if found.is_some() {
        tx.execute("DELETE FROM opinions WHERE id = ?1", rusqlite::params![id.0])?;
      }
      Ok(found)
    })
    .await
  }

  async fn count(&self) -> Result<u64> {
    unit_of_work(&self.conn, |tx| {
      tx.query_row("SELECT COUNT(*) FROM opinions", [], |r| r.get::<_, u64>(0))
    })
    .await
  }
}

impl OpinionRepository for SqliteOpinionStore {
  async fn find_by_movie_id(&self, movie_id: MovieId) -> Result<Vec<Opinion>> {
    unit_of_work(&self.conn, move |tx| {
      let mut stmt = tx.prepare(&format!(
        "SELECT {OPINION_COLUMNS} FROM opinions WHERE movie_id = ?1 ORDER BY id"
      ))?;
      let rows = stmt
        .query_map(rusqlite::params![movie_id.0], opinion_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
      Ok(rows)
    })
    .await
  }
}
