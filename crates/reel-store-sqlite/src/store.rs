//! [`SqliteStore`] — the shared SQLite handle behind both entity stores.

use std::path::Path;

use rusqlite::Transaction;
use tracing::debug;

use crate::{Result, SqliteMovieStore, SqliteOpinionStore, schema::SCHEMA};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Reel review store backed by a single SQLite database.
///
/// Cloning is cheap — the inner connection is reference-counted. The movie
/// and opinion stores handed out by [`movies`](Self::movies) and
/// [`opinions`](Self::opinions) share the same connection.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref().to_path_buf();
    debug!(?path, "opening sqlite store");
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  pub fn movies(&self) -> SqliteMovieStore { SqliteMovieStore::new(self.conn.clone()) }

  pub fn opinions(&self) -> SqliteOpinionStore {
    SqliteOpinionStore::new(self.conn.clone())
  }
}

// ─── Unit of work ────────────────────────────────────────────────────────────

/// Run `work` inside a fresh transaction on `conn`.
///
/// The transaction commits only if `work` succeeds. On any error the
/// [`Transaction`] is dropped, which rolls it back.
pub(crate) async fn unit_of_work<F, R>(
  conn: &tokio_rusqlite::Connection,
  work: F,
) -> Result<R>
where
  F: FnOnce(&Transaction<'_>) -> rusqlite::Result<R> + Send + 'static,
  R: Send + 'static,
{
  let out = conn
    .call(move |conn| {
      let tx = conn.transaction()?;
      let out = work(&tx)?;
      tx.commit()?;
      Ok(out)
    })
    .await?;
  Ok(out)
}
