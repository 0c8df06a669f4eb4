//! SQLite backend for the Reel review store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime.

mod movies;
mod opinions;
mod rows;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use movies::SqliteMovieStore;
pub use opinions::SqliteOpinionStore;
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
