//! Core types and trait definitions for the Reel movie review store.
//!
//! This crate is deliberately free of database dependencies. Storage backends
//! implement the traits in [`store`]; [`service::ReviewService`] composes them.

pub mod error;
pub mod movie;
pub mod opinion;
pub mod service;
pub mod store;

pub use error::{Error, Result};
pub use service::ReviewService;
