//! trivia-server: REST backend for the trivia app
//!
//! Serves categories and paginated questions, question create/delete,
//! text search, category listing and random quiz questions over a
//! pluggable [`store::TriviaStore`].

pub mod db;
pub mod error;
pub mod http;
pub mod models;
pub mod store;
pub mod trivia;

pub use error::{Error, Result};
pub use http::{build_router, run_server, AppState, ServerConfig};
pub use store::{MemoryStore, PgStore, TriviaStore};
