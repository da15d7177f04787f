//! Database layer - connection pool and repositories
//!
//! # Design Principles
//!
//! - Connection pool (max 5 connections by default)
//! - Filtering and paging happen in SQL, ordered by id
//! - Schema is provisioned externally; nothing here creates tables

pub mod pool;
pub mod repos;

pub use pool::{create_pool, PoolSettings};
pub use repos::*;
