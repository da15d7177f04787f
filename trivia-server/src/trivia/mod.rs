//! Trivia operations over a [`TriviaStore`](crate::store::TriviaStore)
//!
//! - `catalog`: categories, paged/filtered question listing, create, delete
//! - `quiz`: random unseen question selection

pub mod catalog;
pub mod quiz;

pub use catalog::{QuestionPage, QuestionQuery};
