//! Question and category persistence behind a trait
//!
//! Handlers only see `Arc<dyn TriviaStore>`, so tests can swap in
//! [`MemoryStore`] or a hand-written double.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::db::DbError;
use crate::models::{Category, NewQuestion, Paginated, Pagination, Question, QuestionFilter};

pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Category and question storage
#[async_trait]
pub trait TriviaStore: Send + Sync {
    /// All categories, ordered by id.
    async fn categories(&self) -> Result<Vec<Category>, DbError>;

    /// A single category, `None` if it doesn't exist.
    async fn category(&self, id: i32) -> Result<Option<Category>, DbError>;

    /// Every question passing the filter, ordered by id.
    async fn questions(&self, filter: &QuestionFilter) -> Result<Vec<Question>, DbError>;

    /// One page of the filtered questions.
    async fn question_page(
        &self,
        filter: &QuestionFilter,
        page: Pagination,
    ) -> Result<Paginated<Question>, DbError> {
        let questions = self.questions(filter).await?;
        Ok(page.paginate(questions))
    }

    /// A single question, `None` if it doesn't exist.
    async fn question(&self, id: i32) -> Result<Option<Question>, DbError>;

    /// Persist a new question, assigning its id.
    async fn insert_question(&self, new: &NewQuestion) -> Result<Question, DbError>;

    /// Remove a question. `DbError::NotFound` if there was nothing to remove.
    async fn delete_question(&self, id: i32) -> Result<(), DbError>;
}
