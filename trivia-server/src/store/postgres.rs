//! PostgreSQL-backed store

use async_trait::async_trait;
use sqlx::PgPool;

use super::TriviaStore;
use crate::db::{CategoryRepo, DbError, QuestionRepo};
use crate::models::{Category, NewQuestion, Paginated, Pagination, Question, QuestionFilter};

/// Store over a PostgreSQL pool, delegating to the repositories
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn categories(&self) -> Result<Vec<Category>, DbError> {
        CategoryRepo::new(&self.pool).list().await
    }

    async fn category(&self, id: i32) -> Result<Option<Category>, DbError> {
        CategoryRepo::new(&self.pool).get(id).await
    }

    async fn questions(&self, filter: &QuestionFilter) -> Result<Vec<Question>, DbError> {
        QuestionRepo::new(&self.pool).list(filter).await
    }

    // Paged in SQL rather than slicing the full list.
    async fn question_page(
        &self,
        filter: &QuestionFilter,
        page: Pagination,
    ) -> Result<Paginated<Question>, DbError> {
        QuestionRepo::new(&self.pool).page(filter, page).await
    }

    async fn question(&self, id: i32) -> Result<Option<Question>, DbError> {
        QuestionRepo::new(&self.pool).get(id).await
    }

    async fn insert_question(&self, new: &NewQuestion) -> Result<Question, DbError> {
        QuestionRepo::new(&self.pool).insert(new).await
    }

    async fn delete_question(&self, id: i32) -> Result<(), DbError> {
        QuestionRepo::new(&self.pool).delete(id).await
    }
}
