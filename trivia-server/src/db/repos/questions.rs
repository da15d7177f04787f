//! Question repository
//!
//! Handles question listing and mutation:
//! - list/page: one parameterized query covers every filter combination
//! - page: COUNT(*) OVER() for the total (no second query)
//! - delete: NotFound when no row was removed

use sqlx::{PgPool, Row};

use super::DbError;
use crate::models::{NewQuestion, Paginated, Pagination, Question, QuestionFilter};

/// Optional filters, `$1` = category, `$2` = ILIKE pattern.
const FILTER_CLAUSE: &str = r#"
    WHERE ($1::int IS NULL OR category = $1)
      AND ($2::text IS NULL OR question ILIKE $2 ESCAPE '\')
"#;

/// Question repository
pub struct QuestionRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every question matching the filter, ordered by id.
    pub async fn list(&self, filter: &QuestionFilter) -> Result<Vec<Question>, DbError> {
        let sql = format!(
            "SELECT id, question, answer, category, difficulty FROM questions {} ORDER BY id",
            FILTER_CLAUSE
        );

        let questions = sqlx::query_as::<_, Question>(&sql)
            .bind(filter.category)
            .bind(filter.like_pattern())
            .fetch_all(self.pool)
            .await?;

        Ok(questions)
    }

    /// One page of questions matching the filter.
    ///
    /// The total comes from the window function, so a page past the end
    /// reports a total of 0 alongside its empty item list.
    pub async fn page(
        &self,
        filter: &QuestionFilter,
        page: Pagination,
    ) -> Result<Paginated<Question>, DbError> {
        let sql = format!(
            r#"
            SELECT id, question, answer, category, difficulty, COUNT(*) OVER() AS total
            FROM questions
            {}
            ORDER BY id
            LIMIT $3 OFFSET $4
            "#,
            FILTER_CLAUSE
        );

        let rows = sqlx::query(&sql)
            .bind(filter.category)
            .bind(filter.like_pattern())
            .bind(page.limit() as i64)
            .bind(page.offset() as i64)
            .fetch_all(self.pool)
            .await?;

        let total = rows.first().map(|r| r.get::<i64, _>("total")).unwrap_or(0);
        let items = rows
            .into_iter()
            .map(|r| Question {
                id: r.get("id"),
                question: r.get("question"),
                answer: r.get("answer"),
                category: r.get("category"),
                difficulty: r.get("difficulty"),
            })
            .collect();

        Ok(Paginated {
            items,
            total,
            page: page.page,
            per_page: page.per_page,
        })
    }

    /// Get a single question, `None` if it doesn't exist.
    pub async fn get(&self, id: i32) -> Result<Option<Question>, DbError> {
        let question = sqlx::query_as::<_, Question>(
            r#"SELECT id, question, answer, category, difficulty FROM questions WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(question)
    }

    /// Insert a question and return the stored record.
    pub async fn insert(&self, new: &NewQuestion) -> Result<Question, DbError> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, category, difficulty)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.category)
        .bind(new.difficulty)
        .fetch_one(self.pool)
        .await?;

        Ok(question)
    }

    /// Delete a question by id.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query(r#"DELETE FROM questions WHERE id = $1"#)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "question",
                id: id.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p trivia-server -- --ignored

    async fn pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        crate::db::create_pool(&url, &crate::db::PoolSettings::default())
            .await
            .expect("pool creation failed")
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_delete() {
        let pool = pool().await;
        let repo = QuestionRepo::new(&pool);

        let new = NewQuestion {
            question: "Test Question".into(),
            answer: "Test Answer".into(),
            category: 1,
            difficulty: 3,
        };
        let created = repo.insert(&new).await.expect("insert failed");
        assert_eq!(created.question, new.question);

        repo.delete(created.id).await.expect("delete failed");
        assert!(repo.get(created.id).await.expect("get failed").is_none());

        let err = repo.delete(created.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn page_total_matches_filtered_list() {
        let pool = pool().await;
        let repo = QuestionRepo::new(&pool);
        let filter = QuestionFilter::search("title");

        let all = repo.list(&filter).await.expect("list failed");
        let page = repo.page(&filter, Pagination::default()).await.expect("page failed");

        if !all.is_empty() {
            assert_eq!(page.total, all.len() as i64);
        }
        assert!(page.items.len() <= 10);
    }
}
