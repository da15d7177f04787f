//! Category repository (read-only)

use sqlx::PgPool;

use super::DbError;
use crate::models::Category;

/// Category repository
pub struct CategoryRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CategoryRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all categories ordered by id.
    pub async fn list(&self) -> Result<Vec<Category>, DbError> {
        let categories = sqlx::query_as::<_, Category>(
            r#"SELECT id, type FROM categories ORDER BY id"#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(categories)
    }

    /// Get a single category, `None` if it doesn't exist.
    pub async fn get(&self, id: i32) -> Result<Option<Category>, DbError> {
        let category = sqlx::query_as::<_, Category>(
            r#"SELECT id, type FROM categories WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // cargo test -p trivia-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_is_ordered_by_id() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url, &crate::db::PoolSettings::default())
            .await
            .expect("pool creation failed");

        let categories = CategoryRepo::new(&pool).list().await.expect("list failed");
        assert!(categories.windows(2).all(|w| w[0].id < w[1].id));
    }
}
