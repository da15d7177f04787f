//! In-memory store
//!
//! Keeps categories and questions in id-ordered maps. Used by the tests and
//! by `trivia --memory`.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::TriviaStore;
use crate::db::DbError;
use crate::models::{Category, NewQuestion, Question, QuestionFilter};

/// Categories shipped with the trivia frontend.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];

#[derive(Debug, Default)]
struct Inner {
    categories: BTreeMap<i32, Category>,
    questions: BTreeMap<i32, Question>,
    next_id: i32,
}

/// Store held entirely in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with the default categories (ids 1-6) and no questions.
    pub fn with_default_categories() -> Self {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .zip(1..)
            .map(|(kind, id)| Category::new(id, *kind));
        Self::with_categories(categories)
    }

    pub fn with_categories(categories: impl IntoIterator<Item = Category>) -> Self {
        let categories = categories.into_iter().map(|c| (c.id, c)).collect();
        Self {
            inner: RwLock::new(Inner {
                categories,
                questions: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn categories(&self) -> Result<Vec<Category>, DbError> {
        Ok(self.inner.read().await.categories.values().cloned().collect())
    }

    async fn category(&self, id: i32) -> Result<Option<Category>, DbError> {
        Ok(self.inner.read().await.categories.get(&id).cloned())
    }

    async fn questions(&self, filter: &QuestionFilter) -> Result<Vec<Question>, DbError> {
        let inner = self.inner.read().await;
        Ok(inner
            .questions
            .values()
            .filter(|q| filter.matches(q))
            .cloned()
            .collect())
    }

    async fn question(&self, id: i32) -> Result<Option<Question>, DbError> {
        Ok(self.inner.read().await.questions.get(&id).cloned())
    }

    async fn insert_question(&self, new: &NewQuestion) -> Result<Question, DbError> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id.max(1);
        inner.next_id = id
            .checked_add(1)
            .ok_or_else(|| DbError::Unavailable("question ids exhausted".into()))?;

        let question = Question {
            id,
            question: new.question.clone(),
            answer: new.answer.clone(),
            category: new.category,
            difficulty: new.difficulty,
        };
        inner.questions.insert(id, question.clone());
        Ok(question)
    }

    async fn delete_question(&self, id: i32) -> Result<(), DbError> {
        self.inner
            .write()
            .await
            .questions
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DbError::NotFound {
                resource: "question",
                id: id.to_string(),
            })
    }
}
