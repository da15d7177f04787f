//! Category listing, question paging/filtering, create and delete

use crate::error::{Error, Result};
use crate::models::{
    category_map, Category, CategoryMap, NewQuestion, Pagination, Question, QuestionFilter,
    ValidationError,
};
use crate::store::TriviaStore;

/// What to list: a page number plus optional filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionQuery {
    /// Requested page, validated when listing
    pub page: i64,
    /// Case-insensitive substring of the question text
    pub search: Option<String>,
    /// Category id; must exist
    pub category: Option<i32>,
}

impl QuestionQuery {
    pub fn page(page: i64) -> Self {
        Self {
            page,
            search: None,
            category: None,
        }
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn with_category(mut self, id: i32) -> Self {
        self.category = Some(id);
        self
    }
}

/// One page of questions with listing context
#[derive(Debug, Clone)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    /// Size of the filtered set, not of this page
    pub total_questions: i64,
    /// The filtered category, if any
    pub current_category: Option<Category>,
    /// Every category, unfiltered
    pub categories: CategoryMap,
}

/// All categories, ordered by id.
pub async fn list_categories(store: &dyn TriviaStore) -> Result<Vec<Category>> {
    Ok(store.categories().await?)
}

/// Every category as an id -> label map.
pub async fn category_map_of(store: &dyn TriviaStore) -> Result<CategoryMap> {
    Ok(category_map(store.categories().await?))
}

/// List one page of questions.
///
/// Checks run in order: page number, category existence, non-empty window.
/// An unknown category is `NotFound`; an empty window is a validation error.
pub async fn list_questions(store: &dyn TriviaStore, query: QuestionQuery) -> Result<QuestionPage> {
    let page = Pagination::new(query.page)?;

    let current_category = match query.category {
        Some(id) => {
            let category = store
                .category(id)
                .await?
                .ok_or_else(|| Error::not_found("category", id))?;
            Some(category)
        }
        None => None,
    };

    let filter = QuestionFilter {
        search: query.search,
        category: query.category,
    };
    let result = store.question_page(&filter, page).await?;

    if result.is_empty() {
        return Err(ValidationError::EmptyPage { page: query.page }.into());
    }

    tracing::debug!(
        page = page.page,
        returned = result.items.len(),
        total = result.total,
        "listed questions"
    );

    Ok(QuestionPage {
        questions: result.items,
        total_questions: result.total,
        current_category,
        categories: category_map_of(store).await?,
    })
}

/// Persist a validated question.
pub async fn create_question(store: &dyn TriviaStore, new: NewQuestion) -> Result<Question> {
    let question = store.insert_question(&new).await?;
    tracing::info!(id = question.id, category = question.category, "question created");
    Ok(question)
}

/// Delete a question, returning its id.
///
/// Missing ids are `NotFound`; any other store failure surfaces as
/// `Error::Store`.
pub async fn delete_question(store: &dyn TriviaStore, id: i32) -> Result<i32> {
    if store.question(id).await?.is_none() {
        return Err(Error::not_found("question", id));
    }

    store.delete_question(id).await?;
    tracing::info!(id, "question deleted");
    Ok(id)
}
