//! Category endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::{IdPath, PageParam};
use crate::http::server::AppState;
use crate::models::{Category, Question};
use crate::trivia::{catalog, QuestionQuery};

/// Category list response
#[derive(Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: Vec<Category>,
    pub total_categories: usize,
}

/// Questions of one category
#[derive(Serialize)]
pub struct CategoryQuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: Option<Category>,
}

/// GET /categories - list all categories
async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoriesResponse>, ApiError> {
    let categories = catalog::list_categories(state.store.as_ref()).await?;

    Ok(Json(CategoriesResponse {
        success: true,
        total_categories: categories.len(),
        categories,
    }))
}

/// GET /categories/{id}/questions - paginated questions of one category
async fn category_questions(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
    PageParam(page): PageParam,
) -> Result<Json<CategoryQuestionsResponse>, ApiError> {
    let query = QuestionQuery::page(page).with_category(id);
    let result = catalog::list_questions(state.store.as_ref(), query).await?;

    Ok(Json(CategoryQuestionsResponse {
        success: true,
        questions: result.questions,
        total_questions: result.total_questions,
        current_category: result.current_category,
    }))
}

/// Category routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/categories/{id}/questions", get(category_questions))
}
