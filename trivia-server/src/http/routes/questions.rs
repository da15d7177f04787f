//! Question endpoints
//!
//! `POST /questions` is overloaded: a body with a non-empty `searchTerm`
//! searches, anything else creates a question.

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::{IdPath, JsonBody, PageParam};
use crate::http::server::AppState;
use crate::models::{Category, CategoryMap, NewQuestion, Question, QuestionInput};
use crate::trivia::{catalog, QuestionPage, QuestionQuery};

/// Body of `POST /questions`
#[derive(Debug, Deserialize)]
pub struct QuestionsPostRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
    #[serde(flatten)]
    pub question: QuestionInput,
}

/// Paged question listing
#[derive(Serialize)]
pub struct QuestionsResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    pub current_category: Option<Category>,
    pub categories: CategoryMap,
}

impl From<QuestionPage> for QuestionsResponse {
    fn from(page: QuestionPage) -> Self {
        Self {
            success: true,
            questions: page.questions,
            total_questions: page.total_questions,
            current_category: page.current_category,
            categories: page.categories,
        }
    }
}

/// Created question
#[derive(Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub message: &'static str,
    pub question: Question,
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum QuestionsPostResponse {
    Search(QuestionsResponse),
    Created(CreatedResponse),
}

/// Deleted question id
#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub id: i32,
}

/// GET /questions - paginated list of every question
async fn list_questions(
    State(state): State<Arc<AppState>>,
    PageParam(page): PageParam,
) -> Result<Json<QuestionsResponse>, ApiError> {
    let result = catalog::list_questions(state.store.as_ref(), QuestionQuery::page(page)).await?;
    Ok(Json(result.into()))
}

/// POST /questions - search by `searchTerm`, or create a question
async fn post_questions(
    State(state): State<Arc<AppState>>,
    PageParam(page): PageParam,
    JsonBody(req): JsonBody<QuestionsPostRequest>,
) -> Result<Json<QuestionsPostResponse>, ApiError> {
    match req.search_term {
        Some(term) if !term.is_empty() => {
            let query = QuestionQuery::page(page).with_search(term);
            let result = catalog::list_questions(state.store.as_ref(), query).await?;
            Ok(Json(QuestionsPostResponse::Search(result.into())))
        }
        _ => {
            let new = NewQuestion::new(req.question)?;
            let question = catalog::create_question(state.store.as_ref(), new).await?;
            Ok(Json(QuestionsPostResponse::Created(CreatedResponse {
                success: true,
                message: "Question Created Successfully",
                question,
            })))
        }
    }
}

/// DELETE /questions/{id} - delete a question
async fn delete_question(
    State(state): State<Arc<AppState>>,
    IdPath(id): IdPath,
) -> Result<Json<DeletedResponse>, ApiError> {
    let id = catalog::delete_question(state.store.as_ref(), id).await?;
    Ok(Json(DeletedResponse { success: true, id }))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(post_questions))
        .route("/questions/{id}", delete(delete_question))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_body_splits_search_and_fields() {
        let req: QuestionsPostRequest =
            serde_json::from_str(r#"{"searchTerm": "title"}"#).unwrap();
        assert_eq!(req.search_term.as_deref(), Some("title"));
        assert!(req.question.question.is_none());

        let req: QuestionsPostRequest = serde_json::from_str(
            r#"{"question": "Q", "answer": "A", "difficulty": 1, "category": "3"}"#,
        )
        .unwrap();
        assert!(req.search_term.is_none());
        assert!(NewQuestion::new(req.question).is_ok());
    }
}
