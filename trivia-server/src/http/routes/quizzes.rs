//! Quiz endpoint

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{IntField, Question, ValidationError};
use crate::trivia::quiz;

/// Category picked on the play screen; id 0 is "All".
///
/// The frontend sends `{"id": .., "type": ..}`, older clients a bare id.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum QuizCategory {
    Id(IntField),
    Object { id: Option<IntField> },
}

impl QuizCategory {
    fn id(&self) -> Option<IntField> {
        match self {
            Self::Id(id) => Some(id.clone()),
            Self::Object { id } => id.clone(),
        }
    }
}

/// Body of `POST /quizzes`
#[derive(Debug, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i32>,
    pub quiz_category: Option<QuizCategory>,
}

impl QuizRequest {
    /// Category to draw from, `None` for every category.
    fn category(&self) -> Result<Option<i32>, ValidationError> {
        let id = match self.quiz_category.as_ref().and_then(QuizCategory::id) {
            None => return Ok(None),
            Some(IntField::Text(s)) if s.is_empty() => return Ok(None),
            Some(field) => field.into_i32("quiz_category.id")?,
        };

        Ok((id != quiz::ALL_CATEGORIES).then_some(id))
    }
}

/// Next quiz question; `question` is null once the quiz is exhausted.
#[derive(Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// POST /quizzes - next unseen question for a category
async fn next_question(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<QuizRequest>,
) -> Result<Json<QuizResponse>, ApiError> {
    let category = req.category()?;

    let question = quiz::next_question(
        state.store.as_ref(),
        category,
        &req.previous_questions,
        &*state.rng,
    )
    .await?;

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

/// Quiz routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/quizzes", post(next_question))
}
