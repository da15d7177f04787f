//! Question records and validated question input

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Question record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Integer field that the web form may submit as a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IntField {
    Int(i64),
    Text(String),
}

impl IntField {
    /// Parse into an `i32`, naming `field` in any error.
    pub fn into_i32(self, field: &'static str) -> Result<i32, ValidationError> {
        let value = match self {
            Self::Int(n) => n,
            Self::Text(s) if s.is_empty() => return Err(ValidationError::Empty { field }),
            Self::Text(s) => s.trim().parse::<i64>().map_err(|_| ValidationError::InvalidFormat {
                field,
                reason: "must be an integer",
            })?,
        };

        i32::try_from(value).map_err(|_| ValidationError::InvalidFormat {
            field,
            reason: "out of range",
        })
    }
}

/// Raw question fields as submitted by a client
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionInput {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<IntField>,
    pub category: Option<IntField>,
}

/// Question ready to be inserted. All four fields are present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

impl NewQuestion {
    /// Validate raw input.
    ///
    /// Fields are checked in the order question, answer, difficulty,
    /// category; the first failure is returned.
    pub fn new(input: QuestionInput) -> Result<Self, ValidationError> {
        let question = required_text(input.question, "question")?;
        let answer = required_text(input.answer, "answer")?;
        let difficulty = input
            .difficulty
            .ok_or(ValidationError::Missing { field: "difficulty" })?
            .into_i32("difficulty")?;
        let category = input
            .category
            .ok_or(ValidationError::Missing { field: "category" })?
            .into_i32("category")?;

        Ok(Self {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

/// Filter over the question collection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionFilter {
    /// Case-insensitive substring of the question text
    pub search: Option<String>,
    /// Exact category id
    pub category: Option<i32>,
}

impl QuestionFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            category: None,
        }
    }

    pub fn category(id: i32) -> Self {
        Self {
            search: None,
            category: Some(id),
        }
    }

    /// Whether a question passes this filter.
    pub fn matches(&self, q: &Question) -> bool {
        if self.category.is_some_and(|id| q.category != id) {
            return false;
        }

        match &self.search {
            Some(term) => q.question.to_lowercase().contains(&term.to_lowercase()),
            None => true,
        }
    }

    /// `ILIKE` pattern for the search term, with wildcards in the term escaped.
    pub fn like_pattern(&self) -> Option<String> {
        self.search.as_ref().map(|term| {
            let escaped = term
                .replace('\\', "\\\\")
                .replace('%', "\\%")
                .replace('_', "\\_");
            format!("%{}%", escaped)
        })
    }
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    match value {
        None => Err(ValidationError::Missing { field }),
        Some(s) if s.is_empty() => Err(ValidationError::Empty { field }),
        Some(s) => Ok(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> QuestionInput {
        QuestionInput {
            question: Some("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?".into()),
            answer: Some("Maya Angelou".into()),
            difficulty: Some(IntField::Int(2)),
            category: Some(IntField::Int(4)),
        }
    }

    #[test]
    fn accepts_complete_input() {
        let q = NewQuestion::new(complete()).unwrap();
        assert_eq!(q.answer, "Maya Angelou");
        assert_eq!(q.difficulty, 2);
        assert_eq!(q.category, 4);
    }

    #[test]
    fn accepts_numeric_strings() {
        let input = QuestionInput {
            difficulty: Some(IntField::Text("5".into())),
            category: Some(IntField::Text("1".into())),
            ..complete()
        };
        let q = NewQuestion::new(input).unwrap();
        assert_eq!(q.difficulty, 5);
        assert_eq!(q.category, 1);
    }

    #[test]
    fn rejects_each_missing_field() {
        let cases = [
            (QuestionInput { question: None, ..complete() }, "question"),
            (QuestionInput { answer: None, ..complete() }, "answer"),
            (QuestionInput { difficulty: None, ..complete() }, "difficulty"),
            (QuestionInput { category: None, ..complete() }, "category"),
        ];

        for (input, expected) in cases {
            let err = NewQuestion::new(input).unwrap_err();
            assert_eq!(err, ValidationError::Missing { field: expected });
        }
    }

    #[test]
    fn rejects_empty_strings() {
        let input = QuestionInput {
            question: Some(String::new()),
            ..complete()
        };
        assert_eq!(
            NewQuestion::new(input).unwrap_err(),
            ValidationError::Empty { field: "question" }
        );

        let input = QuestionInput {
            category: Some(IntField::Text(String::new())),
            ..complete()
        };
        assert_eq!(
            NewQuestion::new(input).unwrap_err(),
            ValidationError::Empty { field: "category" }
        );
    }

    #[test]
    fn rejects_non_numeric_difficulty() {
        let input = QuestionInput {
            difficulty: Some(IntField::Text("hard".into())),
            ..complete()
        };
        let err = NewQuestion::new(input).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { field: "difficulty", .. }));
    }

    fn record(id: i32, text: &str, category: i32) -> Question {
        Question {
            id,
            question: text.into(),
            answer: "a".into(),
            category,
            difficulty: 1,
        }
    }

    #[test]
    fn filter_search_is_case_insensitive_on_question_text() {
        let filter = QuestionFilter::search("title");
        assert!(filter.matches(&record(1, "What movie earned Tom Hanks his TITLE?", 5)));
        assert!(filter.matches(&record(2, "Title of the book", 5)));
        assert!(!filter.matches(&Question {
            answer: "title".into(),
            ..record(3, "Unrelated", 5)
        }));
    }

    #[test]
    fn filter_combines_category_and_search() {
        let filter = QuestionFilter {
            search: Some("who".into()),
            category: Some(4),
        };
        assert!(filter.matches(&record(1, "Who invented Peanut Butter?", 4)));
        assert!(!filter.matches(&record(2, "Who invented Peanut Butter?", 3)));
        assert!(!filter.matches(&record(3, "What is the capital?", 4)));
        assert!(QuestionFilter::all().matches(&record(4, "anything", 9)));
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(QuestionFilter::all().like_pattern(), None);
        assert_eq!(
            QuestionFilter::search("100%_sure\\").like_pattern().as_deref(),
            Some("%100\\%\\_sure\\\\%")
        );
    }

    #[test]
    fn deserializes_mixed_json() {
        let input: QuestionInput = serde_json::from_str(
            r#"{"question": "Q", "answer": "A", "difficulty": 3, "category": "2"}"#,
        )
        .unwrap();
        assert_eq!(input.difficulty, Some(IntField::Int(3)));
        assert_eq!(input.category, Some(IntField::Text("2".into())));

        let input: QuestionInput =
            serde_json::from_str(r#"{"question": null, "answer": "A"}"#).unwrap();
        assert!(input.question.is_none());
    }
}
