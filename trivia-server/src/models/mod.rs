//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod category;
pub mod question;
pub mod pagination;

pub use validation::ValidationError;
pub use category::{category_map, Category, CategoryMap};
pub use question::{IntField, NewQuestion, Question, QuestionFilter, QuestionInput};
pub use pagination::{Paginated, Pagination, PaginationParams, QUESTIONS_PER_PAGE};
