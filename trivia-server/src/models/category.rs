//! Category records

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Category record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
}

impl Category {
    pub fn new(id: i32, kind: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
        }
    }
}

/// Category id -> label, serialized as a JSON object keyed by id.
pub type CategoryMap = BTreeMap<i32, String>;

/// Build the id -> label map for a set of categories.
pub fn category_map(categories: Vec<Category>) -> CategoryMap {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}
