use bookstore_http::{Checks, FieldError, Validate};
use serde::{Deserialize, Serialize};

use crate::modules::MAX_TEXT_LEN;

/// Row of the `category` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub title: String,
}

impl Validate for CategoryPayload {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        Checks::new()
            .length("title", &self.title, 1, MAX_TEXT_LEN)
            .finish()
    }
}
