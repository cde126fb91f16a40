use bookstore_http::{Checks, FieldError, Validate};
use serde::{Deserialize, Serialize};

use crate::modules::MAX_TEXT_LEN;

/// Row of the `tags` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tag {
    pub id: i64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagPayload {
    pub title: String,
}

impl Validate for TagPayload {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        Checks::new()
            .length("title", &self.title, 1, MAX_TEXT_LEN)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_must_be_present_and_short() {
        let ok = TagPayload {
            title: "sci-fi".to_string(),
        };
        assert!(ok.validate().is_ok());

        for title in [String::new(), "t".repeat(MAX_TEXT_LEN + 1)] {
            let errors = TagPayload { title }.validate().unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "title");
        }
    }
}
