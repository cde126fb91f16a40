use bookstore_http::{Checks, FieldError, Validate};
use serde::{Deserialize, Serialize};

use crate::modules::MAX_TEXT_LEN;

/// Row of the `books` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    /// Assigned by the database on insert, never changes
    pub id: i64,
    pub title: String,
    /// Free-text author name; not linked to the authors table
    pub author: String,
    pub description: String,
    pub price: i64,
}

/// Request body for creating or replacing a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookPayload {
    pub title: String,
    pub author: String,
    pub description: String,
    pub price: i64,
}

impl Validate for BookPayload {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        Checks::new()
            .length("title", &self.title, 1, MAX_TEXT_LEN)
            .length("author", &self.author, 1, MAX_TEXT_LEN)
            .length("description", &self.description, 1, MAX_TEXT_LEN)
            .between("price", self.price, 0, 1000)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dune() -> BookPayload {
        BookPayload {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            description: "Desert planet".to_string(),
            price: 20,
        }
    }

    fn failing_fields(payload: &BookPayload) -> Vec<String> {
        payload
            .validate()
            .unwrap_err()
            .into_iter()
            .map(|e| e.field)
            .collect()
    }

    #[test]
    fn accepts_valid_book() {
        assert!(dune().validate().is_ok());
    }

    #[test]
    fn price_bounds_are_exclusive() {
        for price in [1, 999] {
            assert!(BookPayload { price, ..dune() }.validate().is_ok());
        }
        for price in [0, 1000, -5] {
            assert_eq!(failing_fields(&BookPayload { price, ..dune() }), vec!["price"]);
        }
    }

    #[test]
    fn text_fields_are_bounded() {
        let longest = "x".repeat(MAX_TEXT_LEN);
        assert!(BookPayload {
            description: longest,
            ..dune()
        }
        .validate()
        .is_ok());

        let payload = BookPayload {
            title: String::new(),
            author: "x".repeat(MAX_TEXT_LEN + 1),
            ..dune()
        };
        assert_eq!(failing_fields(&payload), vec!["title", "author"]);
    }
}
