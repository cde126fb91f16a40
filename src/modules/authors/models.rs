use bookstore_http::{Checks, FieldError, Validate};
use serde::{Deserialize, Serialize};

use crate::modules::MAX_TEXT_LEN;

/// Row of the `authors` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Author {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub phone_number: i64,
}

/// Request body for creating or replacing an author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorPayload {
    pub name: String,
    pub surname: String,
    /// Accepted range is 2 through 14 inclusive
    pub phone_number: i64,
}

impl Validate for AuthorPayload {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        Checks::new()
            .length("name", &self.name, 1, MAX_TEXT_LEN)
            .length("surname", &self.surname, 1, MAX_TEXT_LEN)
            .between("phone_number", self.phone_number, 1, 15)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(phone_number: i64) -> AuthorPayload {
        AuthorPayload {
            name: "Frank".to_string(),
            surname: "Herbert".to_string(),
            phone_number,
        }
    }

    #[test]
    fn phone_number_bounds_are_exclusive() {
        assert!(author(2).validate().is_ok());
        assert!(author(14).validate().is_ok());

        for phone_number in [1, 15] {
            let errors = author(phone_number).validate().unwrap_err();
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, "phone_number");
        }
    }

    #[test]
    fn names_are_required() {
        let payload = AuthorPayload {
            name: String::new(),
            surname: "s".repeat(MAX_TEXT_LEN + 1),
            phone_number: 0,
        };
        let fields: Vec<_> = payload
            .validate()
            .unwrap_err()
            .into_iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, vec!["name", "surname", "phone_number"]);
    }
}
