use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::types::user;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SignIn {
    pub(crate) access_token: String,
    pub(crate) expires_in: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct User {
    pub(crate) id: Uuid,
    pub(crate) username: String,
    pub(crate) created_at: DateTime<Utc>,
    pub(crate) modified_at: DateTime<Utc>,
}

impl From<&user::User> for User {
    fn from(user: &user::User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            created_at: user.created_at,
            modified_at: user.modified_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ErrorBody {
    pub(crate) message: ErrorMessage,
    pub(crate) error: &'static str,
    pub(crate) help: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum ErrorMessage {
    Text(String),
    Fields(Vec<FieldErrors>),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub(crate) struct FieldErrors {
    pub(crate) property: String,
    pub(crate) constraints: Vec<Constraint>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub(crate) enum Constraint {
    Message(String),
    Nested(FieldErrors),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_serializes_flat_message() {
        let body = ErrorBody {
            message: ErrorMessage::Text("Unauthorized".into()),
            error: "ERROR_UNAUTHORIZED",
            help: "none",
        };

        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["message"], "Unauthorized");
        assert_eq!(value["error"], "ERROR_UNAUTHORIZED");
        assert_eq!(value["help"], "none");
    }

    #[test]
    fn error_body_serializes_field_errors() {
        let body = ErrorBody {
            message: ErrorMessage::Fields(vec![FieldErrors {
                property: "username".into(),
                constraints: vec![Constraint::Message("username must be 3-20 characters".into())],
            }]),
            error: "ERROR_UNPROCESSABLE_ENTITY",
            help: "none",
        };

        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["message"][0]["property"], "username");
        assert_eq!(
            value["message"][0]["constraints"][0],
            "username must be 3-20 characters"
        );
    }

    #[test]
    fn nested_constraints_serialize_recursively() {
        let body = ErrorBody {
            message: ErrorMessage::Fields(vec![FieldErrors {
                property: "profile".into(),
                constraints: vec![Constraint::Nested(FieldErrors {
                    property: "age".into(),
                    constraints: vec![Constraint::Message("age must be between 18 and 120".into())],
                })],
            }]),
            error: "ERROR_UNPROCESSABLE_ENTITY",
            help: "none",
        };

        let value = serde_json::to_value(&body).unwrap();

        assert_eq!(value["message"][0]["constraints"][0]["property"], "age");
    }
}
