//! Error handling for the inventory service.
//!
//! `InventoryError` is the single error type shared by repositories, services
//! and handlers. It converts from the sqlx, validator and config errors the
//! service runs into, and renders itself as a JSON HTTP response.

use thiserror::Error;

/// The error type for every inventory operation.
#[derive(Error, Debug)]
pub enum InventoryError {
    /// A referenced item or collection id does not exist.
    #[error("Could not find {resource_type} with ID {resource_id}")]
    NotFound {
        resource_type: String,
        resource_id: String,
    },

    /// A uniqueness constraint rejected the write.
    #[error("{resource_type} already exists: {resource_id}")]
    AlreadyExists {
        resource_type: String,
        resource_id: String,
    },

    /// Payload or argument failed a declared constraint. The message lists
    /// every violated field as `field message`, comma-separated.
    #[error("{0}")]
    Validation(String),

    /// Configuration could not be loaded or is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Storage-layer failure (connection, query, migration).
    #[error("database error: {0}")]
    Database(String),

    /// IO errors (binding the listener, reading files).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Unexpected states.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Type alias for Results using InventoryError
pub type Result<T> = std::result::Result<T, InventoryError>;

impl InventoryError {
    #[must_use]
    pub fn not_found(resource_type: impl Into<String>, resource_id: impl ToString) -> Self {
        InventoryError::NotFound {
            resource_type: resource_type.into(),
            resource_id: resource_id.to_string(),
        }
    }

    #[must_use]
    pub fn item_not_found(id: i64) -> Self {
        Self::not_found("item", id)
    }

    #[must_use]
    pub fn collection_not_found(id: i64) -> Self {
        Self::not_found("collection", id)
    }

    #[must_use]
    pub fn already_exists(resource_type: impl Into<String>, resource_id: impl Into<String>) -> Self {
        InventoryError::AlreadyExists {
            resource_type: resource_type.into(),
            resource_id: resource_id.into(),
        }
    }

    /// Creates a validation error for a single field.
    #[must_use]
    pub fn validation(field: &str, message: &str) -> Self {
        InventoryError::Validation(format!("{field} {message}"))
    }

    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        InventoryError::Config(msg.into())
    }

    #[must_use]
    pub fn database(msg: impl Into<String>) -> Self {
        InventoryError::Database(msg.into())
    }

    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        InventoryError::Internal(msg.into())
    }

    /// Determines if this error is a client error (4xx-equivalent).
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            InventoryError::NotFound { .. }
                | InventoryError::AlreadyExists { .. }
                | InventoryError::Validation(_)
        )
    }
}

impl From<sqlx::Error> for InventoryError {
    fn from(err: sqlx::Error) -> Self {
        InventoryError::Database(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for InventoryError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        InventoryError::Database(format!("migration failed: {err}"))
    }
}

impl From<config::ConfigError> for InventoryError {
    fn from(err: config::ConfigError) -> Self {
        InventoryError::Config(err.to_string())
    }
}

impl From<validator::ValidationErrors> for InventoryError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut violations: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    format!("{field} {message}")
                })
            })
            .collect();
        violations.sort();

        InventoryError::Validation(violations.join(", "))
    }
}

impl From<axum::extract::rejection::JsonRejection> for InventoryError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        InventoryError::Validation(rejection.body_text())
    }
}

impl From<axum::extract::rejection::QueryRejection> for InventoryError {
    fn from(rejection: axum::extract::rejection::QueryRejection) -> Self {
        InventoryError::Validation(rejection.body_text())
    }
}

impl axum::response::IntoResponse for InventoryError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;
        use axum::Json;

        let (status, error_type) = match &self {
            InventoryError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            InventoryError::AlreadyExists { .. } => (StatusCode::CONFLICT, "already_exists"),
            InventoryError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            InventoryError::Config(_)
            | InventoryError::Database(_)
            | InventoryError::Io(_)
            | InventoryError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        // Storage details stay in the logs.
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "internal server error".to_string()
        } else {
            self.to_string()
        };

        let body = Json(serde_json::json!({
            "error": error_type,
            "message": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use validator::Validate;

    #[derive(Validate)]
    struct Payload {
        #[validate(required(message = "must not be null"))]
        name: Option<String>,
        #[validate(range(min = 0, message = "must be greater than or equal to 0"))]
        count: Option<i64>,
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<InventoryError>();
        assert_sync::<InventoryError>();
    }

    #[test]
    fn test_not_found_names_the_id() {
        let err = InventoryError::item_not_found(42);
        assert_eq!(err.to_string(), "Could not find item with ID 42");

        let err = InventoryError::collection_not_found(7);
        assert_eq!(err.to_string(), "Could not find collection with ID 7");
    }

    #[test]
    fn test_validation_errors_are_comma_joined() {
        let payload = Payload {
            name: None,
            count: Some(-1),
        };
        let err: InventoryError = payload.validate().unwrap_err().into();

        assert_eq!(
            err.to_string(),
            "count must be greater than or equal to 0, name must not be null"
        );
    }

    #[test]
    fn test_client_errors() {
        assert!(InventoryError::item_not_found(1).is_client_error());
        assert!(InventoryError::validation("name", "must not be null").is_client_error());
        assert!(InventoryError::already_exists("collection", "Dairy").is_client_error());
        assert!(!InventoryError::database("locked").is_client_error());
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (InventoryError::item_not_found(1), StatusCode::NOT_FOUND),
            (
                InventoryError::validation("count", "must be greater than or equal to 0"),
                StatusCode::BAD_REQUEST,
            ),
            (
                InventoryError::already_exists("collection", "Dairy"),
                StatusCode::CONFLICT,
            ),
            (
                InventoryError::database("disk I/O error"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }
}
