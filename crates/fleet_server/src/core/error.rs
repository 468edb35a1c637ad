use axum::{http::StatusCode, Json};
use fleet_error::SqlError;
use serde_json::json;
use tracing::error;

/// Every failed request answers with `{"error": "<message>"}`
pub type ErrorResponse = (StatusCode, Json<serde_json::Value>);

pub fn error_response(status: StatusCode, message: &str) -> ErrorResponse {
    (status, Json(json!({ "error": message })))
}

pub fn bad_request(message: &str) -> ErrorResponse {
    error_response(StatusCode::BAD_REQUEST, message)
}

pub fn unauthorized(message: &str) -> ErrorResponse {
    error_response(StatusCode::UNAUTHORIZED, message)
}

pub fn forbidden(message: &str) -> ErrorResponse {
    error_response(StatusCode::FORBIDDEN, message)
}

pub fn internal_server_error<E: std::fmt::Display>(e: E, message: &str) -> ErrorResponse {
    error!("{}: {}", message, e);
    error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
}

/// Map a database failure onto the matching status. `context` is only exposed for 500s.
pub fn sql_error_response(e: SqlError, context: &str) -> ErrorResponse {
    match e {
        SqlError::NotFound(message) => error_response(StatusCode::NOT_FOUND, &message),
        SqlError::UniqueViolation(message) | SqlError::Conflict(message) => {
            error_response(StatusCode::CONFLICT, &message)
        }
        other => internal_server_error(other, context),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sql_error_mapping() {
        let (status, Json(body)) =
            sql_error_response(SqlError::NotFound("Vehicle not found".to_string()), "ctx");
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Vehicle not found");

        let (status, Json(body)) = sql_error_response(
            SqlError::UniqueViolation("Email already exists".to_string()),
            "ctx",
        );
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"], "Email already exists");

        let (status, _) =
            sql_error_response(SqlError::Conflict("Vehicle is not available".to_string()), "ctx");
        assert_eq!(status, StatusCode::CONFLICT);

        // internals are not leaked
        let (status, Json(body)) = sql_error_response(
            SqlError::QueryError("syntax error near SELECT".to_string()),
            "Failed to retrieve drivers",
        );
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to retrieve drivers");
    }
}
