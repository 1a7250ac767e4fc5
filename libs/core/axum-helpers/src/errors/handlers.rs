use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::ErrorResponse;

/// Fallback handler producing a JSON 404.
pub async fn not_found() -> Response {
    error_status(
        StatusCode::NOT_FOUND,
        "NotFound",
        "The requested resource was not found",
    )
}

/// Handler producing a JSON 405.
pub async fn method_not_allowed() -> Response {
    error_status(
        StatusCode::METHOD_NOT_ALLOWED,
        "MethodNotAllowed",
        "The HTTP method is not allowed for this resource",
    )
}

fn error_status(status: StatusCode, error: &str, message: &str) -> Response {
    let body = Json(ErrorResponse {
        error: error.to_string(),
        message: message.to_string(),
        details: None,
    });

    (status, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_not_found_status() {
        assert_eq!(not_found().await.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_method_not_allowed_status() {
        assert_eq!(
            method_not_allowed().await.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
    }
}
