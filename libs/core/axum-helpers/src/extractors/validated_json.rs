//! JSON extractor that validates the deserialized body.

use crate::errors::ErrorResponse;
use axum::{
    extract::{FromRequest, Json, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

/// Like `Json<T>`, but also runs the `validator` rules declared on `T`.
///
/// Deserialization failures keep axum's own rejection; validation failures
/// become a 400 with per-field details in the standard error envelope.
///
/// # Example
/// ```ignore
/// async fn create_user(ValidatedJson(input): ValidatedJson<CreateUser>) { ... }
/// ```
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| e.into_response())?;

        data.validate().map_err(validation_failure)?;

        Ok(ValidatedJson(data))
    }
}

fn validation_failure(errors: ValidationErrors) -> Response {
    let details: serde_json::Map<_, _> = errors
        .field_errors()
        .iter()
        .map(|(field, field_errors)| {
            let entries: Vec<_> = field_errors
                .iter()
                .map(|err| {
                    serde_json::json!({
                        "code": err.code,
                        "message": err.message,
                        "params": err.params,
                    })
                })
                .collect();
            (field.to_string(), serde_json::json!(entries))
        })
        .collect();

    let body = ErrorResponse {
        error: "BadRequest".to_string(),
        message: "Request validation failed".to_string(),
        details: Some(serde_json::Value::Object(details)),
    };

    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}
