pub mod handlers;

use serde::Serialize;
use utoipa::ToSchema;

/// Body shape shared by every error the plumbing emits.
///
/// `error` is a stable machine-readable identifier, `message` is for
/// humans, and `details` carries structured extras such as the field
/// map from a failed validation:
///
/// ```json
/// {
///   "error": "BadRequest",
///   "message": "Request validation failed",
///   "details": { "email": [{ "code": "email" }] }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
