use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// User entity - matches SQL schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct User {
    /// Unique identifier, assigned at creation and immutable thereafter
    pub id: Uuid,
    /// Display name, mutable
    pub username: String,
    /// Contact address, set at creation; no update path exists for it
    pub email: String,
    /// Stored as-is (never exposed in API responses)
    #[serde(skip_serializing)]
    pub password: String,
    /// Creation timestamp, immutable
    pub created_at: DateTime<Utc>,
    /// Present in the schema but never written by any current operation
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new user with a fresh identifier and creation timestamp
    pub fn new(username: String, email: String, password: String) -> Self {
        Self {
            id: Uuid::now_v7(),
            username,
            email,
            password,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Apply a partial update.
    ///
    /// A field is overwritten only when the incoming value is non-empty;
    /// email and both timestamps are never touched.
    pub fn apply_update(&mut self, update: UpdateUser) {
        if let Some(username) = update.username.filter(|u| !u.is_empty()) {
            self.username = username;
        }
        if let Some(password) = update.password.filter(|p| !p.is_empty()) {
            self.password = password;
        }
    }
}

/// User response DTO (without password)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// DTO for creating a new user
///
/// All three fields are required but free text; no format or length
/// rules are applied to their content.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// DTO for updating an existing user
///
/// Both fields are optional free text; an absent or empty field leaves
/// the stored value unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "alice".to_string(),
            "a@x.com".to_string(),
            "pw1".to_string(),
        )
    }

    #[test]
    fn test_new_user_has_id_and_created_at() {
        let user = sample_user();
        assert!(!user.id.is_nil());
        assert!(user.updated_at.is_none());
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "a@x.com");
        assert_eq!(user.password, "pw1");
    }

    #[test]
    fn test_apply_update_username_only() {
        let mut user = sample_user();
        user.apply_update(UpdateUser {
            username: Some("alice2".to_string()),
            password: Some(String::new()),
        });

        assert_eq!(user.username, "alice2");
        assert_eq!(user.password, "pw1");
    }

    #[test]
    fn test_apply_update_both_fields() {
        let mut user = sample_user();
        user.apply_update(UpdateUser {
            username: Some("alice2".to_string()),
            password: Some("pw2".to_string()),
        });

        assert_eq!(user.username, "alice2");
        assert_eq!(user.password, "pw2");
    }

    #[test]
    fn test_apply_update_empty_fields_is_noop() {
        let mut user = sample_user();
        let before = user.clone();

        user.apply_update(UpdateUser {
            username: Some(String::new()),
            password: None,
        });

        assert_eq!(user, before);
    }

    #[test]
    fn test_apply_update_never_touches_email_or_timestamps() {
        let mut user = sample_user();
        let email = user.email.clone();
        let created_at = user.created_at;

        user.apply_update(UpdateUser {
            username: Some("bob".to_string()),
            password: Some("pw2".to_string()),
        });

        assert_eq!(user.email, email);
        assert_eq!(user.created_at, created_at);
        assert!(user.updated_at.is_none());
    }

    #[test]
    fn test_response_omits_password() {
        let user = sample_user();
        let response = UserResponse::from(user.clone());
        assert_eq!(response.id, user.id);

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("password").is_none());
    }

    #[test]
    fn test_entity_serialization_skips_password() {
        let user = sample_user();
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("username").is_some());
    }
}
