//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::password::Password;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// URL or path of the profile picture
    pub profile_picture: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Stored password as a value object.
    pub fn password(&self) -> Password {
        Password::from_hash(self.password_hash.clone())
    }

    /// Check a plain-text password against the stored hash.
    pub fn verify_password(&self, plain_text: &str) -> bool {
        self.password().verify(plain_text)
    }
}

/// User creation data
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    /// Plain-text password, hashed before it reaches the repository
    pub password: String,
    pub profile_picture: Option<String>,
}

/// Partial user update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub username: Option<String>,
    pub email: Option<String>,
    /// Plain-text password, hashed before it reaches the repository
    pub password: Option<String>,
    /// `Some(None)` clears the picture
    pub profile_picture: Option<Option<String>>,
}

impl UpdateUser {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.profile_picture.is_none()
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    /// Unique user identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i32,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "jdoe"))]
    pub username: String,
    /// Email address
    #[cfg_attr(feature = "openapi", schema(example = "jdoe@example.com"))]
    pub email: String,
    /// Profile picture URL or path
    #[cfg_attr(feature = "openapi", schema(example = "https://example.com/jdoe.png"))]
    pub profile_picture: Option<String>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            profile_picture: user.profile_picture,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            profile_picture: user.profile_picture.clone(),
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        let now = Utc::now();
        User {
            id: 7,
            username: "jdoe".to_string(),
            email: "jdoe@example.com".to_string(),
            password_hash: Password::new("SecurePass123").unwrap().into_string(),
            profile_picture: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_user_serialization_hides_password_hash() {
        let user = sample_user();
        let json = serde_json::to_string(&user).unwrap();

        assert!(!json.contains("password_hash"));
        assert!(!json.contains(&user.password_hash));
        assert!(json.contains("jdoe@example.com"));
    }

    #[test]
    fn test_user_verify_password() {
        let user = sample_user();
        assert!(user.verify_password("SecurePass123"));
        assert!(!user.verify_password("nope-nope"));
    }

    #[test]
    fn test_user_response_from_user() {
        let user = sample_user();
        let response = UserResponse::from(&user);

        assert_eq!(response.id, user.id);
        assert_eq!(response.username, user.username);
        assert_eq!(response.email, user.email);
        assert_eq!(response.created_at, user.created_at);
    }

    #[test]
    fn test_update_user_is_empty() {
        assert!(UpdateUser::default().is_empty());

        let update = UpdateUser {
            username: Some("new".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_update_user_clearing_picture_is_not_empty() {
        let update = UpdateUser {
            profile_picture: Some(None),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
