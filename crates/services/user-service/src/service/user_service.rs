//! User service - Handles user-related business logic.
//!
//! Owns the rules the table alone cannot express: password hashing, email
//! uniqueness checks before writes and rejection of empty updates. Emails
//! are stored and looked up lowercased so matching does not depend on the
//! database collation.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{CreateUser, Password, UpdateUser, User};

use crate::repository::{NewUser, UserChanges, UserRepository};

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List a page of users ordered by id, with the total row count
    async fn list_users(&self, offset: u64, limit: u64) -> AppResult<(Vec<User>, u64)>;

    /// Get user by ID
    async fn get_user(&self, id: i32) -> AppResult<User>;

    /// Get user by email
    async fn get_user_by_email(&self, email: &str) -> AppResult<User>;

    /// Create a new user, hashing the supplied password
    async fn create_user(&self, input: CreateUser) -> AppResult<User>;

    /// Change only the fields present in `input`
    async fn update_user(&self, id: i32, input: UpdateUser) -> AppResult<User>;

    /// Permanently delete user
    async fn delete_user(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    async fn ensure_email_free(&self, email: &str, owner: Option<i32>) -> AppResult<()> {
        match self.repo.find_by_email(email).await? {
            Some(existing) if Some(existing.id) != owner => Err(AppError::conflict("Email")),
            _ => Ok(()),
        }
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self, offset: u64, limit: u64) -> AppResult<(Vec<User>, u64)> {
        tokio::try_join!(self.repo.list(offset, limit), self.repo.count())
    }

    async fn get_user(&self, id: i32) -> AppResult<User> {
        self.repo.find_by_id(id).await?.ok_or_not_found()
    }

    async fn get_user_by_email(&self, email: &str) -> AppResult<User> {
        self.repo
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or_not_found()
    }

    async fn create_user(&self, input: CreateUser) -> AppResult<User> {
        let email = normalize_email(&input.email);
        self.ensure_email_free(&email, None).await?;

        let password = Password::new(&input.password)?;

        let user = self
            .repo
            .create(NewUser {
                username: input.username,
                email,
                password_hash: password.into_string(),
                profile_picture: input.profile_picture,
            })
            .await?;

        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    async fn update_user(&self, id: i32, input: UpdateUser) -> AppResult<User> {
        if input.is_empty() {
            return Err(AppError::validation("At least one field must be provided"));
        }

        let current = self.get_user(id).await?;

        let email = input.email.as_deref().map(normalize_email);
        if let Some(email) = email.as_deref() {
            if email != current.email {
                self.ensure_email_free(email, Some(id)).await?;
            }
        }

        let password_hash = input
            .password
            .as_deref()
            .map(Password::new)
            .transpose()?
            .map(Password::into_string);

        let user = self
            .repo
            .update(
                id,
                UserChanges {
                    username: input.username,
                    email,
                    password_hash,
                    profile_picture: input.profile_picture,
                },
            )
            .await?;

        tracing::info!(user_id = user.id, "User updated");
        Ok(user)
    }

    async fn delete_user(&self, id: i32) -> AppResult<()> {
        self.repo.delete(id).await?;
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }
}
