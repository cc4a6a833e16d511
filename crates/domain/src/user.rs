//! User — a credential record behind login/signup.

use serde::{Deserialize, Serialize};

use crate::error::{HearthError, ValidationError};
use crate::id::UserId;

/// A registered user.
///
/// The password hash is serialized under the `password` key so the on-disk
/// user file keeps the layout the dashboard has always used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "password")]
    pub password_hash: String,
}

impl User {
    /// Create a builder for constructing a [`User`].
    #[must_use]
    pub fn builder() -> UserBuilder {
        UserBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] when `username` or the stored
    /// hash is empty.
    pub fn validate(&self) -> Result<(), HearthError> {
        if self.username.is_empty() {
            return Err(ValidationError::EmptyUsername.into());
        }
        if self.password_hash.is_empty() {
            return Err(ValidationError::EmptyPassword.into());
        }
        Ok(())
    }
}

/// Step-by-step builder for [`User`].
#[derive(Debug, Default)]
pub struct UserBuilder {
    id: Option<UserId>,
    username: Option<String>,
    email: Option<String>,
    password_hash: Option<String>,
}

impl UserBuilder {
    #[must_use]
    pub fn id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = Some(password_hash.into());
        self
    }

    /// Consume the builder, validate, and return a [`User`].
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] if `username` or `password_hash`
    /// is missing or empty.
    pub fn build(self) -> Result<User, HearthError> {
        let user = User {
            id: self.id.unwrap_or_default(),
            username: self.username.unwrap_or_default(),
            email: self.email,
            password_hash: self.password_hash.unwrap_or_default(),
        };
        user.validate()?;
        Ok(user)
    }
}
