//! Auth service — signup and login use-cases.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};

use hearth_domain::error::{AuthError, HearthError, ValidationError};
use hearth_domain::user::User;

use crate::ports::UserRepository;

/// Application service for account creation and credential checks.
pub struct AuthService<R> {
    repo: R,
}

impl<R: UserRepository> AuthService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Validation`] for empty credentials,
    /// [`HearthError::Auth`] with [`AuthError::UsernameTaken`] for a
    /// duplicate username, or a storage error from the repository.
    #[tracing::instrument(skip(self, password, email))]
    pub async fn signup(
        &self,
        username: &str,
        password: &str,
        email: Option<String>,
    ) -> Result<User, HearthError> {
        if username.is_empty() {
            return Err(ValidationError::EmptyUsername.into());
        }
        if password.is_empty() {
            return Err(ValidationError::EmptyPassword.into());
        }
        if self.repo.find_by_username(username).await?.is_some() {
            return Err(AuthError::UsernameTaken.into());
        }

        let mut builder = User::builder()
            .username(username)
            .password_hash(hash_password(password)?);
        if let Some(email) = email {
            builder = builder.email(email);
        }
        let user = builder.build()?;

        tracing::info!(%username, "user registered");
        self.repo.create(user).await
    }

    /// Check credentials and return the matching user.
    ///
    /// Unknown usernames and wrong passwords both map to
    /// [`AuthError::InvalidCredentials`] so the two are indistinguishable
    /// from the outside.
    ///
    /// # Errors
    ///
    /// Returns [`HearthError::Auth`] on bad credentials or a storage error
    /// from the repository.
    #[tracing::instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<User, HearthError> {
        let Some(user) = self.repo.find_by_username(username).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if verify_password(password, &user.password_hash) {
            Ok(user)
        } else {
            Err(AuthError::InvalidCredentials.into())
        }
    }
}

fn hash_password(plain: &str) -> Result<String, HearthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|err| HearthError::Storage(Box::new(err)))
}

fn verify_password(plain: &str, hash: &str) -> bool {
    PasswordHash::new(hash).is_ok_and(|parsed| {
        Argon2::default()
            .verify_password(plain.as_bytes(), &parsed)
            .is_ok()
    })
}
