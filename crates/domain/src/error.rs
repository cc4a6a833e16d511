//! Common error types used across the workspace.
//!
//! One base enum with typed sources; each layer defines its own typed errors
//! and converts via `#[from]`. No `String` variants.

/// Base error for all hearth operations.
#[derive(Debug, thiserror::Error)]
pub enum HearthError {
    /// A domain invariant was violated.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A referenced record does not exist.
    #[error("{0}")]
    NotFound(#[from] NotFoundError),

    /// Credential check or account creation failed.
    #[error("{0}")]
    Auth(#[from] AuthError),

    /// An infrastructure (file, serialization, hashing) failure.
    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Username must be non-empty.
    #[error("username must not be empty")]
    EmptyUsername,

    /// Password must be non-empty.
    #[error("password must not be empty")]
    EmptyPassword,

    /// Device name must be non-empty.
    #[error("device name must not be empty")]
    EmptyDeviceName,

    /// Brightness is a percentage. Carries the rejected value as received,
    /// which may fall outside `u8`.
    #[error("brightness must be between 0 and 100, got {0}")]
    BrightnessOutOfRange(i64),

    /// Storage keys are restricted to a safe character set.
    #[error("invalid storage key")]
    InvalidStorageKey,
}

/// A lookup that found nothing.
#[derive(Debug, thiserror::Error)]
#[error("{entity} not found: {id}")]
pub struct NotFoundError {
    /// Kind of record that was looked up.
    pub entity: &'static str,
    /// The identifier that matched nothing.
    pub id: String,
}

/// Authentication failures.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Unknown username or wrong password. Deliberately indistinguishable.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// Signup attempted with a username that already exists.
    #[error("username already taken")]
    UsernameTaken,
}
