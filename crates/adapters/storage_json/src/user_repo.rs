//! File-backed implementation of [`UserRepository`].
//!
//! The whole user list lives in one JSON array file. It is read once when
//! the repository is opened and rewritten in full on every signup, the way
//! the dashboard has always stored its users.

use std::path::PathBuf;

use tokio::sync::RwLock;

use hearth_app::ports::UserRepository;
use hearth_domain::error::HearthError;
use hearth_domain::user::User;

use crate::error::StorageError;
use crate::fs;

/// `users.json`-backed user repository.
pub struct JsonUserRepository {
    path: PathBuf,
    users: RwLock<Vec<User>>,
}

impl JsonUserRepository {
    /// Open the repository, loading the user file if it exists.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the file exists but cannot be read or
    /// parsed.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let users = match fs::read_optional(&path).await? {
            Some(bytes) => serde_json::from_slice(&bytes)?,
            None => Vec::new(),
        };
        tracing::debug!(path = %path.display(), count = users.len(), "user file loaded");
        Ok(Self {
            path,
            users: RwLock::new(users),
        })
    }

    /// Number of stored users.
    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }
}

impl UserRepository for JsonUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, HearthError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn create(&self, user: User) -> Result<User, HearthError> {
        let mut users = self.users.write().await;

        // Persist first; memory is only updated once the file write landed.
        let mut next = users.clone();
        next.push(user.clone());
        let bytes = serde_json::to_vec_pretty(&next).map_err(StorageError::from)?;
        fs::write_atomic(&self.path, &bytes)
            .await
            .map_err(StorageError::from)?;

        *users = next;
        Ok(user)
    }
}
