//! Shared application state for axum handlers.

use std::sync::Arc;

use hearth_app::ports::{BlobStore, DeviceRepository, SessionStore, UserRepository};
use hearth_app::services::auth_service::AuthService;
use hearth_app::services::blob_service::BlobService;
use hearth_app::services::device_service::DeviceService;
use hearth_app::status::StatusTracker;

use crate::pages::PagesConfig;

/// Application state shared across all axum handlers.
///
/// Generic over the repository, blob store, and session store types to
/// avoid dynamic dispatch. `Clone` is implemented manually so the
/// underlying types themselves do not need to be `Clone` — only the `Arc`
/// wrappers are cloned.
pub struct AppState<UR, DR, BS, SS> {
    /// Signup/login use-cases.
    pub auth_service: Arc<AuthService<UR>>,
    /// Device list/toggle/brightness use-cases.
    pub device_service: Arc<DeviceService<DR>>,
    /// Per-key JSON blob use-cases.
    pub blob_service: Arc<BlobService<BS>>,
    /// Server-held sessions.
    pub sessions: Arc<SS>,
    /// Uptime and last-event tracker behind `/api/status`.
    pub status: Arc<StatusTracker>,
    /// Where the static pages and public assets live.
    pub pages: Arc<PagesConfig>,
}

impl<UR, DR, BS, SS> Clone for AppState<UR, DR, BS, SS> {
    fn clone(&self) -> Self {
        Self {
            auth_service: Arc::clone(&self.auth_service),
            device_service: Arc::clone(&self.device_service),
            blob_service: Arc::clone(&self.blob_service),
            sessions: Arc::clone(&self.sessions),
            status: Arc::clone(&self.status),
            pages: Arc::clone(&self.pages),
        }
    }
}

impl<UR, DR, BS, SS> AppState<UR, DR, BS, SS>
where
    UR: UserRepository + Send + Sync + 'static,
    DR: DeviceRepository + Send + Sync + 'static,
    BS: BlobStore + Send + Sync + 'static,
    SS: SessionStore + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    ///
    /// `status` is taken pre-wrapped because the device service shares the
    /// same tracker.
    pub fn new(
        auth_service: AuthService<UR>,
        device_service: DeviceService<DR>,
        blob_service: BlobService<BS>,
        sessions: SS,
        status: Arc<StatusTracker>,
        pages: PagesConfig,
    ) -> Self {
        Self {
            auth_service: Arc::new(auth_service),
            device_service: Arc::new(device_service),
            blob_service: Arc::new(blob_service),
            sessions: Arc::new(sessions),
            status,
            pages: Arc::new(pages),
        }
    }
}
