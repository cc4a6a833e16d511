//! Storage ports — persistence traits for users, devices, and blobs.

use std::future::Future;

use hearth_domain::device::Device;
use hearth_domain::error::HearthError;
use hearth_domain::id::DeviceId;
use hearth_domain::storage_key::StorageKey;
use hearth_domain::user::User;

/// Persistence for credential records.
///
/// The whole user list is small and rewritten wholesale on signup, so the
/// port only needs lookup and append.
pub trait UserRepository {
    /// Find a user by their unique username.
    fn find_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<User>, HearthError>> + Send;

    /// Append a new user and persist the full list.
    fn create(&self, user: User) -> impl Future<Output = Result<User, HearthError>> + Send;
}

/// Persistence for the device list.
pub trait DeviceRepository {
    /// All known devices.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, HearthError>> + Send;

    /// Look up a single device.
    fn get_by_id(
        &self,
        id: DeviceId,
    ) -> impl Future<Output = Result<Option<Device>, HearthError>> + Send;

    /// Replace a device's stored state and persist.
    fn update(&self, device: Device) -> impl Future<Output = Result<Device, HearthError>> + Send;
}

/// Per-key JSON document storage.
pub trait BlobStore {
    /// Read and parse the document stored under `key`, if any.
    fn read(
        &self,
        key: &StorageKey,
    ) -> impl Future<Output = Result<Option<serde_json::Value>, HearthError>> + Send;

    /// Create or overwrite the document stored under `key`.
    fn write(
        &self,
        key: &StorageKey,
        value: &serde_json::Value,
    ) -> impl Future<Output = Result<(), HearthError>> + Send;

    /// Remove the document stored under `key`. Removing a missing key is a
    /// no-op.
    fn delete(&self, key: &StorageKey) -> impl Future<Output = Result<(), HearthError>> + Send;
}
