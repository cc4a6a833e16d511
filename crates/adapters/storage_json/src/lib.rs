//! # hearth-adapter-storage-json
//!
//! Flat-file persistence: one JSON file for the user list, one for the
//! device list, and one file per blob-store key. Implements the storage
//! port traits defined in `hearth-app`.
//!
//! Every write goes through a same-directory temp file followed by a
//! rename, and each repository serializes its writers, so a crash or a
//! concurrent request cannot leave a half-written file behind.

pub mod blob_store;
pub mod device_repo;
pub mod error;
mod fs;
pub mod user_repo;

pub use blob_store::JsonBlobStore;
pub use device_repo::JsonDeviceRepository;
pub use error::StorageError;
pub use user_repo::JsonUserRepository;
