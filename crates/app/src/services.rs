//! Application services — one use-case struct per surface.

pub mod auth_service;
pub mod blob_service;
pub mod device_service;
