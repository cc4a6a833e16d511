//! # hearth-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `UserRepository` — credential record persistence
//!   - `DeviceRepository` — device list persistence
//!   - `BlobStore` — per-key JSON document storage
//!   - `SessionStore` — server-held login sessions
//! - Define **driving/inbound ports** as use-case structs:
//!   - `AuthService` — signup, login
//!   - `DeviceService` — list, toggle, set brightness
//!   - `BlobService` — read, write, delete blobs
//! - Provide **in-process infrastructure** that doesn't need IO
//!   (in-memory session store, status tracker)
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `hearth-domain` only (plus the password-hashing library).
//! Never imports adapter crates. Adapters depend on *this* crate, not the
//! reverse.

pub mod ports;
pub mod services;
pub mod sessions;
pub mod status;
