//! # hearth-domain
//!
//! Pure domain model for the hearth home dashboard.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Users** (the credential records behind login/signup)
//! - Define **Sessions** (server-held login state with a fixed TTL)
//! - Define **Devices** (the toggleable things the dashboard renders)
//! - Define **Storage keys** (validated names for the per-key blob store)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod device;
pub mod session;
pub mod storage_key;
pub mod user;
