//! `triangle-core`: primitives shared by the session boundary.
//!
//! This crate contains **pure** value types (no crypto, no HTTP, no I/O).

pub mod id;
pub mod time;

pub use id::UserId;
pub use time::EpochMillis;
