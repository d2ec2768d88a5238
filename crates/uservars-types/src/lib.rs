//! Shared types, the store adapter trait, and core utilities for scoped user variables.
//!
//! This crate contains the foundational types that are shared between the
//! resolution service and every key-value store adapter. Keeping them in a
//! separate crate lets adapter crates build without pulling in the service.

pub mod error;
pub mod kv_adapter;
pub mod prelude;
pub mod types;

// vim: ts=4
