//! Scoped user variables.
//!
//! A user variable may be stored at workspace scope (shared by every user of
//! the workspace) or at user scope (one user only). Reads resolve the
//! effective value with user-over-workspace precedence; writes and deletes go
//! straight to the store at the scope the caller selects.
//!
//! # Architecture
//!
//! - **Merge** (`merge.rs`): pure precedence resolution over scoped entries
//! - **Service** (`service.rs`): `UserVarsService`, fetches both scopes and merges
//! - **Typed** (`typed.rs`): `UserVar` trait binding a key to a value type
//! - **Opts** (`opts.rs`): service options
//!
//! Persistence lives behind the `KvAdapter` trait from `uservars-types`.

pub mod merge;
pub mod opts;
pub mod service;
pub mod typed;

pub use merge::{EffectiveMapping, merge};
pub use opts::UserVarsOpts;
pub use service::UserVarsService;
pub use typed::UserVar;

pub use uservars_types::kv_adapter::KvAdapter;
pub use uservars_types::prelude;

// vim: ts=4
