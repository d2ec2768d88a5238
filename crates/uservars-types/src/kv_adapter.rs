//! Adapter that stores scoped key-value pairs.
//!
//! The service never persists anything itself. Every read, write and delete is
//! addressed to one owner at one scope through a `ScopeSelector`, so adapters
//! never have to interpret a missing or null owner id.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

/// Lookup filter for `get` and `delete`
#[derive(Debug, Clone, Copy)]
pub struct KvFilter<'a> {
	pub typ: KvPairType,
	pub owner: &'a ScopeSelector,
	/// `None` matches every key of the owner
	pub key: Option<&'a str>,
}

impl<'a> KvFilter<'a> {
	pub fn new(typ: KvPairType, owner: &'a ScopeSelector) -> Self {
		Self { typ, owner, key: None }
	}

	pub fn key(mut self, key: &'a str) -> Self {
		self.key = Some(key);
		self
	}
}

/// A single pair to upsert
#[derive(Debug, Clone, Copy)]
pub struct KvPair<'a> {
	pub typ: KvPairType,
	pub owner: &'a ScopeSelector,
	pub key: &'a str,
	pub value: &'a serde_json::Value,
}

#[async_trait]
pub trait KvAdapter: Debug + Send + Sync {
	/// Lists the entries matching a filter.
	///
	/// A workspace owner only matches entries without a user component.
	/// The result may contain more than one entry per key if the store itself
	/// holds duplicates; callers decide whether that is an error.
	async fn get(&self, filter: &KvFilter<'_>) -> ClResult<Vec<ScopedEntry>>;

	/// Creates or replaces the entry at (type, owner, key)
	async fn set(&self, pair: &KvPair<'_>) -> ClResult<()>;

	/// Removes the matching entries, returns how many were removed
	async fn delete(&self, filter: &KvFilter<'_>) -> ClResult<u64>;
}

// vim: ts=4
