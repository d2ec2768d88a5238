//! User variables service: scoped reads with precedence, pass-through writes

use std::collections::HashSet;
use std::sync::Arc;

use uservars_types::kv_adapter::{KvAdapter, KvFilter, KvPair};
use uservars_types::prelude::*;

use crate::merge::{EffectiveMapping, merge};
use crate::opts::UserVarsOpts;

/// Main interface for reading and writing user variables
#[derive(Debug, Clone)]
pub struct UserVarsService {
	kv: Arc<dyn KvAdapter>,
	opts: UserVarsOpts,
}

impl UserVarsService {
	pub fn new(kv: Arc<dyn KvAdapter>) -> Self {
		Self::with_opts(kv, UserVarsOpts::default())
	}

	pub fn with_opts(kv: Arc<dyn KvAdapter>, opts: UserVarsOpts) -> Self {
		Self { kv, opts }
	}

	pub fn opts(&self) -> &UserVarsOpts {
		&self.opts
	}

	/// Get the effective value of one variable (user -> workspace).
	///
	/// Both scopes are looked up by key concurrently. More than one entry at
	/// either scope is an `Error::Integrity`.
	pub async fn get(&self, ctx: &OwnerContext, key: &str) -> ClResult<Option<serde_json::Value>> {
		validate_key(key)?;
		let workspace = ctx.workspace_selector();
		let user = ctx.user_selector();

		let (workspace_entries, user_entries) = tokio::try_join!(
			self.fetch(workspace.as_ref(), Some(key)),
			self.fetch(user.as_ref(), Some(key)),
		)?;

		ensure_single(key, Scope::Workspace, &workspace_entries)?;
		ensure_single(key, Scope::User, &user_entries)?;

		debug!(
			"User var '{}': workspace={} user={}",
			key,
			workspace_entries.len(),
			user_entries.len()
		);
		Ok(merge(user_entries.into_iter().chain(workspace_entries)).remove(key))
	}

	/// Get the effective values of every variable visible to `ctx`
	pub async fn get_all(&self, ctx: &OwnerContext) -> ClResult<EffectiveMapping> {
		let workspace = ctx.workspace_selector();
		let user = ctx.user_selector();

		let (workspace_entries, user_entries) = tokio::try_join!(
			self.fetch(workspace.as_ref(), None),
			self.fetch(user.as_ref(), None),
		)?;

		if self.opts.strict_get_all {
			ensure_unique_keys(Scope::Workspace, &workspace_entries)?;
			ensure_unique_keys(Scope::User, &user_entries)?;
		}

		debug!(
			"User vars: workspace={} user={}",
			workspace_entries.len(),
			user_entries.len()
		);
		Ok(merge(workspace_entries.into_iter().chain(user_entries)))
	}

	/// Store a value at exactly the selected scope
	pub async fn set(
		&self,
		owner: &ScopeSelector,
		key: &str,
		value: serde_json::Value,
	) -> ClResult<()> {
		validate_key(key)?;
		self.kv.set(&KvPair { typ: KvPairType::UserVar, owner, key, value: &value }).await?;

		info!("User var '{}' set for {}", key, owner);
		Ok(())
	}

	/// Delete the value stored at exactly the selected scope.
	/// Reads fall back to the other scope afterwards.
	pub async fn delete(&self, owner: &ScopeSelector, key: &str) -> ClResult<u64> {
		validate_key(key)?;
		let removed = self.kv.delete(&KvFilter::new(KvPairType::UserVar, owner).key(key)).await?;

		info!("User var '{}' deleted for {} ({} removed)", key, owner, removed);
		Ok(removed)
	}

	async fn fetch(
		&self,
		owner: Option<&ScopeSelector>,
		key: Option<&str>,
	) -> ClResult<Vec<ScopedEntry>> {
		let Some(owner) = owner else {
			return Ok(Vec::new());
		};
		let filter = KvFilter { typ: KvPairType::UserVar, owner, key };
		self.kv.get(&filter).await
	}
}

fn validate_key(key: &str) -> ClResult<()> {
	if key.is_empty() {
		return Err(Error::ValidationError("User var key must not be empty".into()));
	}
	Ok(())
}

fn ensure_single(key: &str, scope: Scope, entries: &[ScopedEntry]) -> ClResult<()> {
	if entries.len() > 1 {
		warn!("Multiple values ({}) found for key {} at {} level", entries.len(), key, scope);
		return Err(Error::integrity(key, scope));
	}
	Ok(())
}

fn ensure_unique_keys(scope: Scope, entries: &[ScopedEntry]) -> ClResult<()> {
	let mut seen = HashSet::with_capacity(entries.len());
	for entry in entries {
		if !seen.insert(&*entry.key) {
			warn!("Multiple values found for key {} at {} level", entry.key, scope);
			return Err(Error::integrity(entry.key.clone(), scope));
		}
	}
	Ok(())
}


// vim: ts=4
