//! Test adapters and helpers shared by the integration tests
//!
//! `MemoryKvAdapter` keeps rows in a plain vector so tests can seed states the
//! real store would refuse (duplicates at one scope) and inspect which filters
//! the service actually sent.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;

use uservars::UserVarsService;
use uservars_types::kv_adapter::{KvAdapter, KvFilter, KvPair};
use uservars_types::prelude::*;

/// Initialize a tracing subscriber writing to the test output
pub fn setup_test_logging() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.try_init();
}

/// A `get` call as seen by the adapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedGet {
	pub typ: KvPairType,
	pub owner: ScopeSelector,
	pub key: Option<String>,
}

#[derive(Debug, Default)]
pub struct MemoryKvAdapter {
	rows: Mutex<Vec<(KvPairType, ScopedEntry)>>,
	gets: Mutex<Vec<RecordedGet>>,
	failing_scope: Mutex<Option<Scope>>,
}

impl MemoryKvAdapter {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	/// Append a row without upsert semantics
	pub fn insert_raw(
		&self,
		typ: KvPairType,
		owner: ScopeSelector,
		key: &str,
		value: serde_json::Value,
	) {
		self.rows.lock().push((typ, ScopedEntry::new(owner, key, value)));
	}

	pub fn insert_var(&self, owner: ScopeSelector, key: &str, value: serde_json::Value) {
		self.insert_raw(KvPairType::UserVar, owner, key, value);
	}

	pub fn gets(&self) -> Vec<RecordedGet> {
		self.gets.lock().clone()
	}

	pub fn row_count(&self) -> usize {
		self.rows.lock().len()
	}

	/// Make every `get` at `scope` fail with `Error::DbError`
	pub fn fail_scope(&self, scope: Scope) {
		*self.failing_scope.lock() = Some(scope);
	}
}

fn matches(typ: KvPairType, entry: &ScopedEntry, filter: &KvFilter<'_>) -> bool {
	typ == filter.typ
		&& entry.owner == *filter.owner
		&& filter.key.is_none_or(|key| &*entry.key == key)
}

#[async_trait]
impl KvAdapter for MemoryKvAdapter {
	async fn get(&self, filter: &KvFilter<'_>) -> ClResult<Vec<ScopedEntry>> {
		self.gets.lock().push(RecordedGet {
			typ: filter.typ,
			owner: filter.owner.clone(),
			key: filter.key.map(ToString::to_string),
		});

		if *self.failing_scope.lock() == Some(filter.owner.scope()) {
			return Err(Error::DbError);
		}

		Ok(self
			.rows
			.lock()
			.iter()
			.filter(|(typ, entry)| matches(*typ, entry, filter))
			.map(|(_, entry)| entry.clone())
			.collect())
	}

	async fn set(&self, pair: &KvPair<'_>) -> ClResult<()> {
		let mut rows = self.rows.lock();
		let existing = rows.iter().position(|(typ, entry)| {
			*typ == pair.typ && entry.owner == *pair.owner && &*entry.key == pair.key
		});
		match existing {
			Some(idx) => rows[idx].1.value = pair.value.clone(),
			None => {
				let entry = ScopedEntry::new(pair.owner.clone(), pair.key, pair.value.clone());
				rows.push((pair.typ, entry));
			}
		}
		Ok(())
	}

	async fn delete(&self, filter: &KvFilter<'_>) -> ClResult<u64> {
		let mut rows = self.rows.lock();
		let before = rows.len();
		rows.retain(|(typ, entry)| !matches(*typ, entry, filter));
		Ok((before - rows.len()) as u64)
	}
}

/// Adapter whose `get` only completes once two lookups are in flight at the same time
#[derive(Debug)]
pub struct RendezvousKvAdapter {
	inner: Arc<MemoryKvAdapter>,
	barrier: tokio::sync::Barrier,
}

impl RendezvousKvAdapter {
	pub fn new(inner: Arc<MemoryKvAdapter>) -> Arc<Self> {
		Arc::new(Self { inner, barrier: tokio::sync::Barrier::new(2) })
	}
}

#[async_trait]
impl KvAdapter for RendezvousKvAdapter {
	async fn get(&self, filter: &KvFilter<'_>) -> ClResult<Vec<ScopedEntry>> {
		self.barrier.wait().await;
		self.inner.get(filter).await
	}

	async fn set(&self, pair: &KvPair<'_>) -> ClResult<()> {
		self.inner.set(pair).await
	}

	async fn delete(&self, filter: &KvFilter<'_>) -> ClResult<u64> {
		self.inner.delete(filter).await
	}
}

pub fn service(kv: &Arc<MemoryKvAdapter>) -> UserVarsService {
	setup_test_logging();
	UserVarsService::new(kv.clone())
}

// vim: ts=4
