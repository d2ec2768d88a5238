//! SQLite implementation of the user variables key-value store

#![forbid(unsafe_code)]

mod pair;
mod schema;

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use std::path::Path;

use uservars_types::kv_adapter::{KvAdapter, KvFilter, KvPair};
use uservars_types::prelude::*;

fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

/// Adapter configuration options
#[derive(Debug, Clone)]
pub struct AdapterConfig {
	/// Maximum number of pooled connections
	pub max_connections: u32,

	/// Use write-ahead logging instead of a rollback journal
	pub wal: bool,
}

impl Default for AdapterConfig {
	fn default() -> Self {
		Self { max_connections: 5, wal: true }
	}
}

#[derive(Debug)]
pub struct KvAdapterSqlite {
	db: SqlitePool,
}

impl KvAdapterSqlite {
	/// Open (or create) the database file at `path` and initialize its schema
	pub async fn new(path: impl AsRef<Path>, config: AdapterConfig) -> ClResult<Self> {
		let path = path.as_ref();
		if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
			tokio::fs::create_dir_all(parent).await?;
		}

		let journal_mode = if config.wal {
			sqlite::SqliteJournalMode::Wal
		} else {
			sqlite::SqliteJournalMode::Delete
		};
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path)
			.create_if_missing(true)
			.journal_mode(journal_mode);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(config.max_connections)
			.connect_with(opts)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;

		schema::init_db(&db).await.inspect_err(inspect).map_err(|_| Error::DbError)?;

		info!("Key-value store opened at {}", path.display());
		Ok(Self { db })
	}

	/// Underlying connection pool, for maintenance queries
	pub fn pool(&self) -> &SqlitePool {
		&self.db
	}

	pub async fn close(&self) {
		self.db.close().await;
	}
}

#[async_trait]
impl KvAdapter for KvAdapterSqlite {
	async fn get(&self, filter: &KvFilter<'_>) -> ClResult<Vec<ScopedEntry>> {
		pair::list(&self.db, filter).await
	}

	async fn set(&self, kv_pair: &KvPair<'_>) -> ClResult<()> {
		pair::upsert(&self.db, kv_pair).await
	}

	async fn delete(&self, filter: &KvFilter<'_>) -> ClResult<u64> {
		pair::delete(&self.db, filter).await
	}
}

// vim: ts=4
