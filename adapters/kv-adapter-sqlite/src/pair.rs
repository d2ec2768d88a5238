//! Key-value pair queries
//!
//! Values are stored as JSON text.

use sqlx::{QueryBuilder, Row, Sqlite, SqlitePool};

use uservars_types::kv_adapter::{KvFilter, KvPair};
use uservars_types::prelude::*;

use crate::inspect;

fn push_owner(query: &mut QueryBuilder<'_, Sqlite>, owner: &ScopeSelector) {
	match owner {
		ScopeSelector::Workspace(workspace_id) => {
			query.push(" AND user_id IS NULL AND workspace_id = ");
			query.push_bind(workspace_id.to_string());
		}
		ScopeSelector::User(user_id) => {
			query.push(" AND user_id = ");
			query.push_bind(user_id.to_string());
		}
	}
}

fn push_filter(query: &mut QueryBuilder<'_, Sqlite>, filter: &KvFilter<'_>) {
	query.push(" WHERE type = ");
	query.push_bind(filter.typ.as_str());
	push_owner(query, filter.owner);
	if let Some(key) = filter.key {
		query.push(" AND key = ");
		query.push_bind(key.to_string());
	}
}

/// List pairs matching a filter, in insertion order
pub(crate) async fn list(db: &SqlitePool, filter: &KvFilter<'_>) -> ClResult<Vec<ScopedEntry>> {
	let mut query = QueryBuilder::new("SELECT key, value FROM key_value_pairs");
	push_filter(&mut query, filter);
	query.push(" ORDER BY kv_id");

	let rows = query
		.build()
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	let mut entries = Vec::with_capacity(rows.len());
	for row in rows {
		let key: String = row.try_get("key").inspect_err(inspect).map_err(|_| Error::DbError)?;
		let value: Option<String> =
			row.try_get("value").inspect_err(inspect).map_err(|_| Error::DbError)?;
		let value = match value {
			Some(v) => serde_json::from_str(&v)
				.inspect_err(|err| warn!("DB: invalid JSON in pair '{}': {}", key, err))
				.map_err(|_| Error::DbError)?,
			None => serde_json::Value::Null,
		};
		entries.push(ScopedEntry::new(filter.owner.clone(), key, value));
	}

	Ok(entries)
}

/// Update the pair at (type, owner, key) or create it
pub(crate) async fn upsert(db: &SqlitePool, pair: &KvPair<'_>) -> ClResult<()> {
	let value_str = pair.value.to_string();
	let mut tx = db.begin().await.inspect_err(inspect).map_err(|_| Error::DbError)?;

	let mut update = QueryBuilder::new("UPDATE key_value_pairs SET value = ");
	update.push_bind(value_str.clone());
	update.push(", updated_at = unixepoch()");
	push_filter(&mut update, &KvFilter::new(pair.typ, pair.owner).key(pair.key));
	let res = update
		.build()
		.execute(&mut *tx)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	if res.rows_affected() == 0 {
		let (user_id, workspace_id) = match pair.owner {
			ScopeSelector::Workspace(id) => (None, Some(id.to_string())),
			ScopeSelector::User(id) => (Some(id.to_string()), None),
		};
		sqlx::query(
			"INSERT INTO key_value_pairs (type, user_id, workspace_id, key, value)
			VALUES (?, ?, ?, ?, ?)",
		)
		.bind(pair.typ.as_str())
		.bind(user_id)
		.bind(workspace_id)
		.bind(pair.key)
		.bind(value_str)
		.execute(&mut *tx)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;
	}

	tx.commit().await.inspect_err(inspect).map_err(|_| Error::DbError)?;

	Ok(())
}

/// Delete pairs matching a filter
pub(crate) async fn delete(db: &SqlitePool, filter: &KvFilter<'_>) -> ClResult<u64> {
	let mut query = QueryBuilder::new("DELETE FROM key_value_pairs");
	push_filter(&mut query, filter);

	let res = query
		.build()
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	Ok(res.rows_affected())
}

// vim: ts=4
