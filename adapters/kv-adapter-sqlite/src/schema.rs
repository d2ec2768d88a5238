//! Database schema initialization
//!
//! Workspace rows have `user_id IS NULL`, user rows have `workspace_id IS NULL`.
//! No UNIQUE constraint: SQLite treats NULLs as distinct, so it would not cover
//! workspace rows. `pair::upsert` keeps (type, owner, key) unique.

use sqlx::SqlitePool;

/// Initialize the database schema with all required tables and indexes
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	sqlx::query(
		"CREATE TABLE IF NOT EXISTS key_value_pairs (
		kv_id integer NOT NULL,
		type text NOT NULL,
		user_id text,
		workspace_id text,
		key text NOT NULL,
		value text,
		created_at datetime DEFAULT (unixepoch()),
		updated_at datetime DEFAULT (unixepoch()),
		PRIMARY KEY(kv_id)
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query(
		"CREATE INDEX IF NOT EXISTS idx_key_value_pairs_user ON key_value_pairs(type, user_id, key)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query(
		"CREATE INDEX IF NOT EXISTS idx_key_value_pairs_workspace
		ON key_value_pairs(type, workspace_id, key)",
	)
	.execute(&mut *tx)
	.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
