//! Scored membership set storage.

use sqlx::{Row, SqlitePool};

use agora_types::prelude::*;

use crate::inspect;

pub(crate) async fn add(
	db: &SqlitePool,
	key: &str,
	member: Uid,
	score: Timestamp,
) -> AgResult<()> {
	sqlx::query("INSERT OR REPLACE INTO sorted_sets (set_key, member, score) VALUES (?, ?, ?)")
		.bind(key)
		.bind(member.0)
		.bind(score.0)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;
	Ok(())
}

pub(crate) async fn remove(db: &SqlitePool, keys: &[String], member: Uid) -> AgResult<()> {
	if keys.is_empty() {
		return Ok(());
	}

	let placeholders = vec!["?"; keys.len()].join(", ");
	let query_str =
		format!("DELETE FROM sorted_sets WHERE member = ? AND set_key IN ({})", placeholders);
	let mut query = sqlx::query(&query_str).bind(member.0);
	for key in keys {
		query = query.bind(key);
	}
	query.execute(db).await.inspect_err(inspect).map_err(|_| Error::DbError)?;
	Ok(())
}

pub(crate) async fn members(db: &SqlitePool, key: &str) -> AgResult<Vec<Uid>> {
	let rows = sqlx::query(
		"SELECT member FROM sorted_sets WHERE set_key = ? ORDER BY score ASC, member ASC",
	)
	.bind(key)
	.fetch_all(db)
	.await
	.inspect_err(inspect)
	.map_err(|_| Error::DbError)?;

	Ok(rows.iter().map(|row| Uid(row.get("member"))).collect())
}

pub(crate) async fn is_member(db: &SqlitePool, key: &str, member: Uid) -> AgResult<bool> {
	let row = sqlx::query("SELECT 1 FROM sorted_sets WHERE set_key = ? AND member = ?")
		.bind(key)
		.bind(member.0)
		.fetch_optional(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;
	Ok(row.is_some())
}
