//! Field-granular preference record storage.
//!
//! Values are serialized as JSON text, which round-trips the untagged
//! `SettingValue` forms (booleans, integers, strings) without a type column.

use std::collections::HashMap;

use sqlx::{Row, SqlitePool};

use agora_types::prelude::*;

use crate::inspect;

pub(crate) async fn read(db: &SqlitePool, key: &str) -> AgResult<Option<SettingsRecord>> {
	let rows = sqlx::query("SELECT field, value FROM records WHERE record_key = ?")
		.bind(key)
		.fetch_all(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	if rows.is_empty() {
		return Ok(None);
	}

	let mut record = SettingsRecord::new();
	for row in rows {
		let field: String = row.get("field");
		let value: String = row.get("value");
		if let Ok(value) = serde_json::from_str(&value) {
			record.insert(field, value);
		}
	}
	Ok(Some(record))
}

pub(crate) async fn read_many(
	db: &SqlitePool,
	keys: &[String],
) -> AgResult<Vec<Option<SettingsRecord>>> {
	if keys.is_empty() {
		return Ok(Vec::new());
	}

	let placeholders = vec!["?"; keys.len()].join(", ");
	let query_str = format!(
		"SELECT record_key, field, value FROM records WHERE record_key IN ({})",
		placeholders
	);
	let mut query = sqlx::query(&query_str);
	for key in keys {
		query = query.bind(key);
	}
	let rows = query.fetch_all(db).await.inspect_err(inspect).map_err(|_| Error::DbError)?;

	let mut by_key: HashMap<String, SettingsRecord> = HashMap::new();
	for row in rows {
		let record_key: String = row.get("record_key");
		let field: String = row.get("field");
		let value: String = row.get("value");
		if let Ok(value) = serde_json::from_str(&value) {
			by_key.entry(record_key).or_default().insert(field, value);
		}
	}
	Ok(keys.iter().map(|key| by_key.remove(key)).collect())
}

/// Wholesale replace: delete every field of the record, then insert the new
/// ones in the same transaction.
pub(crate) async fn write(db: &SqlitePool, key: &str, record: &SettingsRecord) -> AgResult<()> {
	let mut tx = db.begin().await.inspect_err(inspect).map_err(|_| Error::DbError)?;

	sqlx::query("DELETE FROM records WHERE record_key = ?")
		.bind(key)
		.execute(&mut *tx)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;

	for (field, value) in record {
		let value_str = serde_json::to_string(value).map_err(|_| Error::DbError)?;
		sqlx::query("INSERT INTO records (record_key, field, value) VALUES (?, ?, ?)")
			.bind(key)
			.bind(field)
			.bind(value_str)
			.execute(&mut *tx)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;
	}

	tx.commit().await.inspect_err(inspect).map_err(|_| Error::DbError)?;
	Ok(())
}

pub(crate) async fn write_field(
	db: &SqlitePool,
	key: &str,
	field: &str,
	value: &SettingValue,
) -> AgResult<()> {
	let value_str = serde_json::to_string(value).map_err(|_| Error::DbError)?;
	sqlx::query("INSERT OR REPLACE INTO records (record_key, field, value) VALUES (?, ?, ?)")
		.bind(key)
		.bind(field)
		.bind(value_str)
		.execute(db)
		.await
		.inspect_err(inspect)
		.map_err(|_| Error::DbError)?;
	Ok(())
}
