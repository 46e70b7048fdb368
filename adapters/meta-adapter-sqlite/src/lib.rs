//! SQLite-backed meta adapter for the Agora platform.
//!
//! Preference records are stored field-granularly (one row per field), so a
//! single-field update touches one row while a wholesale save replaces the
//! whole record. Digest membership lives in a scored-set table.

use std::path::Path;

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};

use agora_types::meta_adapter::MetaAdapter;
use agora_types::prelude::*;

mod record;
mod schema;
mod sorted_set;

pub(crate) fn inspect(err: &sqlx::Error) {
	warn!("DB: {:#?}", err);
}

#[derive(Debug)]
pub struct MetaAdapterSqlite {
	db: SqlitePool,
}

impl MetaAdapterSqlite {
	pub async fn new(path: impl AsRef<Path>) -> AgResult<Self> {
		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path.as_ref())
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(inspect)
			.map_err(|_| Error::DbError)?;

		schema::init_db(&db).await.inspect_err(inspect).map_err(|_| Error::DbError)?;

		Ok(Self { db })
	}
}

#[async_trait]
impl MetaAdapter for MetaAdapterSqlite {
	// Records
	//*********
	async fn read_record(&self, key: &str) -> AgResult<Option<SettingsRecord>> {
		record::read(&self.db, key).await
	}

	async fn read_records(&self, keys: &[String]) -> AgResult<Vec<Option<SettingsRecord>>> {
		record::read_many(&self.db, keys).await
	}

	async fn write_record(&self, key: &str, record: &SettingsRecord) -> AgResult<()> {
		record::write(&self.db, key, record).await
	}

	async fn write_record_field(
		&self,
		key: &str,
		field: &str,
		value: &SettingValue,
	) -> AgResult<()> {
		record::write_field(&self.db, key, field, value).await
	}

	// Scored sets
	//*************
	async fn add_sorted_set_member(
		&self,
		key: &str,
		member: Uid,
		score: Timestamp,
	) -> AgResult<()> {
		sorted_set::add(&self.db, key, member, score).await
	}

	async fn remove_sorted_set_member(&self, keys: &[String], member: Uid) -> AgResult<()> {
		sorted_set::remove(&self.db, keys, member).await
	}

	async fn list_sorted_set_members(&self, key: &str) -> AgResult<Vec<Uid>> {
		sorted_set::members(&self.db, key).await
	}

	async fn has_sorted_set_member(&self, key: &str, member: Uid) -> AgResult<bool> {
		sorted_set::is_member(&self.db, key, member).await
	}
}

// vim: ts=4
