use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

/// Storage-facing contract for preference records and scored membership sets.
///
/// Record keys are opaque strings owned by the callers (the user settings
/// service uses `user:<uid>:settings`). An absent record reads as `None`,
/// never as an error.
#[async_trait]
pub trait MetaAdapter: Debug + Send + Sync {
	// Records
	//*********
	async fn read_record(&self, key: &str) -> AgResult<Option<SettingsRecord>>;

	/// Batch read. Output position `i` corresponds to `keys[i]`.
	async fn read_records(&self, keys: &[String]) -> AgResult<Vec<Option<SettingsRecord>>>;

	/// Replace the record at `key` wholesale.
	async fn write_record(&self, key: &str, record: &SettingsRecord) -> AgResult<()>;

	/// Write a single field, leaving the rest of the record untouched.
	async fn write_record_field(
		&self,
		key: &str,
		field: &str,
		value: &SettingValue,
	) -> AgResult<()>;

	// Scored sets
	//*************
	/// Add `member` to the set, or update its score if already present.
	async fn add_sorted_set_member(
		&self,
		key: &str,
		member: Uid,
		score: Timestamp,
	) -> AgResult<()>;

	/// Remove `member` from every listed set.
	async fn remove_sorted_set_member(&self, keys: &[String], member: Uid) -> AgResult<()>;

	/// Members of one set, lowest score first.
	async fn list_sorted_set_members(&self, key: &str) -> AgResult<Vec<Uid>>;

	async fn has_sorted_set_member(&self, key: &str, member: Uid) -> AgResult<bool>;
}

// vim: ts=4
