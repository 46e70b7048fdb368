//! Shared test doubles and fixtures.
//!
//! `MemoryMetaAdapter` is an in-memory stand-in for the record store with
//! operation counters, so tests can assert that a rejected save performed no
//! store write and that guest loads never touch the store.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use agora_types::catalog::{StaticLanguages, StaticNotificationTypes};
use agora_types::config::StaticConfig;
use agora_types::meta_adapter::MetaAdapter;
use agora_types::prelude::*;
use agora_user::hooks::SettingsHooks;
use agora_user::{DigestFreq, SettingsInput, UserSettingsService};

pub const NOTIF_TYPES: [&str; 2] = ["notificationType_new-reply", "notificationType_upvote"];

#[derive(Debug, Default)]
pub struct MemoryMetaAdapter {
	records: Mutex<HashMap<String, SettingsRecord>>,
	sets: Mutex<HashMap<String, Vec<(Uid, Timestamp)>>>,
	pub reads: AtomicUsize,
	pub writes: AtomicUsize,
}

impl MemoryMetaAdapter {
	pub fn new() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub fn read_count(&self) -> usize {
		self.reads.load(Ordering::SeqCst)
	}

	pub fn write_count(&self) -> usize {
		self.writes.load(Ordering::SeqCst)
	}

	/// Raw view of a stored record, bypassing the resolution pipeline.
	pub fn raw_record(&self, key: &str) -> Option<SettingsRecord> {
		self.records.lock().expect("records lock").get(key).cloned()
	}

	/// Seed a record without counting it as a store write.
	pub fn seed_record(&self, key: &str, record: SettingsRecord) {
		self.records.lock().expect("records lock").insert(key.to_string(), record);
	}
}

#[async_trait]
impl MetaAdapter for MemoryMetaAdapter {
	async fn read_record(&self, key: &str) -> AgResult<Option<SettingsRecord>> {
		self.reads.fetch_add(1, Ordering::SeqCst);
		Ok(self.records.lock().expect("records lock").get(key).cloned())
	}

	async fn read_records(&self, keys: &[String]) -> AgResult<Vec<Option<SettingsRecord>>> {
		self.reads.fetch_add(1, Ordering::SeqCst);
		let records = self.records.lock().expect("records lock");
		Ok(keys.iter().map(|key| records.get(key).cloned()).collect())
	}

	async fn write_record(&self, key: &str, record: &SettingsRecord) -> AgResult<()> {
		self.writes.fetch_add(1, Ordering::SeqCst);
		self.records.lock().expect("records lock").insert(key.to_string(), record.clone());
		Ok(())
	}

	async fn write_record_field(
		&self,
		key: &str,
		field: &str,
		value: &SettingValue,
	) -> AgResult<()> {
		self.writes.fetch_add(1, Ordering::SeqCst);
		self.records
			.lock()
			.expect("records lock")
			.entry(key.to_string())
			.or_default()
			.insert(field.to_string(), value.clone());
		Ok(())
	}

	async fn add_sorted_set_member(
		&self,
		key: &str,
		member: Uid,
		score: Timestamp,
	) -> AgResult<()> {
		let mut sets = self.sets.lock().expect("sets lock");
		let set = sets.entry(key.to_string()).or_default();
		set.retain(|(uid, _)| *uid != member);
		set.push((member, score));
		Ok(())
	}

	async fn remove_sorted_set_member(&self, keys: &[String], member: Uid) -> AgResult<()> {
		let mut sets = self.sets.lock().expect("sets lock");
		for key in keys {
			if let Some(set) = sets.get_mut(key) {
				set.retain(|(uid, _)| *uid != member);
			}
		}
		Ok(())
	}

	async fn list_sorted_set_members(&self, key: &str) -> AgResult<Vec<Uid>> {
		let sets = self.sets.lock().expect("sets lock");
		let mut members = sets.get(key).cloned().unwrap_or_default();
		members.sort_by_key(|(uid, score)| (*score, uid.0));
		Ok(members.into_iter().map(|(uid, _)| uid).collect())
	}

	async fn has_sorted_set_member(&self, key: &str, member: Uid) -> AgResult<bool> {
		let sets = self.sets.lock().expect("sets lock");
		Ok(sets.get(key).is_some_and(|set| set.iter().any(|(uid, _)| *uid == member)))
	}
}

pub fn test_config() -> StaticConfig {
	StaticConfig::new()
		.set("topicsPerPage", 20i64)
		.set("postsPerPage", 20i64)
		.set("maxTopicsPerPage", 30i64)
		.set("maxPostsPerPage", 30i64)
		.set("defaultLang", "en-GB")
}

pub fn test_service(meta: Arc<MemoryMetaAdapter>, hooks: SettingsHooks) -> UserSettingsService {
	UserSettingsService::new(
		meta,
		Arc::new(test_config()),
		Arc::new(StaticNotificationTypes::new(NOTIF_TYPES)),
		Arc::new(StaticLanguages::new(["en-GB", "hu", "de"])),
		Arc::new(hooks),
	)
}

/// A submission that passes validation against `test_config`.
pub fn valid_input() -> SettingsInput {
	SettingsInput {
		posts_per_page: Some(10),
		topics_per_page: Some(12),
		user_lang: Some("en-GB".into()),
		daily_digest_freq: DigestFreq::Off,
		show_email: true,
		follow_topics_on_create: true,
		scroll_to_my_post: true,
		update_url_with_post_index: true,
		..Default::default()
	}
}

pub fn setup_test_logging() {
	let _ = tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(tracing::Level::DEBUG)
		.try_init();
}

// vim: ts=4
