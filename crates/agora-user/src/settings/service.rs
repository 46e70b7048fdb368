//! User settings service: load, save, and single-field update.

use std::sync::Arc;

use futures::future::try_join_all;

use agora_types::catalog::{LanguageCatalog, NotificationTypeCatalog};
use agora_types::config::ConfigProvider;
use agora_types::meta_adapter::MetaAdapter;

use super::types::{DigestFreq, SettingsInput, UserSettings};
use super::user_settings_key;
use super::{digest, resolve, save};
use crate::hooks::{GetSettingsPayload, SaveSettingsEvent, SaveSettingsPayload, SettingsHooks};
use crate::prelude::*;

/// Per-user preference operations over the injected collaborators.
///
/// The service itself is stateless; every call goes to the record store, the
/// configuration snapshot, and the catalogs as needed.
#[derive(Debug)]
pub struct UserSettingsService {
	meta: Arc<dyn MetaAdapter>,
	config: Arc<dyn ConfigProvider>,
	notification_types: Arc<dyn NotificationTypeCatalog>,
	languages: Arc<dyn LanguageCatalog>,
	hooks: Arc<SettingsHooks>,
}

impl UserSettingsService {
	pub fn new(
		meta: Arc<dyn MetaAdapter>,
		config: Arc<dyn ConfigProvider>,
		notification_types: Arc<dyn NotificationTypeCatalog>,
		languages: Arc<dyn LanguageCatalog>,
		hooks: Arc<SettingsHooks>,
	) -> Self {
		Self { meta, config, notification_types, languages, hooks }
	}

	/// Load the resolved settings of one user.
	///
	/// Guest uids (`uid <= 0`) resolve an empty record through the same
	/// pipeline without touching the store.
	pub async fn get(&self, uid: Uid) -> AgResult<UserSettings> {
		if uid.is_guest() {
			return self.on_settings_loaded(Uid(0), SettingsRecord::new()).await;
		}
		let record = self.meta.read_record(&user_settings_key(uid)).await?.unwrap_or_default();
		self.on_settings_loaded(uid, record).await
	}

	/// Batch load. Records are fetched in one store call and resolved
	/// concurrently; the output order matches `uids`.
	pub async fn get_multiple(&self, uids: &[Uid]) -> AgResult<Vec<UserSettings>> {
		if uids.is_empty() {
			return Ok(Vec::new());
		}
		let keys: Vec<String> = uids.iter().map(|uid| user_settings_key(*uid)).collect();
		let records = self.meta.read_records(&keys).await?;
		try_join_all(
			records
				.into_iter()
				.zip(uids)
				.map(|(record, uid)| self.on_settings_loaded(*uid, record.unwrap_or_default())),
		)
		.await
	}

	/// Validate and persist a settings submission, re-derive the digest
	/// index, and return a freshly resolved read.
	///
	/// The return value is deliberately `get(uid)` rather than the written
	/// record: load-time defaulting and sanitization apply to it even though
	/// they were not applied before the write.
	pub async fn save(&self, uid: Uid, input: SettingsInput) -> AgResult<UserSettings> {
		let max_posts = save::max_page_size(self.config.as_ref(), "maxPostsPerPage");
		let posts_per_page = save::validate_page_size(input.posts_per_page, max_posts)?;
		let max_topics = save::max_page_size(self.config.as_ref(), "maxTopicsPerPage");
		let topics_per_page = save::validate_page_size(input.topics_per_page, max_topics)?;

		let codes = self.languages.list_codes().await?;
		for lang in [&input.user_lang, &input.acp_lang].into_iter().flatten() {
			if !codes.iter().any(|code| code == lang) {
				return Err(Error::InvalidLanguage);
			}
		}

		self.hooks
			.fire_save_settings_actions(&SaveSettingsEvent { uid, input: input.clone() })
			.await?;

		let mut settings =
			save::build_whitelist(&input, self.config.as_ref(), topics_per_page, posts_per_page);
		// Catalog fields are opt-in by presence, unlike the fixed fields.
		for name in self.notification_types.list_types().await? {
			if let Some(value) = input.extra.get(&name) {
				if value.is_set() {
					settings.notifications.insert(name, value.as_text());
				}
			}
		}

		let payload =
			self.hooks.run_save_settings_filters(SaveSettingsPayload { uid, settings }).await?;
		self.meta.write_record(&user_settings_key(uid), &payload.settings.to_record()).await?;
		digest::update_digest_setting(self.meta.as_ref(), uid, input.daily_digest_freq).await?;
		info!("Saved settings for uid={}", uid);

		self.get(uid).await
	}

	/// Write exactly one stored field, bypassing the whitelist and the
	/// resolution pipeline. Callers are trusted to supply a recognized key.
	/// No-op for guests.
	pub async fn set_field(&self, uid: Uid, key: &str, value: SettingValue) -> AgResult<()> {
		if uid.is_guest() {
			return Ok(());
		}
		self.meta.write_record_field(&user_settings_key(uid), key, &value).await
	}

	/// Re-derive the digest membership of `uid` from `freq`.
	pub async fn update_digest_frequency(&self, uid: Uid, freq: DigestFreq) -> AgResult<()> {
		digest::update_digest_setting(self.meta.as_ref(), uid, freq).await
	}

	/// Users subscribed to digests at `freq`, least recently updated first.
	pub async fn digest_subscribers(&self, freq: DigestFreq) -> AgResult<Vec<Uid>> {
		digest::list_subscribers(self.meta.as_ref(), freq).await
	}

	async fn on_settings_loaded(&self, uid: Uid, record: SettingsRecord) -> AgResult<UserSettings> {
		let payload =
			self.hooks.run_get_settings_filters(GetSettingsPayload { uid, record }).await?;
		let types = self.notification_types.list_types().await?;
		Ok(resolve::resolve_settings(uid, &payload.record, self.config.as_ref(), &types))
	}
}

// vim: ts=4
