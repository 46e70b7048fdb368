//! Load-path resolution: default cascade, bounds clamping, and field
//! sanitization.
//!
//! The cascade rule lives in one place (`setting_or`) because it is easy to
//! get subtly wrong: an explicit stored `0` is a value, while `false`, the
//! empty string, and a missing field all fall through to the next layer.

use std::collections::BTreeMap;

use agora_types::config::ConfigProvider;

use crate::prelude::*;
use crate::settings::types::{DigestFreq, UserSettings};
use crate::utils::{escape_html, restore_escaped_slashes};

/// Hardcoded fallbacks, used when neither the stored record nor the global
/// configuration carries a value.
pub const DEFAULT_LANG: &str = "en-GB";
pub const DEFAULT_PER_PAGE: i64 = 20;
pub const DEFAULT_MAX_PER_PAGE: i64 = 20;
pub const DEFAULT_NOTIFICATION_PREF: &str = "notification";
const DEFAULT_TOPIC_POST_SORT: &str = "oldest_to_newest";
const DEFAULT_CATEGORY_TOPIC_SORT: &str = "recently_replied";
const DEFAULT_UPVOTE_NOTIF_FREQ: &str = "all";
const DEFAULT_CATEGORY_WATCH_STATE: &str = "notwatching";

/// The shared default-cascade rule: the stored value if set, else the
/// same-named global config value if set, else the hardcoded fallback.
///
/// "Set" follows `SettingValue::is_set`: `Int(0)` is an explicit value,
/// `Bool(false)` and the empty string count as absent.
fn setting_or(
	record: &SettingsRecord,
	config: &dyn ConfigProvider,
	key: &str,
	fallback: SettingValue,
) -> SettingValue {
	if let Some(value) = record.get(key) {
		if value.is_set() {
			return value.clone();
		}
	}
	if let Some(value) = config.get(key) {
		if value.is_set() {
			return value;
		}
	}
	fallback
}

fn resolve_flag(record: &SettingsRecord, config: &dyn ConfigProvider, key: &str, default: bool) -> bool {
	setting_or(record, config, key, SettingValue::Int(i64::from(default))).as_flag()
}

fn resolve_text(record: &SettingsRecord, config: &dyn ConfigProvider, key: &str, default: &str) -> String {
	setting_or(record, config, key, SettingValue::String(default.into())).as_text()
}

/// Three-way minimum: the admin ceiling, the stored value (or the global
/// default when the stored one is absent or zero), and the global default.
/// This both fills in a default and clamps a stale oversized stored value on
/// every read.
fn resolve_page_size(
	record: &SettingsRecord,
	config: &dyn ConfigProvider,
	key: &str,
	max_key: &str,
) -> i64 {
	let max = config.get_int(max_key).unwrap_or(DEFAULT_MAX_PER_PAGE);
	let default = config.get_int(key).unwrap_or(DEFAULT_PER_PAGE);
	let stored = record
		.get(key)
		.and_then(SettingValue::as_int)
		.filter(|n| *n != 0)
		.unwrap_or(default);
	max.min(stored).min(default)
}

fn stored_text(record: &SettingsRecord, key: &str) -> Option<String> {
	record.get(key).map(SettingValue::as_text).filter(|s| !s.is_empty())
}

/// Resolve a raw stored record into the full typed settings of `uid`.
///
/// `notification_types` is the current catalog snapshot; every listed
/// identifier resolves through the same cascade into the notifications map.
pub(crate) fn resolve_settings(
	uid: Uid,
	record: &SettingsRecord,
	config: &dyn ConfigProvider,
	notification_types: &[String],
) -> UserSettings {
	let user_lang = stored_text(record, "userLang")
		.or_else(|| config.get_str("defaultLang"))
		.unwrap_or_else(|| DEFAULT_LANG.into());
	let acp_lang = stored_text(record, "acpLang").unwrap_or_else(|| user_lang.clone());

	let mut notifications = BTreeMap::new();
	for name in notification_types {
		notifications
			.insert(name.clone(), resolve_text(record, config, name, DEFAULT_NOTIFICATION_PREF));
	}

	UserSettings {
		uid,
		show_email: resolve_flag(record, config, "showemail", false),
		show_fullname: resolve_flag(record, config, "showfullname", false),
		open_outgoing_links_in_new_tab: resolve_flag(
			record,
			config,
			"openOutgoingLinksInNewTab",
			false,
		),
		daily_digest_freq: DigestFreq::parse(&resolve_text(
			record,
			config,
			"dailyDigestFreq",
			"off",
		)),
		use_pagination: resolve_flag(record, config, "usePagination", false),
		topics_per_page: resolve_page_size(record, config, "topicsPerPage", "maxTopicsPerPage"),
		posts_per_page: resolve_page_size(record, config, "postsPerPage", "maxPostsPerPage"),
		user_lang,
		acp_lang,
		topic_post_sort: resolve_text(record, config, "topicPostSort", DEFAULT_TOPIC_POST_SORT),
		category_topic_sort: resolve_text(
			record,
			config,
			"categoryTopicSort",
			DEFAULT_CATEGORY_TOPIC_SORT,
		),
		follow_topics_on_create: resolve_flag(record, config, "followTopicsOnCreate", true),
		follow_topics_on_reply: resolve_flag(record, config, "followTopicsOnReply", false),
		upvote_notif_freq: resolve_text(
			record,
			config,
			"upvoteNotifFreq",
			DEFAULT_UPVOTE_NOTIF_FREQ,
		),
		restrict_chat: resolve_flag(record, config, "restrictChat", false),
		topic_search_enabled: resolve_flag(record, config, "topicSearchEnabled", false),
		update_url_with_post_index: resolve_flag(record, config, "updateUrlWithPostIndex", true),
		bootswatch_skin: escape_html(&stored_text(record, "bootswatchSkin").unwrap_or_default()),
		home_page_route: restore_escaped_slashes(&escape_html(
			&stored_text(record, "homePageRoute").unwrap_or_default(),
		)),
		scroll_to_my_post: resolve_flag(record, config, "scrollToMyPost", true),
		category_watch_state: resolve_text(
			record,
			config,
			"categoryWatchState",
			DEFAULT_CATEGORY_WATCH_STATE,
		),
		notifications,
	}
}


// vim: ts=4
