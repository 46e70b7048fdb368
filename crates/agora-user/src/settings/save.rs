//! Save-path validation and whitelist construction.
//!
//! Validation happens before any store access; a rejected save leaves both
//! the record and the digest index untouched.

use agora_types::config::ConfigProvider;

use crate::prelude::*;
use crate::settings::resolve::DEFAULT_MAX_PER_PAGE;
use crate::settings::types::{SettingsInput, StoredSettings};

/// Page sizes must be submitted, above 1, and within the admin ceiling.
pub(crate) fn validate_page_size(value: Option<i64>, max: i64) -> AgResult<i64> {
	match value {
		Some(n) if n > 1 && n <= max => Ok(n),
		_ => Err(Error::InvalidPagination { max }),
	}
}

pub(crate) fn max_page_size(config: &dyn ConfigProvider, key: &str) -> i64 {
	config.get_int(key).unwrap_or(DEFAULT_MAX_PER_PAGE)
}

/// Resolve the submitted home page route: the `custom` sentinel substitutes
/// the free-form field, and a single leading slash is stripped either way.
fn home_page_route(input: &SettingsInput) -> String {
	let route = match input.home_page_route.as_deref() {
		Some("custom") => input.home_page_custom.clone(),
		_ => input.home_page_route.clone(),
	}
	.unwrap_or_default();
	match route.strip_prefix('/') {
		Some(stripped) => stripped.to_string(),
		None => route,
	}
}

/// Build the whitelisted settings from a validated submission. Only
/// recognized fields are carried over; everything else in the input is
/// dropped here (the notifications map is filled by the caller from the
/// current catalog).
pub(crate) fn build_whitelist(
	input: &SettingsInput,
	config: &dyn ConfigProvider,
	topics_per_page: i64,
	posts_per_page: i64,
) -> StoredSettings {
	let default_lang = config.get_str("defaultLang");

	StoredSettings {
		show_email: input.show_email,
		show_fullname: input.show_fullname,
		open_outgoing_links_in_new_tab: input.open_outgoing_links_in_new_tab,
		use_pagination: input.use_pagination,
		// Re-clamped against the ceiling, independent of validation.
		topics_per_page: topics_per_page.min(max_page_size(config, "maxTopicsPerPage")),
		posts_per_page: posts_per_page.min(max_page_size(config, "maxPostsPerPage")),
		user_lang: input.user_lang.clone().or_else(|| default_lang.clone()),
		acp_lang: input.acp_lang.clone().or(default_lang),
		daily_digest_freq: input.daily_digest_freq,
		follow_topics_on_create: input.follow_topics_on_create,
		follow_topics_on_reply: input.follow_topics_on_reply,
		restrict_chat: input.restrict_chat,
		topic_search_enabled: input.topic_search_enabled,
		update_url_with_post_index: input.update_url_with_post_index,
		home_page_route: home_page_route(input),
		scroll_to_my_post: input.scroll_to_my_post,
		upvote_notif_freq: input.upvote_notif_freq.clone(),
		bootswatch_skin: input.bootswatch_skin.clone(),
		category_watch_state: input.category_watch_state.clone(),
		topic_post_sort: input.topic_post_sort.clone(),
		category_topic_sort: input.category_topic_sort.clone(),
		notifications: Default::default(),
	}
}


// vim: ts=4
