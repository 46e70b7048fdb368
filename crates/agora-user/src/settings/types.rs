//! User preference data forms.
//!
//! Three shapes of the same data:
//! - [`SettingsInput`]: what a save submits (wire form, loosely filled),
//! - [`StoredSettings`]: the whitelisted form the save path persists,
//! - [`UserSettings`]: the fully resolved form the load path returns.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::prelude::*;

// DigestFreq //
//************//
/// Digest email frequency. Anything but `Off` places the user in exactly
/// one digest membership set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DigestFreq {
	#[default]
	Off,
	Day,
	Week,
	Biweek,
	Month,
}

impl DigestFreq {
	pub fn as_str(self) -> &'static str {
		match self {
			DigestFreq::Off => "off",
			DigestFreq::Day => "day",
			DigestFreq::Week => "week",
			DigestFreq::Biweek => "biweek",
			DigestFreq::Month => "month",
		}
	}

	/// Lenient parse: any unrecognized value reads as `Off`.
	pub fn parse(s: &str) -> Self {
		match s {
			"day" => DigestFreq::Day,
			"week" => DigestFreq::Week,
			"biweek" => DigestFreq::Biweek,
			"month" => DigestFreq::Month,
			_ => DigestFreq::Off,
		}
	}
}

impl std::fmt::Display for DigestFreq {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

fn lenient_digest_freq<'de, D>(deserializer: D) -> Result<DigestFreq, D::Error>
where
	D: Deserializer<'de>,
{
	let s = String::deserialize(deserializer)?;
	Ok(DigestFreq::parse(&s))
}

// SettingsInput //
//***************//
/// Raw save-path submission.
///
/// Unknown keys land in `extra`; the whitelist drops them unless they name a
/// registered notification type. `dailyDigestFreq` deserializes leniently:
/// an unrecognized frequency reads as `off` rather than failing the save.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SettingsInput {
	#[serde(rename = "showemail")]
	pub show_email: bool,
	#[serde(rename = "showfullname")]
	pub show_fullname: bool,
	pub open_outgoing_links_in_new_tab: bool,
	pub use_pagination: bool,
	pub topics_per_page: Option<i64>,
	pub posts_per_page: Option<i64>,
	pub user_lang: Option<String>,
	pub acp_lang: Option<String>,
	#[serde(deserialize_with = "lenient_digest_freq")]
	pub daily_digest_freq: DigestFreq,
	pub follow_topics_on_create: bool,
	pub follow_topics_on_reply: bool,
	pub restrict_chat: bool,
	pub topic_search_enabled: bool,
	pub update_url_with_post_index: bool,
	pub home_page_route: Option<String>,
	pub home_page_custom: Option<String>,
	pub scroll_to_my_post: bool,
	pub upvote_notif_freq: Option<String>,
	pub bootswatch_skin: Option<String>,
	pub category_watch_state: Option<String>,
	pub topic_post_sort: Option<String>,
	pub category_topic_sort: Option<String>,
	/// Dynamically named per-notification-type fields.
	#[serde(flatten)]
	pub extra: HashMap<String, SettingValue>,
}

// StoredSettings //
//****************//
/// Whitelisted settings as built by the save path. This exact shape is
/// handed to the save filter hooks and then persisted wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StoredSettings {
	pub show_email: bool,
	pub show_fullname: bool,
	pub open_outgoing_links_in_new_tab: bool,
	pub use_pagination: bool,
	pub topics_per_page: i64,
	pub posts_per_page: i64,
	pub user_lang: Option<String>,
	pub acp_lang: Option<String>,
	pub daily_digest_freq: DigestFreq,
	pub follow_topics_on_create: bool,
	pub follow_topics_on_reply: bool,
	pub restrict_chat: bool,
	pub topic_search_enabled: bool,
	pub update_url_with_post_index: bool,
	pub home_page_route: String,
	pub scroll_to_my_post: bool,
	pub upvote_notif_freq: Option<String>,
	pub bootswatch_skin: Option<String>,
	pub category_watch_state: Option<String>,
	pub topic_post_sort: Option<String>,
	pub category_topic_sort: Option<String>,
	/// Opt-in per-notification-type delivery choices.
	pub notifications: BTreeMap<String, String>,
}

fn flag(b: bool) -> SettingValue {
	// Booleans persist as 0/1 so that an explicit false survives the
	// falsy-except-zero cascade on read.
	SettingValue::Int(i64::from(b))
}

impl StoredSettings {
	/// Flatten into the raw stored form.
	pub fn to_record(&self) -> SettingsRecord {
		let mut record = SettingsRecord::new();
		record.insert("showemail".into(), flag(self.show_email));
		record.insert("showfullname".into(), flag(self.show_fullname));
		record
			.insert("openOutgoingLinksInNewTab".into(), flag(self.open_outgoing_links_in_new_tab));
		record.insert("usePagination".into(), flag(self.use_pagination));
		record.insert("topicsPerPage".into(), SettingValue::Int(self.topics_per_page));
		record.insert("postsPerPage".into(), SettingValue::Int(self.posts_per_page));
		record.insert(
			"dailyDigestFreq".into(),
			SettingValue::String(self.daily_digest_freq.as_str().into()),
		);
		record.insert("followTopicsOnCreate".into(), flag(self.follow_topics_on_create));
		record.insert("followTopicsOnReply".into(), flag(self.follow_topics_on_reply));
		record.insert("restrictChat".into(), flag(self.restrict_chat));
		record.insert("topicSearchEnabled".into(), flag(self.topic_search_enabled));
		record.insert("updateUrlWithPostIndex".into(), flag(self.update_url_with_post_index));
		record.insert("homePageRoute".into(), SettingValue::String(self.home_page_route.clone()));
		record.insert("scrollToMyPost".into(), flag(self.scroll_to_my_post));

		let optional = [
			("userLang", &self.user_lang),
			("acpLang", &self.acp_lang),
			("upvoteNotifFreq", &self.upvote_notif_freq),
			("bootswatchSkin", &self.bootswatch_skin),
			("categoryWatchState", &self.category_watch_state),
			("topicPostSort", &self.topic_post_sort),
			("categoryTopicSort", &self.category_topic_sort),
		];
		for (name, value) in optional {
			if let Some(value) = value {
				record.insert(name.into(), SettingValue::String(value.clone()));
			}
		}

		for (name, value) in &self.notifications {
			record.insert(name.clone(), SettingValue::String(value.clone()));
		}
		record
	}
}

// UserSettings //
//**************//
/// Fully resolved per-user preferences, as returned by the load path.
/// Every field carries a concrete value; the dynamic per-notification-type
/// preferences live in the explicit `notifications` map.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
	pub uid: Uid,
	#[serde(rename = "showemail")]
	pub show_email: bool,
	#[serde(rename = "showfullname")]
	pub show_fullname: bool,
	pub open_outgoing_links_in_new_tab: bool,
	pub daily_digest_freq: DigestFreq,
	pub use_pagination: bool,
	pub topics_per_page: i64,
	pub posts_per_page: i64,
	pub user_lang: String,
	pub acp_lang: String,
	pub topic_post_sort: String,
	pub category_topic_sort: String,
	pub follow_topics_on_create: bool,
	pub follow_topics_on_reply: bool,
	pub upvote_notif_freq: String,
	pub restrict_chat: bool,
	pub topic_search_enabled: bool,
	pub update_url_with_post_index: bool,
	pub bootswatch_skin: String,
	pub home_page_route: String,
	pub scroll_to_my_post: bool,
	pub category_watch_state: String,
	pub notifications: BTreeMap<String, String>,
}


// vim: ts=4
