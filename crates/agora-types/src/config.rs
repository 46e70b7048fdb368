//! Global configuration provider.

use std::collections::HashMap;
use std::fmt::Debug;

use crate::types::SettingValue;

/// Read-only view of the instance-wide configuration map.
///
/// Config values take part in the same default cascade as stored
/// preferences, so they are exposed as `SettingValue`s rather than as parsed
/// config fields.
pub trait ConfigProvider: Debug + Send + Sync {
	fn get(&self, key: &str) -> Option<SettingValue>;

	/// Integer view of a config value, if it reads as one.
	fn get_int(&self, key: &str) -> Option<i64> {
		self.get(key).and_then(|v| v.as_int())
	}

	/// Non-empty string view of a config value.
	fn get_str(&self, key: &str) -> Option<String> {
		self.get(key).map(|v| v.as_text()).filter(|s| !s.is_empty())
	}
}

/// Immutable in-memory configuration snapshot.
#[derive(Debug, Clone, Default)]
pub struct StaticConfig {
	values: HashMap<String, SettingValue>,
}

impl StaticConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn set(mut self, key: impl Into<String>, value: impl Into<SettingValue>) -> Self {
		self.values.insert(key.into(), value.into());
		self
	}
}

impl ConfigProvider for StaticConfig {
	fn get(&self, key: &str) -> Option<SettingValue> {
		self.values.get(key).cloned()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_static_config_views() {
		let config = StaticConfig::new()
			.set("postsPerPage", 15i64)
			.set("defaultLang", "hu")
			.set("emptyLang", "");

		assert_eq!(config.get_int("postsPerPage"), Some(15));
		assert_eq!(config.get_str("defaultLang").as_deref(), Some("hu"));
		assert_eq!(config.get_str("emptyLang"), None);
		assert_eq!(config.get("missing"), None);
	}
}

// vim: ts=4
