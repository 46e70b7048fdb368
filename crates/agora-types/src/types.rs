//! Common types used throughout the Agora platform.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::SystemTime;

// Uid //
//*****//
/// Numeric user identifier. Zero and negative values denote guest or
/// anonymous contexts.
#[derive(Clone, Copy, Debug)]
pub struct Uid(pub i64);

impl Uid {
	pub fn is_guest(self) -> bool {
		self.0 <= 0
	}
}

impl std::fmt::Display for Uid {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl std::cmp::PartialEq for Uid {
	fn eq(&self, other: &Self) -> bool {
		self.0 == other.0
	}
}

impl std::cmp::Eq for Uid {}

impl std::hash::Hash for Uid {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		self.0.hash(state);
	}
}

impl Serialize for Uid {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_i64(self.0)
	}
}

impl<'de> Deserialize<'de> for Uid {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(Uid(i64::deserialize(deserializer)?))
	}
}

// Timestamp //
//***********//
/// Milliseconds since the Unix epoch.
#[derive(Clone, Copy, Debug, Default)]
pub struct Timestamp(pub i64);

impl std::fmt::Display for Timestamp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl std::cmp::PartialEq for Timestamp {
	fn eq(&self, other: &Self) -> bool {
		self.0 == other.0
	}
}

impl std::cmp::Eq for Timestamp {}

impl std::cmp::PartialOrd for Timestamp {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl std::cmp::Ord for Timestamp {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		self.0.cmp(&other.0)
	}
}

impl Serialize for Timestamp {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_i64(self.0)
	}
}

impl<'de> Deserialize<'de> for Timestamp {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(Timestamp(i64::deserialize(deserializer)?))
	}
}

pub fn now() -> Timestamp {
	let res = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default();
	Timestamp(res.as_millis() as i64)
}

// SettingValue //
//**************//
/// A single stored preference or configuration value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)] // No type tag - type inferred from the JSON form
pub enum SettingValue {
	Bool(bool), // Must be before Int to avoid bool -> int coercion
	Int(i64),
	String(String),
}

impl SettingValue {
	/// Whether the value counts as explicitly set under the default cascade.
	///
	/// `Int(0)` counts as set; `Bool(false)` and the empty string do not.
	pub fn is_set(&self) -> bool {
		match self {
			SettingValue::Bool(b) => *b,
			SettingValue::Int(_) => true,
			SettingValue::String(s) => !s.is_empty(),
		}
	}

	pub fn as_int(&self) -> Option<i64> {
		match self {
			SettingValue::Bool(b) => Some(i64::from(*b)),
			SettingValue::Int(n) => Some(*n),
			SettingValue::String(s) => s.trim().parse().ok(),
		}
	}

	pub fn as_text(&self) -> String {
		match self {
			SettingValue::Bool(b) => i64::from(*b).to_string(),
			SettingValue::Int(n) => n.to_string(),
			SettingValue::String(s) => s.clone(),
		}
	}

	/// `true` iff the value reads as the integer 1.
	pub fn as_flag(&self) -> bool {
		self.as_int() == Some(1)
	}
}

impl From<bool> for SettingValue {
	fn from(b: bool) -> Self {
		SettingValue::Bool(b)
	}
}

impl From<i64> for SettingValue {
	fn from(n: i64) -> Self {
		SettingValue::Int(n)
	}
}

impl From<&str> for SettingValue {
	fn from(s: &str) -> Self {
		SettingValue::String(s.to_string())
	}
}

impl From<String> for SettingValue {
	fn from(s: String) -> Self {
		SettingValue::String(s)
	}
}

/// Raw stored preference record, keyed by preference name.
pub type SettingsRecord = HashMap<String, SettingValue>;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_zero_counts_as_set() {
		assert!(SettingValue::Int(0).is_set());
		assert!(!SettingValue::Bool(false).is_set());
		assert!(!SettingValue::String(String::new()).is_set());
		assert!(SettingValue::String("x".into()).is_set());
	}

	#[test]
	fn test_flag_parses_strings() {
		assert!(SettingValue::String("1".into()).as_flag());
		assert!(!SettingValue::String("0".into()).as_flag());
		assert!(SettingValue::Int(1).as_flag());
		assert!(!SettingValue::Int(2).as_flag());
		assert!(SettingValue::Bool(true).as_flag());
	}

	#[test]
	fn test_untagged_value_roundtrip() {
		let record: SettingsRecord = serde_json::from_str(
			r#"{"showemail": 1, "userLang": "en-GB", "restrictChat": true}"#,
		)
		.expect("record should deserialize");
		assert_eq!(record.get("showemail"), Some(&SettingValue::Int(1)));
		assert_eq!(record.get("userLang"), Some(&SettingValue::String("en-GB".into())));
		assert_eq!(record.get("restrictChat"), Some(&SettingValue::Bool(true)));
	}
}

// vim: ts=4
