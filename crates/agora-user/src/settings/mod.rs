//! User preference records: load with defaults applied, validate and persist
//! updates, maintain the derived digest-frequency index.
//!
//! # Architecture
//!
//! - **Types** (`types.rs`): input, whitelist, and resolved data forms
//! - **Service** (`service.rs`): the public operations
//! - **Resolve** (`resolve.rs`): the default-cascade pipeline
//! - **Save** (`save.rs`): validation and whitelist construction
//! - **Digest** (`digest.rs`): digest membership index maintenance
//!
//! # Resolution order
//!
//! Each recognized field resolves as: stored value if set, else the
//! same-named global config value if set, else a hardcoded default — where
//! an explicit `0` counts as set but `false` and the empty string do not.

pub mod digest;
mod resolve;
mod save;
pub mod service;
pub mod types;

pub use service::UserSettingsService;
pub use types::{DigestFreq, SettingsInput, StoredSettings, UserSettings};

use crate::prelude::*;

/// Storage key of a user's preference record.
pub fn user_settings_key(uid: Uid) -> String {
	format!("user:{}:settings", uid)
}

// vim: ts=4
