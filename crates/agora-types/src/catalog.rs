//! Notification-type and language catalogs.
//!
//! Both are volatile external data: callers re-fetch them on every load or
//! save instead of holding a snapshot, so a catalog change is picked up by
//! the next operation.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::prelude::*;

/// Source of the dynamically-sized set of notification type identifiers.
/// Each identifier names an extra per-user preference field.
#[async_trait]
pub trait NotificationTypeCatalog: Debug + Send + Sync {
	async fn list_types(&self) -> AgResult<Vec<String>>;
}

/// Source of the supported language codes.
#[async_trait]
pub trait LanguageCatalog: Debug + Send + Sync {
	async fn list_codes(&self) -> AgResult<Vec<String>>;
}

/// Fixed notification-type list, for embedders without a plugin system.
#[derive(Debug, Clone, Default)]
pub struct StaticNotificationTypes {
	types: Vec<String>,
}

impl StaticNotificationTypes {
	pub fn new(types: impl IntoIterator<Item = impl Into<String>>) -> Self {
		Self { types: types.into_iter().map(Into::into).collect() }
	}
}

#[async_trait]
impl NotificationTypeCatalog for StaticNotificationTypes {
	async fn list_types(&self) -> AgResult<Vec<String>> {
		Ok(self.types.clone())
	}
}

/// Fixed language-code list.
#[derive(Debug, Clone, Default)]
pub struct StaticLanguages {
	codes: Vec<String>,
}

impl StaticLanguages {
	pub fn new(codes: impl IntoIterator<Item = impl Into<String>>) -> Self {
		Self { codes: codes.into_iter().map(Into::into).collect() }
	}
}

#[async_trait]
impl LanguageCatalog for StaticLanguages {
	async fn list_codes(&self) -> AgResult<Vec<String>> {
		Ok(self.codes.clone())
	}
}

// vim: ts=4
