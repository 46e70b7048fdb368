//! Extension points of the user-preferences pipeline.
//!
//! The pipeline exposes three named hook points, each with a fixed, typed
//! payload contract:
//!
//! - `user.get_settings` filter: runs before resolution, may replace the raw
//!   record wholesale.
//! - `user.save_settings` action: runs after validation, before persistence;
//!   side-effect only, its return value is ignored but an error aborts the
//!   save.
//! - `user.save_settings` filter: runs last before persistence, may rewrite
//!   the whitelisted settings.
//!
//! Filters are ordered transformation stages: each stage receives the
//! previous stage's output.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::prelude::*;
use crate::settings::{SettingsInput, StoredSettings};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Payload of the load-path filter.
#[derive(Debug, Clone)]
pub struct GetSettingsPayload {
	pub uid: Uid,
	pub record: SettingsRecord,
}

/// Payload of the save-path filter.
#[derive(Debug, Clone)]
pub struct SaveSettingsPayload {
	pub uid: Uid,
	pub settings: StoredSettings,
}

/// Event observed by save-path actions.
#[derive(Debug, Clone)]
pub struct SaveSettingsEvent {
	pub uid: Uid,
	pub input: SettingsInput,
}

pub type GetSettingsFilter = Arc<
	dyn Fn(GetSettingsPayload) -> BoxFuture<'static, AgResult<GetSettingsPayload>> + Send + Sync,
>;
pub type SaveSettingsFilter = Arc<
	dyn Fn(SaveSettingsPayload) -> BoxFuture<'static, AgResult<SaveSettingsPayload>> + Send + Sync,
>;
pub type SaveSettingsAction =
	Arc<dyn Fn(SaveSettingsEvent) -> BoxFuture<'static, AgResult<()>> + Send + Sync>;

/// Registry of the settings pipeline extension points.
#[derive(Default)]
pub struct SettingsHooks {
	get_settings_filters: Vec<GetSettingsFilter>,
	save_settings_filters: Vec<SaveSettingsFilter>,
	save_settings_actions: Vec<SaveSettingsAction>,
}

impl SettingsHooks {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a stage on the `user.get_settings` filter point.
	pub fn register_get_settings_filter<F, Fut>(&mut self, f: F)
	where
		F: Fn(GetSettingsPayload) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = AgResult<GetSettingsPayload>> + Send + 'static,
	{
		self.get_settings_filters.push(Arc::new(move |payload| Box::pin(f(payload))));
	}

	/// Register a stage on the `user.save_settings` filter point.
	pub fn register_save_settings_filter<F, Fut>(&mut self, f: F)
	where
		F: Fn(SaveSettingsPayload) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = AgResult<SaveSettingsPayload>> + Send + 'static,
	{
		self.save_settings_filters.push(Arc::new(move |payload| Box::pin(f(payload))));
	}

	/// Register an observer on the `user.save_settings` action point.
	pub fn register_save_settings_action<F, Fut>(&mut self, f: F)
	where
		F: Fn(SaveSettingsEvent) -> Fut + Send + Sync + 'static,
		Fut: Future<Output = AgResult<()>> + Send + 'static,
	{
		self.save_settings_actions.push(Arc::new(move |event| Box::pin(f(event))));
	}

	pub(crate) async fn run_get_settings_filters(
		&self,
		mut payload: GetSettingsPayload,
	) -> AgResult<GetSettingsPayload> {
		for filter in &self.get_settings_filters {
			payload = filter(payload).await?;
		}
		Ok(payload)
	}

	pub(crate) async fn run_save_settings_filters(
		&self,
		mut payload: SaveSettingsPayload,
	) -> AgResult<SaveSettingsPayload> {
		for filter in &self.save_settings_filters {
			payload = filter(payload).await?;
		}
		Ok(payload)
	}

	pub(crate) async fn fire_save_settings_actions(
		&self,
		event: &SaveSettingsEvent,
	) -> AgResult<()> {
		for action in &self.save_settings_actions {
			// Awaited so that a failing observer aborts the save; the
			// success value is ignored.
			action(event.clone()).await?;
		}
		Ok(())
	}
}

impl std::fmt::Debug for SettingsHooks {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SettingsHooks")
			.field("get_settings_filters", &self.get_settings_filters.len())
			.field("save_settings_filters", &self.save_settings_filters.len())
			.field("save_settings_actions", &self.save_settings_actions.len())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[tokio::test]
	async fn test_filters_run_in_registration_order() {
		let mut hooks = SettingsHooks::new();
		hooks.register_get_settings_filter(|mut payload: GetSettingsPayload| async move {
			payload.record.insert("order".into(), SettingValue::String("first".into()));
			Ok(payload)
		});
		hooks.register_get_settings_filter(|mut payload: GetSettingsPayload| async move {
			payload.record.insert("order".into(), SettingValue::String("second".into()));
			Ok(payload)
		});

		let payload = GetSettingsPayload { uid: Uid(1), record: SettingsRecord::new() };
		let out = hooks.run_get_settings_filters(payload).await.expect("filters should run");
		assert_eq!(out.record.get("order"), Some(&SettingValue::String("second".into())));
	}

	#[tokio::test]
	async fn test_action_error_propagates() {
		let mut hooks = SettingsHooks::new();
		hooks.register_save_settings_action(|_event: SaveSettingsEvent| async {
			Err(Error::ValidationError("observer refused".into()))
		});

		let event = SaveSettingsEvent { uid: Uid(1), input: SettingsInput::default() };
		let res = hooks.fire_save_settings_actions(&event).await;
		assert!(matches!(res, Err(Error::ValidationError(_))));
	}

	#[tokio::test]
	async fn test_empty_registry_passes_payload_through() {
		let hooks = SettingsHooks::new();
		let mut record = SettingsRecord::new();
		record.insert("userLang".into(), SettingValue::String("hu".into()));
		let payload = GetSettingsPayload { uid: Uid(7), record: record.clone() };
		let out = hooks.run_get_settings_filters(payload).await.expect("no-op pipeline");
		assert_eq!(out.record, record);
	}
}

// vim: ts=4
