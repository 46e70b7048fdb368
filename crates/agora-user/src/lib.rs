//! User preference management for the Agora platform.
//!
//! Loads per-user preference records with the instance defaults applied,
//! validates and persists updates through a whitelisted save path, and keeps
//! the digest-frequency membership index derived from the saved frequency.
//!
//! Storage, configuration, the notification-type and language catalogs, and
//! the mutation hooks are external collaborators injected as trait objects.

pub mod hooks;
pub mod prelude;
pub mod settings;
mod utils;

pub use settings::{DigestFreq, SettingsInput, StoredSettings, UserSettings, UserSettingsService};

// vim: ts=4
