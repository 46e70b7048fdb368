pub use crate::error::{AgResult, Error};
pub use crate::types::{now, SettingValue, SettingsRecord, Timestamp, Uid};

pub use tracing::{debug, debug_span, error, error_span, info, info_span, warn, warn_span};

// vim: ts=4
