pub use agora_types::prelude::*;

// vim: ts=4
