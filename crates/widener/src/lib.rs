pub mod convert;
pub mod dsp;
pub mod listener;
pub mod plugin;
pub mod types;

pub use convert::*;
pub use dsp::*;
pub use listener::*;
pub use plugin::*;
pub use types::*;

pub use widener_core::{
    MemoryStore, SettingsError, SettingsStore, TomlFileStore, WidenerSettings,
};
