//! Configuration system for dlg-ui dialog helpers.
//!
//! This crate provides the options record consumed when a dialog is
//! initialized. It includes:
//!
//! - Feature switches (access keys, callback wiring, shortcuts)
//! - Reserved shortcut key strings (confirm, cancel, help, tab cycling)
//! - The markup convention (class prefixes, attribute and marker names)
//! - Tab interface settings
//! - YAML loading

pub mod config;
pub mod defaults;
mod error;
mod types;

pub use config::DialogConfig;
pub use error::ConfigError;
pub use types::{ControlsConfig, MarkupConfig, ShortcutConfig, TabConfig};
