//! # Ata Plugins
//!
//! Modules that ship with the shell and the [`BuiltinModules`] catalog the
//! registry loads them from.

pub mod catalog;
pub mod discovery;

pub use catalog::BuiltinModules;
pub use discovery::DiscoveryModule;
