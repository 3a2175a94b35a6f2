//! # Ata Common
//!
//! Shared vocabulary for the shell and its modules: the [`module::Module`]
//! capability, the user-facing [`error::ShellError`] kinds, network models used
//! by discovery and the [`print`] channel every crate writes user output to.

pub mod config;
pub mod error;
pub mod module;
pub mod network;
pub mod print;
pub mod scanning;
pub mod vendors;
