//! # Ata Core
//!
//! * **[`shell`]**: the read loop, command routing and the single-module
//!   mount/dismount lifecycle.
//! * **[`registry`]**: names the modules a [`ModuleSource`](ata_common::module::ModuleSource) can load.
//! * **[`discovery`]**: subnet resolution, the link-layer host scan and the report.
//! * **[`vendors`]**: lazily loaded manufacturer lookup with a cached failure state.
//! * **[`network`]**: LAN interface selection and the ARP prober.

pub mod discovery;
pub mod network;
pub mod registry;
pub mod shell;
pub mod vendors;
