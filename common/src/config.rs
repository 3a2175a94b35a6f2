use std::net::Ipv4Addr;
use std::path::PathBuf;
use std::time::Duration;

use crate::network::subnet::DEFAULT_NETMASK;

pub const DEFAULT_TITLE: &str = "ata";

/// How long the discovery probe listens for replies.
pub const PROBE_WINDOW: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
pub struct Config {
    /// JSON manufacturer table. The bundled OUI database is used when unset.
    pub vendors: Option<PathBuf>,
    /// Interface to probe from. Picked automatically when unset.
    pub interface: Option<String>,
    pub netmask: Ipv4Addr,
    pub probe_window: Duration,
    /// Prompt title shown while no module is mounted.
    pub title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            vendors: None,
            interface: None,
            netmask: DEFAULT_NETMASK,
            probe_window: PROBE_WINDOW,
            title: DEFAULT_TITLE.to_string(),
        }
    }
}
