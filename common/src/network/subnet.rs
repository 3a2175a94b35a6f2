//! # Subnet Target
//!
//! Derives the block of addresses treated as "local" from the host's own
//! address and a netmask.

use std::fmt;
use std::net::Ipv4Addr;

use crate::network::range::{self, Ipv4Range};

/// The only mask discovery uses. Kept as a parameter of [`resolve_target`].
pub const DEFAULT_NETMASK: Ipv4Addr = Ipv4Addr::new(255, 255, 255, 0);

/// A network address paired with its prefix length, e.g. `192.168.1.0/24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubnetTarget {
    pub network: Ipv4Addr,
    pub prefix: u8,
}

impl SubnetTarget {
    /// Addresses a probe should be sent to.
    pub fn hosts(&self) -> anyhow::Result<Ipv4Range> {
        range::host_range(self.network, self.prefix)
    }
}

impl fmt::Display for SubnetTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.prefix)
    }
}

/// Zeroes every host octet whose mask octet is `0` and counts the mask's set
/// bits for the prefix length.
///
/// Octets under a partial mask octet (e.g. `240`) are kept as they are.
pub fn resolve_target(host: Ipv4Addr, mask: Ipv4Addr) -> SubnetTarget {
    let mut octets: [u8; 4] = host.octets();
    let mut prefix: u32 = 0;

    for (octet, mask_octet) in octets.iter_mut().zip(mask.octets()) {
        if mask_octet == 0 {
            *octet = 0;
        }
        prefix += mask_octet.count_ones();
    }

    SubnetTarget {
        network: Ipv4Addr::from(octets),
        prefix: prefix as u8,
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
