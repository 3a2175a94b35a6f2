//! Picks the interface discovery probes leave from.

use std::fmt;
use std::net::Ipv4Addr;

use anyhow::{Context, bail};
use pnet::datalink::{self, NetworkInterface};
use pnet::ipnetwork::{IpNetwork, Ipv4Network};
use tracing::debug;

#[cfg(not(target_os = "linux"))]
use fallback_impl::{is_physical, is_wireless};
#[cfg(target_os = "linux")]
use linux_impl::{is_physical, is_wireless};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ViabilityError {
    /// The interface is operationally down.
    IsDown,
    /// Loopback, or filtered out by the physical-device check.
    NotPhysical,
    NoMacAddress,
    /// ARP needs broadcast.
    NotBroadcast,
    /// Point-to-point links (VPNs, tunnels) have no neighbours to ask.
    IsPointToPoint,
    /// No IPv4 address to send ARP requests from.
    NoIpv4,
}

impl fmt::Display for ViabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason: &str = match self {
            ViabilityError::IsDown => "interface is down",
            ViabilityError::NotPhysical => "interface is not a physical device",
            ViabilityError::NoMacAddress => "interface has no hardware address",
            ViabilityError::NotBroadcast => "interface does not support broadcast",
            ViabilityError::IsPointToPoint => "interface is a point-to-point link",
            ViabilityError::NoIpv4 => "interface has no IPv4 address",
        };
        f.write_str(reason)
    }
}

impl std::error::Error for ViabilityError {}

/// The interface named `requested`, or the best LAN interface when `None`.
///
/// A named interface skips the physical-device check.
pub fn select_lan_interface(requested: Option<&str>) -> anyhow::Result<NetworkInterface> {
    let interfaces: Vec<NetworkInterface> = datalink::interfaces();

    if let Some(name) = requested {
        let interface: NetworkInterface = interfaces
            .into_iter()
            .find(|interface| interface.name == name)
            .with_context(|| format!("no interface named {name}"))?;
        is_viable_lan_interface(&interface, |_| true)
            .with_context(|| format!("{name} cannot be used for discovery"))?;
        return Ok(interface);
    }

    let viable: Vec<NetworkInterface> = interfaces
        .into_iter()
        .filter(|interface| match is_viable_lan_interface(interface, is_physical) {
            Ok(()) => true,
            Err(e) => {
                debug!("Skipping {}: {e}", interface.name);
                false
            }
        })
        .collect();

    match select_best_lan_interface(viable, is_wired) {
        Some(interface) => Ok(interface),
        None => bail!("No interfaces available for LAN discovery"),
    }
}

/// First IPv4 network configured on `interface`.
pub fn ipv4_of(interface: &NetworkInterface) -> Option<Ipv4Network> {
    interface.ips.iter().find_map(|net| match net {
        IpNetwork::V4(v4) => Some(*v4),
        IpNetwork::V6(_) => None,
    })
}

pub fn ipv4_addr_of(interface: &NetworkInterface) -> anyhow::Result<Ipv4Addr> {
    ipv4_of(interface)
        .map(|net| net.ip())
        .with_context(|| format!("{} has no IPv4 address", interface.name))
}

fn is_viable_lan_interface(
    interface: &NetworkInterface,
    is_physical: impl Fn(&NetworkInterface) -> bool,
) -> Result<(), ViabilityError> {
    if !interface.is_up() {
        return Err(ViabilityError::IsDown);
    }
    if interface.is_loopback() || !is_physical(interface) {
        return Err(ViabilityError::NotPhysical);
    }
    if interface.mac.is_none() {
        return Err(ViabilityError::NoMacAddress);
    }
    if !interface.is_broadcast() {
        return Err(ViabilityError::NotBroadcast);
    }
    if interface.is_point_to_point() {
        return Err(ViabilityError::IsPointToPoint);
    }
    if ipv4_of(interface).is_none() {
        return Err(ViabilityError::NoIpv4);
    }

    Ok(())
}

fn select_best_lan_interface(
    interfaces: Vec<NetworkInterface>,
    is_wired: impl Fn(&NetworkInterface) -> bool,
) -> Option<NetworkInterface> {
    let wired: Option<usize> = interfaces.iter().position(|interface| is_wired(interface));
    let index: usize = wired.unwrap_or(0);
    interfaces.into_iter().nth(index)
}

fn is_wired(interface: &NetworkInterface) -> bool {
    is_physical(interface) && !is_wireless(interface)
}

#[cfg(target_os = "linux")]
mod linux_impl {
    use super::*;
    use std::path::Path;

    pub fn is_physical(interface: &NetworkInterface) -> bool {
        Path::new(&format!("/sys/class/net/{}/device", interface.name)).exists()
    }

    pub fn is_wireless(interface: &NetworkInterface) -> bool {
        Path::new(&format!("/sys/class/net/{}/wireless", interface.name)).exists()
    }
}

#[cfg(not(target_os = "linux"))]
mod fallback_impl {
    use super::*;

    pub fn is_physical(_interface: &NetworkInterface) -> bool {
        true
    }

    pub fn is_wireless(interface: &NetworkInterface) -> bool {
        interface.name.starts_with("wl")
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
