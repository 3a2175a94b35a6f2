use std::net::Ipv4Addr;

use pnet::util::MacAddr;

/// One discovery reply: who answered and with which hardware address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostRecord {
    pub address: Ipv4Addr,
    pub hardware: MacAddr,
}

impl HostRecord {
    pub fn new(address: Ipv4Addr, hardware: MacAddr) -> Self {
        Self { address, hardware }
    }
}
