//! Frame construction and parsing for the discovery probe.

pub mod arp;
pub mod ethernet;

use thiserror::Error;

pub const MIN_ETH_FRAME_NO_FCS: usize = 60;
pub const ETH_HDR_LEN: usize = 14;
pub const ARP_LEN: usize = 28;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PacketError {
    #[error("buffer of {0} bytes is too small for an Ethernet header")]
    EthernetBuffer(usize),
    #[error("buffer of {0} bytes is too small for an ARP payload")]
    ArpBuffer(usize),
    #[error("truncated or invalid ARP packet (payload len {0})")]
    TruncatedArp(usize),
}
