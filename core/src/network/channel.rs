//! ARP sweep over a raw Ethernet channel.
//!
//! Requires **root privileges** (or `CAP_NET_RAW`) to open the channel.

use std::net::Ipv4Addr;
use std::time::{Duration, Instant};

use anyhow::{Context, bail};
use ata_common::config::Config;
use ata_common::network::host::HostRecord;
use ata_common::network::range::Ipv4Range;
use ata_common::network::subnet::SubnetTarget;
use ata_common::scanning::Prober;
use ata_protocols::arp::{self, ArpReply};
use pnet::datalink::{
    self, Channel, Config as ChannelConfig, DataLinkReceiver, DataLinkSender, NetworkInterface,
};
use pnet::util::MacAddr;
use tracing::{debug, warn};

use crate::network::interface;

const READ_TIMEOUT: Duration = Duration::from_millis(50);

/// Probes from the interface named in the config, or the best LAN interface.
///
/// The interface is looked up again on every call so a scan always reflects
/// the current addressing.
pub struct ArpProber {
    requested: Option<String>,
}

impl ArpProber {
    pub fn new(requested: Option<String>) -> Self {
        Self { requested }
    }

    pub fn for_config(cfg: &Config) -> Self {
        Self::new(cfg.interface.clone())
    }

    fn interface(&self) -> anyhow::Result<NetworkInterface> {
        interface::select_lan_interface(self.requested.as_deref())
    }
}

impl Prober for ArpProber {
    fn local_ipv4(&self) -> anyhow::Result<Ipv4Addr> {
        interface::ipv4_addr_of(&self.interface()?)
    }

    fn probe(
        &mut self,
        target: &SubnetTarget,
        window: Duration,
        on_reply: &dyn Fn(usize),
    ) -> anyhow::Result<Vec<HostRecord>> {
        if !is_root::is_root() {
            warn!("Not running as root, opening a raw channel will likely fail");
        }

        let interface: NetworkInterface = self.interface()?;
        let src_mac: MacAddr = interface
            .mac
            .with_context(|| format!("{} has no hardware address", interface.name))?;
        let src_addr: Ipv4Addr = interface::ipv4_addr_of(&interface)?;
        let hosts: Ipv4Range = target.hosts()?;

        debug!("Probing {} addresses from {} ({src_addr})", hosts.len(), interface.name);

        let (mut tx, mut rx) = open_eth_channel(&interface, &channel_config(), datalink::channel)?;
        send_requests(tx.as_mut(), src_mac, src_addr, &hosts)?;
        Ok(collect_replies(rx.as_mut(), &hosts, window, on_reply))
    }
}

fn open_eth_channel<F>(
    intf: &NetworkInterface,
    cfg: &ChannelConfig,
    channel_opener: F,
) -> anyhow::Result<(Box<dyn DataLinkSender>, Box<dyn DataLinkReceiver>)>
where
    F: FnOnce(&NetworkInterface, ChannelConfig) -> std::io::Result<Channel>,
{
    let ch: Channel =
        channel_opener(intf, *cfg).with_context(|| format!("opening on {}", intf.name))?;
    match ch {
        Channel::Ethernet(tx, rx) => {
            debug!("Channel on {} established", intf.name);
            Ok((tx, rx))
        }
        _ => bail!("non-ethernet channel for {}", intf.name),
    }
}

fn send_requests(
    tx: &mut dyn DataLinkSender,
    src_mac: MacAddr,
    src_addr: Ipv4Addr,
    hosts: &Ipv4Range,
) -> anyhow::Result<()> {
    for dst_addr in hosts.to_iter() {
        let frame: Vec<u8> = arp::create_request(src_mac, src_addr, dst_addr)?;
        if let Some(Err(e)) = tx.send_to(&frame, None) {
            return Err(e).with_context(|| format!("sending ARP request for {dst_addr}"));
        }
    }
    Ok(())
}

/// Reads frames until `window` has elapsed. Replies from outside `hosts` are
/// dropped, repeats are kept.
fn collect_replies(
    rx: &mut dyn DataLinkReceiver,
    hosts: &Ipv4Range,
    window: Duration,
    on_reply: &dyn Fn(usize),
) -> Vec<HostRecord> {
    let mut replies: Vec<HostRecord> = Vec::new();
    let deadline: Instant = Instant::now() + window;

    while deadline > Instant::now() {
        let frame: &[u8] = match rx.next() {
            Ok(frame) => frame,
            Err(_) => continue,
        };

        match arp::read_reply(frame) {
            Ok(Some(ArpReply {
                sender_addr,
                sender_mac,
            })) if hosts.contains(sender_addr) => {
                replies.push(HostRecord::new(sender_addr, sender_mac));
                on_reply(replies.len());
            }
            Ok(_) => {}
            Err(e) => debug!("Dropping frame: {e}"),
        }
    }

    replies
}

fn channel_config() -> ChannelConfig {
    ChannelConfig {
        read_timeout: Some(READ_TIMEOUT),
        ..Default::default()
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
