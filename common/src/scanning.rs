//! The link-layer transport discovery is built on.

use std::net::Ipv4Addr;
use std::time::Duration;

use crate::network::host::HostRecord;
use crate::network::subnet::SubnetTarget;

/// Sends one broadcast discovery probe and gathers the replies.
pub trait Prober {
    /// The IPv4 address of the interface probes leave from.
    fn local_ipv4(&self) -> anyhow::Result<Ipv4Addr>;

    /// Probes every host in `target` once and collects replies until `window`
    /// has elapsed. `on_reply` receives the running reply count.
    ///
    /// Replies are returned in arrival order without deduplication.
    fn probe(
        &mut self,
        target: &SubnetTarget,
        window: Duration,
        on_reply: &dyn Fn(usize),
    ) -> anyhow::Result<Vec<HostRecord>>;
}

/// Progress notifications for a running scan. Every method defaults to a no-op.
pub trait ScanHooks {
    fn started(&self, _target: &SubnetTarget) {}
    fn reply(&self, _count: usize) {}
    fn finished(&self) {}
}

pub struct NoHooks;

impl ScanHooks for NoHooks {}
