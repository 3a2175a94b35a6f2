//! # Network Discovery
//!
//! Resolves the local subnet, sweeps it with one discovery probe and pairs
//! every responder with its manufacturer.
//!
//! A scan that hears nothing is a [`ShellError::ScanFailure`]. An empty subnet
//! and a probe that never got out look the same from here and are reported
//! the same way.

pub mod report;

use std::net::Ipv4Addr;
use std::time::{Duration, Instant};

use ata_common::config::Config;
use ata_common::error::ShellError;
use ata_common::network::host::HostRecord;
use ata_common::network::subnet::{self, SubnetTarget};
use ata_common::scanning::{NoHooks, Prober, ScanHooks};
use chrono::Local;
use tracing::{debug, info, warn};

use crate::vendors::VendorResolver;
pub use report::{DiscoveryReport, ReportRow};

pub struct DiscoveryEngine {
    prober: Box<dyn Prober>,
    vendors: VendorResolver,
    hooks: Box<dyn ScanHooks>,
    netmask: Ipv4Addr,
    window: Duration,
}

impl DiscoveryEngine {
    pub fn new(prober: Box<dyn Prober>, vendors: VendorResolver, cfg: &Config) -> Self {
        Self {
            prober,
            vendors,
            hooks: Box::new(NoHooks),
            netmask: cfg.netmask,
            window: cfg.probe_window,
        }
    }

    pub fn with_hooks(mut self, hooks: Box<dyn ScanHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    /// The subnet around the prober's own address. Recomputed on every call.
    pub fn resolve_target(&self) -> Result<SubnetTarget, ShellError> {
        let host: Ipv4Addr = self
            .prober
            .local_ipv4()
            .map_err(|e| ShellError::ScanFailure(format!("{e:#}")))?;
        Ok(subnet::resolve_target(host, self.netmask))
    }

    /// One probe across `target`. Blocks for the whole collection window.
    pub fn scan(&mut self, target: &SubnetTarget) -> Result<Vec<HostRecord>, ShellError> {
        self.hooks.started(target);
        let hooks: &dyn ScanHooks = self.hooks.as_ref();
        let result = self.prober.probe(target, self.window, &|count| hooks.reply(count));
        self.hooks.finished();

        let hosts: Vec<HostRecord> = result.map_err(|e| ShellError::ScanFailure(format!("{e:#}")))?;
        if hosts.is_empty() {
            return Err(ShellError::ScanFailure(format!(
                "no replies from {target} within {:.1}s",
                self.window.as_secs_f64()
            )));
        }

        debug!("{} replies from {target}", hosts.len());
        Ok(hosts)
    }

    pub fn vendor_for(&self, hardware: &str) -> String {
        self.vendors.vendor_for(hardware)
    }

    /// Resolve, scan and attach vendors.
    pub fn run(&mut self) -> Result<DiscoveryReport, ShellError> {
        let target: SubnetTarget = self.resolve_target()?;
        info!("Searching for hosts in {target}");

        if let Err(e) = self.vendors.ensure_loaded() {
            warn!("{e}");
        }

        let start_time: Instant = Instant::now();
        let hosts: Vec<HostRecord> = self.scan(&target)?;

        let rows: Vec<ReportRow> = hosts
            .iter()
            .map(|host| {
                let hardware: String = host.hardware.to_string();
                ReportRow {
                    address: host.address,
                    vendor: self.vendors.vendor_for(&hardware),
                    hardware,
                }
            })
            .collect();

        Ok(DiscoveryReport {
            target,
            rows,
            elapsed: start_time.elapsed(),
            finished_at: Local::now().naive_local(),
        })
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
