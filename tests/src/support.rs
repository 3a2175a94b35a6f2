//! Fakes shared by the scenario tests. Nothing here touches the network.

use std::cell::Cell;
use std::collections::VecDeque;
use std::net::Ipv4Addr;
use std::rc::Rc;
use std::time::Duration;

use ata_common::config::Config;
use ata_common::module::{Module, ModuleSource};
use ata_common::network::host::HostRecord;
use ata_common::network::subnet::SubnetTarget;
use ata_common::scanning::Prober;
use ata_common::vendors::{VendorLookup, VendorSource, VendorTable};
use ata_core::discovery::DiscoveryEngine;
use ata_core::shell::Console;
use ata_core::vendors::VendorResolver;
use ata_plugins::DiscoveryModule;
use pnet::util::MacAddr;

pub fn host(ip: [u8; 4], mac: &str) -> HostRecord {
    let hardware: MacAddr = mac.parse().unwrap();
    HostRecord::new(Ipv4Addr::from(ip), hardware)
}

/// Answers every probe with the same replies.
#[derive(Clone)]
pub struct FakeProber {
    pub host: Ipv4Addr,
    pub replies: Vec<HostRecord>,
    pub probes: Rc<Cell<usize>>,
}

impl FakeProber {
    pub fn new(host: Ipv4Addr, replies: Vec<HostRecord>) -> Self {
        Self {
            host,
            replies,
            probes: Rc::new(Cell::new(0)),
        }
    }
}

impl Prober for FakeProber {
    fn local_ipv4(&self) -> anyhow::Result<Ipv4Addr> {
        Ok(self.host)
    }

    fn probe(
        &mut self,
        _target: &SubnetTarget,
        _window: Duration,
        on_reply: &dyn Fn(usize),
    ) -> anyhow::Result<Vec<HostRecord>> {
        self.probes.set(self.probes.get() + 1);
        for count in 1..=self.replies.len() {
            on_reply(count);
        }
        Ok(self.replies.clone())
    }
}

/// A fixed vendor table, or a load failure when `entries` is `None`.
#[derive(Clone)]
pub struct FixedVendors {
    pub entries: Option<Vec<(&'static str, &'static str)>>,
    pub loads: Rc<Cell<usize>>,
}

impl FixedVendors {
    pub fn table(entries: &[(&'static str, &'static str)]) -> Self {
        Self {
            entries: Some(entries.to_vec()),
            loads: Rc::new(Cell::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            entries: None,
            loads: Rc::new(Cell::new(0)),
        }
    }
}

impl VendorSource for FixedVendors {
    fn load(&self) -> anyhow::Result<Box<dyn VendorLookup>> {
        self.loads.set(self.loads.get() + 1);
        match &self.entries {
            Some(entries) => {
                let table: VendorTable = entries.iter().copied().collect();
                Ok(Box::new(table))
            }
            None => anyhow::bail!("manufacturer file is missing"),
        }
    }
}

pub fn discovery_module(prober: FakeProber, vendors: FixedVendors) -> DiscoveryModule {
    let resolver = VendorResolver::new(Box::new(vendors));
    DiscoveryModule::new(DiscoveryEngine::new(Box::new(prober), resolver, &Config::default()))
}

/// Serves a `discovery` module wired to fakes, plus any extra names given.
/// Every load shares one vendor table.
pub struct FakeModules {
    pub prober: FakeProber,
    pub vendors: VendorResolver,
    pub extra: Vec<&'static str>,
}

impl FakeModules {
    pub fn new(prober: FakeProber, vendors: FixedVendors, extra: Vec<&'static str>) -> Self {
        Self {
            prober,
            vendors: VendorResolver::new(Box::new(vendors)),
            extra,
        }
    }
}

impl ModuleSource for FakeModules {
    fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = vec!["discovery".to_string()];
        names.extend(self.extra.iter().map(|name| name.to_string()));
        names
    }

    fn load(&self, name: &str) -> anyhow::Result<Box<dyn Module>> {
        match name {
            "discovery" => {
                let engine = DiscoveryEngine::new(Box::new(self.prober.clone()), self.vendors.clone(), &Config::default());
                Ok(Box::new(DiscoveryModule::new(engine)))
            }
            other => anyhow::bail!("{other} failed to initialise"),
        }
    }
}

pub struct EmptySource;

impl ModuleSource for EmptySource {
    fn names(&self) -> Vec<String> {
        Vec::new()
    }

    fn load(&self, name: &str) -> anyhow::Result<Box<dyn Module>> {
        anyhow::bail!("{name} does not exist")
    }
}

/// Replays canned input lines, then reports end of input.
#[derive(Default)]
pub struct ScriptedConsole {
    pub lines: VecDeque<String>,
    pub prompts: Vec<String>,
    pub clears: usize,
}

impl ScriptedConsole {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|line| line.to_string()).collect(),
            ..Default::default()
        }
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }

    fn clear(&mut self) -> anyhow::Result<()> {
        self.clears += 1;
        Ok(())
    }
}
