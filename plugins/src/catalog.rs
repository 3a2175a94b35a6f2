use anyhow::bail;
use ata_common::config::Config;
use ata_common::module::{Module, ModuleSource};
use ata_common::scanning::{NoHooks, Prober, ScanHooks};
use ata_common::vendors::VendorSource;
use ata_core::discovery::DiscoveryEngine;
use ata_core::network::ArpProber;
use ata_core::vendors::{self, VendorResolver};
use tracing::debug;

use crate::discovery::{self, DiscoveryModule};

pub type HooksFactory = Box<dyn Fn() -> Box<dyn ScanHooks>>;
pub type ProberFactory = Box<dyn Fn() -> Box<dyn Prober>>;

/// The modules compiled into the binary.
///
/// The vendor table is owned here rather than by each module, so a failed
/// load stays cached across dismount and remount.
pub struct BuiltinModules {
    cfg: Config,
    hooks: HooksFactory,
    prober: ProberFactory,
    vendors: VendorResolver,
}

impl BuiltinModules {
    pub fn new(cfg: Config) -> Self {
        let vendors = VendorResolver::new(vendors::source_from(&cfg));
        let probe_cfg: Config = cfg.clone();
        Self {
            cfg,
            hooks: Box::new(|| -> Box<dyn ScanHooks> { Box::new(NoHooks) }),
            prober: Box::new(move || -> Box<dyn Prober> { Box::new(ArpProber::for_config(&probe_cfg)) }),
            vendors,
        }
    }

    /// Progress hooks handed to every discovery engine this catalog builds.
    pub fn with_hooks(mut self, hooks: HooksFactory) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn with_prober(mut self, prober: ProberFactory) -> Self {
        self.prober = prober;
        self
    }

    pub fn with_vendors(mut self, source: Box<dyn VendorSource>) -> Self {
        self.vendors = VendorResolver::new(source);
        self
    }

    fn discovery(&self) -> DiscoveryModule {
        let engine = DiscoveryEngine::new((self.prober)(), self.vendors.clone(), &self.cfg)
            .with_hooks((self.hooks)());
        DiscoveryModule::new(engine)
    }
}

impl ModuleSource for BuiltinModules {
    fn names(&self) -> Vec<String> {
        vec![discovery::NAME.to_string()]
    }

    fn load(&self, name: &str) -> anyhow::Result<Box<dyn Module>> {
        debug!("Loading built-in module {name}");
        match name {
            discovery::NAME => Ok(Box::new(self.discovery())),
            _ => bail!("{name} is not a built-in module"),
        }
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
