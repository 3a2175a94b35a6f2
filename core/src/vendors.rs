//! # Vendor Resolution
//!
//! Maps hardware addresses to manufacturers. The table is loaded on first use;
//! a failed load is remembered for the rest of the session and never retried.

use std::cell::{Ref, RefCell};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::{Context, anyhow};
use ata_common::config::Config;
use ata_common::error::ShellError;
use ata_common::network::mac;
use ata_common::vendors::{VendorLookup, VendorSource, VendorTable};
use mac_oui::Oui;
use tracing::debug;

pub const UNKNOWN_VENDOR: &str = "Unknown Vendor";
pub const UNOBTAINABLE: &str = "Unobtainable";

pub enum VendorStatus {
    NotLoaded,
    Loaded(Box<dyn VendorLookup>),
    LoadFailed(String),
}

struct SharedVendors {
    source: Box<dyn VendorSource>,
    status: VendorStatus,
}

/// Handle to one vendor table. Clones share the table and its load status,
/// so every module built from the same resolver sees a single load attempt.
#[derive(Clone)]
pub struct VendorResolver {
    shared: Rc<RefCell<SharedVendors>>,
}

impl VendorResolver {
    pub fn new(source: Box<dyn VendorSource>) -> Self {
        Self {
            shared: Rc::new(RefCell::new(SharedVendors {
                source,
                status: VendorStatus::NotLoaded,
            })),
        }
    }

    pub fn status(&self) -> Ref<'_, VendorStatus> {
        Ref::map(self.shared.borrow(), |shared| &shared.status)
    }

    /// Loads the table if nothing was attempted yet.
    pub fn ensure_loaded(&self) -> Result<(), ShellError> {
        let mut shared = self.shared.borrow_mut();
        if matches!(shared.status, VendorStatus::NotLoaded) {
            let loaded = shared.source.load();
            shared.status = match loaded {
                Ok(table) => {
                    debug!("Manufacturer database loaded");
                    VendorStatus::Loaded(table)
                }
                Err(e) => {
                    let reason: String = format!("{e:#}");
                    debug!("Manufacturer lookups disabled for this session: {reason}");
                    VendorStatus::LoadFailed(reason)
                }
            };
        }

        match &shared.status {
            VendorStatus::LoadFailed(reason) => Err(ShellError::VendorTableUnavailable(reason.clone())),
            _ => Ok(()),
        }
    }

    /// Manufacturer for `hardware`, [`UNKNOWN_VENDOR`] when the prefix is not
    /// in the table, [`UNOBTAINABLE`] when there is no table.
    pub fn vendor_for(&self, hardware: &str) -> String {
        if self.ensure_loaded().is_err() {
            return UNOBTAINABLE.to_string();
        }
        let shared = self.shared.borrow();
        let VendorStatus::Loaded(table) = &shared.status else {
            return UNOBTAINABLE.to_string();
        };

        table
            .lookup(&mac::oui_prefix(hardware))
            .unwrap_or_else(|| UNKNOWN_VENDOR.to_string())
    }
}

/// A JSON object of `"AA:BB:CC": "Manufacturer"` pairs.
pub struct JsonVendorFile {
    path: PathBuf,
}

impl JsonVendorFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl VendorSource for JsonVendorFile {
    fn load(&self) -> anyhow::Result<Box<dyn VendorLookup>> {
        let content: String = fs::read_to_string(&self.path)
            .with_context(|| format!("reading {}", self.path.display()))?;
        let entries: HashMap<String, String> = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", self.path.display()))?;

        let table: VendorTable = entries.into_iter().collect();
        debug!("{} manufacturer entries read from {}", table.len(), self.path.display());
        Ok(Box::new(table))
    }
}

/// The **Organizationally unique identifier** database bundled with `mac_oui`.
pub struct EmbeddedOuiDb;

struct OuiLookup(Oui);

impl VendorLookup for OuiLookup {
    fn lookup(&self, prefix: &str) -> Option<String> {
        match self.0.lookup_by_mac(&format!("{prefix}:00:00:00")) {
            Ok(Some(entry)) => Some(entry.company_name.clone()),
            _ => None,
        }
    }
}

impl VendorSource for EmbeddedOuiDb {
    fn load(&self) -> anyhow::Result<Box<dyn VendorLookup>> {
        let db: Oui = Oui::default().map_err(|e| anyhow!("failed to load OUI database: {e}"))?;
        Ok(Box::new(OuiLookup(db)))
    }
}

pub fn source_from(cfg: &Config) -> Box<dyn VendorSource> {
    match &cfg.vendors {
        Some(path) => Box::new(JsonVendorFile::new(path)),
        None => Box::new(EmbeddedOuiDb),
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
