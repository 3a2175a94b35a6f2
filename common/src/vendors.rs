use std::collections::HashMap;

use crate::network::mac;

/// Resolves an `AA:BB:CC` prefix to a manufacturer.
pub trait VendorLookup {
    fn lookup(&self, prefix: &str) -> Option<String>;
}

/// Manufacturer names keyed by normalized hardware-address prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VendorTable {
    entries: HashMap<String, String>,
}

impl VendorTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, prefix: &str, vendor: impl Into<String>) {
        self.entries.insert(mac::oui_prefix(prefix), vendor.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for VendorTable
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = VendorTable::new();
        for (prefix, vendor) in iter {
            table.insert(prefix.as_ref(), vendor);
        }
        table
    }
}

impl VendorLookup for VendorTable {
    fn lookup(&self, prefix: &str) -> Option<String> {
        self.entries.get(prefix).cloned()
    }
}

/// Where a vendor table comes from. Loaded at most once per session.
pub trait VendorSource {
    fn load(&self) -> anyhow::Result<Box<dyn VendorLookup>>;
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
