/// Length of `XX:XX:XX`, the manufacturer part of a hardware address.
const PREFIX_LEN: usize = 8;

/// Normalizes a hardware address to the uppercase, colon separated prefix
/// used as a vendor table key.
///
/// `aa-bb-cc-00-11-22` and `AA:BB:CC:00:11:22` both become `AA:BB:CC`.
pub fn oui_prefix(hardware: &str) -> String {
    hardware
        .trim()
        .chars()
        .take(PREFIX_LEN)
        .map(|c| if c == '-' { ':' } else { c.to_ascii_uppercase() })
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
