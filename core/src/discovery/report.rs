use std::fmt;
use std::net::Ipv4Addr;
use std::time::Duration;

use ata_common::network::subnet::SubnetTarget;
use chrono::NaiveDateTime;

const ELAPSED_DIGITS: usize = 5;
const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub address: Ipv4Addr,
    pub hardware: String,
    pub vendor: String,
}

impl fmt::Display for ReportRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<18} {:<20} {:<20}",
            self.address.to_string(),
            self.hardware,
            self.vendor
        )
    }
}

#[derive(Debug, Clone)]
pub struct DiscoveryReport {
    pub target: SubnetTarget,
    pub rows: Vec<ReportRow>,
    pub elapsed: Duration,
    pub finished_at: NaiveDateTime,
}

impl DiscoveryReport {
    pub fn header() -> String {
        format!("{:<18} {:<20} {:<20}", "Address", "Hardware", "Vendor")
    }

    pub fn closing_line(&self) -> String {
        format!(
            "Finished scan in {}s on {}.",
            truncate_elapsed(self.elapsed),
            self.finished_at.format(CTIME_FORMAT)
        )
    }

    /// Header, one line per host, closing line.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = Vec::with_capacity(self.rows.len() + 2);
        lines.push(Self::header());
        lines.extend(self.rows.iter().map(ReportRow::to_string));
        lines.push(self.closing_line());
        lines
    }
}

/// First five characters of the decimal seconds, `2.013456` -> `2.013`,
/// `12.0` -> `12.0`. Whole seconds keep their `.0`.
pub fn truncate_elapsed(elapsed: Duration) -> String {
    format!("{:?}", elapsed.as_secs_f64())
        .chars()
        .take(ELAPSED_DIGITS)
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
