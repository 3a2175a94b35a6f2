use std::net::Ipv4Addr;

use ata_common::error::ShellError;
use ata_common::module::{CommandOutcome, Module};
use ata_common::network::subnet::{self, DEFAULT_NETMASK};
use ata_core::discovery::DiscoveryReport;

use crate::support::{FakeProber, FixedVendors, discovery_module, host};

fn two_replies() -> FakeProber {
    FakeProber::new(
        Ipv4Addr::new(10, 0, 0, 5),
        vec![
            host([10, 0, 0, 7], "AA:BB:CC:00:11:22"),
            host([10, 0, 0, 9], "DE:AD:BE:00:00:01"),
        ],
    )
}

#[test]
fn end_to_end_report() {
    let mut module = discovery_module(two_replies(), FixedVendors::table(&[("AA:BB:CC", "Acme Corp")]));

    let report: DiscoveryReport = module.scan().unwrap();

    assert_eq!(report.target.to_string(), "10.0.0.0/24");
    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].address, Ipv4Addr::new(10, 0, 0, 7));
    assert_eq!(report.rows[0].hardware, "aa:bb:cc:00:11:22");
    assert_eq!(report.rows[0].vendor, "Acme Corp");
    assert_eq!(report.rows[1].address, Ipv4Addr::new(10, 0, 0, 9));
    assert_eq!(report.rows[1].vendor, "Unknown Vendor");

    let lines = report.lines();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("10.0.0.7 "));
    assert!(lines[3].starts_with("Finished scan in "));
}

#[test]
fn missing_vendor_table_still_reports() {
    let vendors = FixedVendors::failing();
    let loads = vendors.loads.clone();
    let mut module = discovery_module(two_replies(), vendors);

    for _ in 0..2 {
        let report = module.scan().unwrap();
        assert!(report.rows.iter().all(|row| row.vendor == "Unobtainable"));
    }
    assert_eq!(loads.get(), 1);
}

#[test]
fn vendor_table_is_loaded_once_per_module() {
    let vendors = FixedVendors::table(&[("AA:BB:CC", "Acme Corp")]);
    let loads = vendors.loads.clone();
    let mut module = discovery_module(two_replies(), vendors);

    module.scan().unwrap();
    module.scan().unwrap();
    assert_eq!(loads.get(), 1);
}

#[test]
fn silent_subnet_is_a_scan_failure() {
    let prober = FakeProber::new(Ipv4Addr::new(192, 168, 1, 10), Vec::new());
    let probes = prober.probes.clone();
    let mut module = discovery_module(prober, FixedVendors::table(&[]));

    assert!(matches!(module.handle_command("scan"), Err(ShellError::ScanFailure(_))));
    assert_eq!(probes.get(), 1);
}

#[test]
fn scan_keyword_is_handled() {
    let mut module = discovery_module(two_replies(), FixedVendors::table(&[]));
    assert_eq!(module.handle_command("scan").unwrap(), CommandOutcome::Handled);
    assert_eq!(module.handle_command("sweep").unwrap(), CommandOutcome::Unrecognized);
}

#[test]
fn resolve_target_examples() {
    let cases = [
        ([192, 168, 1, 10], "192.168.1.0/24"),
        ([10, 0, 0, 5], "10.0.0.0/24"),
        ([172, 16, 254, 254], "172.16.254.0/24"),
    ];
    for (ip, expected) in cases {
        let target = subnet::resolve_target(Ipv4Addr::from(ip), DEFAULT_NETMASK);
        assert_eq!(target.to_string(), expected);
        assert_eq!(target, subnet::resolve_target(Ipv4Addr::from(ip), DEFAULT_NETMASK));
    }
}
