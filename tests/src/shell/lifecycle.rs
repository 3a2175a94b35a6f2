use std::net::Ipv4Addr;

use ata_common::config::Config;
use ata_common::error::ShellError;
use ata_common::scanning::Prober;
use ata_core::registry::ModuleRegistry;
use ata_core::shell::Shell;
use ata_plugins::BuiltinModules;

use crate::support::{EmptySource, FakeModules, FakeProber, FixedVendors, ScriptedConsole, host};

fn modules() -> FakeModules {
    FakeModules::new(
        FakeProber::new(
            Ipv4Addr::new(10, 0, 0, 5),
            vec![host([10, 0, 0, 7], "AA:BB:CC:00:11:22")],
        ),
        FixedVendors::table(&[("AA:BB:CC", "Acme Corp")]),
        vec!["broken"],
    )
}

fn shell(lines: &[&str]) -> Shell<ScriptedConsole> {
    let registry = ModuleRegistry::new(Box::new(modules()));
    Shell::new(registry, ScriptedConsole::new(lines), "ata")
}

#[test]
fn mount_scan_dismount_session() {
    let mut shell = shell(&["mount discovery", "scan", "dismount", "exit", "help"]);
    shell.run().unwrap();

    let prompts: &[String] = &shell.console().prompts;
    assert_eq!(prompts, ["ata> ", "discovery> ", "discovery> ", "ata> "]);
    assert!(!shell.state().is_running());
    assert!(shell.state().mounted().is_none());
}

#[test]
fn second_mount_is_refused() {
    let mut shell = shell(&[]);
    shell.mount("discovery").unwrap();

    assert_eq!(shell.mount("discovery"), Err(ShellError::ModuleAlreadyPresent));
    assert_eq!(shell.mount("broken"), Err(ShellError::ModuleAlreadyPresent));
    assert_eq!(shell.state().mounted(), Some("discovery"));
}

#[test]
fn dismount_when_idle_fails() {
    let mut shell = shell(&[]);
    assert_eq!(shell.dismount(), Err(ShellError::NoModuleLoaded));
    assert_eq!(shell.state().title(), "ata");
}

#[test]
fn failed_load_leaves_shell_idle() {
    let mut shell = shell(&[]);
    assert!(matches!(shell.mount("broken"), Err(ShellError::MountFailure { .. })));
    assert_eq!(shell.mount("portscan"), Err(ShellError::ModuleNotFound("portscan".into())));
    assert!(shell.state().mounted().is_none());
}

#[test]
fn interactive_selection_mounts_by_index() {
    // listed as 0. BROKEN, 1. DISCOVERY
    let mut picks = shell(&["1"]);
    picks.execute("mount").unwrap();
    assert_eq!(picks.state().mounted(), Some("discovery"));
    assert_eq!(picks.console().prompts, ["select> "]);

    let mut broken = shell(&["0"]);
    assert!(matches!(broken.execute("mount"), Err(ShellError::MountFailure { .. })));

    let mut out_of_range = shell(&["2"]);
    assert!(matches!(out_of_range.execute("mount"), Err(ShellError::MountFailure { .. })));
    assert!(out_of_range.state().mounted().is_none());
}

#[test]
fn scan_failures_do_not_stop_the_loop() {
    let silent = FakeModules::new(
        FakeProber::new(Ipv4Addr::new(10, 0, 0, 5), Vec::new()),
        FixedVendors::table(&[]),
        Vec::new(),
    );
    let probes = silent.prober.probes.clone();
    let registry = ModuleRegistry::new(Box::new(silent));
    let mut shell = Shell::new(registry, ScriptedConsole::new(&["mount discovery", "scan", "scan"]), "ata");

    shell.run().unwrap();
    assert_eq!(probes.get(), 2);
    assert_eq!(shell.state().mounted(), Some("discovery"));
}

#[test]
fn empty_registry_does_not_block_startup() {
    let registry = ModuleRegistry::new(Box::new(EmptySource));
    let mut shell = Shell::new(registry, ScriptedConsole::new(&["lsmod", "help", "exit"]), "ata");

    shell.run().unwrap();
    assert_eq!(shell.console().prompts.len(), 3);
    assert_eq!(shell.list_modules(), Err(ShellError::EmptyRegistry));
    assert_eq!(shell.select_module(), Err(ShellError::EmptyRegistry));
}

#[test]
fn unknown_input_without_module_is_invalid() {
    let mut shell = shell(&[]);
    assert_eq!(shell.execute("scan"), Err(ShellError::InvalidCommand));
    assert_eq!(shell.execute("   "), Ok(()));
}

#[test]
fn vendor_failure_is_cached_across_remounts() {
    let vendors = FixedVendors::failing();
    let loads = vendors.loads.clone();
    let prober = FakeProber::new(
        Ipv4Addr::new(10, 0, 0, 5),
        vec![host([10, 0, 0, 7], "AA:BB:CC:00:11:22")],
    );
    let scans = prober.probes.clone();
    let catalog = BuiltinModules::new(Config::default())
        .with_prober(Box::new(move || -> Box<dyn Prober> { Box::new(prober.clone()) }))
        .with_vendors(Box::new(vendors));
    let script = ["mount discovery", "scan", "dismount", "mount discovery", "scan", "exit"];
    let mut shell = Shell::new(ModuleRegistry::new(Box::new(catalog)), ScriptedConsole::new(&script), "ata");

    shell.run().unwrap();

    assert_eq!(scans.get(), 2);
    assert_eq!(loads.get(), 1);
}
