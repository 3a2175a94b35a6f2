use ata_common::error::ShellError;
use ata_common::module::{CommandOutcome, Module};
use ata_common::print;
use ata_core::discovery::{DiscoveryEngine, DiscoveryReport};

pub const NAME: &str = "discovery";

const HELP: &str = "SCAN      - Scans the network for connected devices.";

/// Finds the devices sharing the local subnet.
pub struct DiscoveryModule {
    engine: DiscoveryEngine,
}

impl DiscoveryModule {
    pub fn new(engine: DiscoveryEngine) -> Self {
        Self { engine }
    }

    pub fn scan(&mut self) -> Result<DiscoveryReport, ShellError> {
        self.engine.run()
    }
}

impl Module for DiscoveryModule {
    fn name(&self) -> &str {
        NAME
    }

    fn help(&self) -> &str {
        HELP
    }

    fn handle_command(&mut self, command: &str) -> Result<CommandOutcome, ShellError> {
        match command.split_whitespace().next() {
            Some("scan") => {
                let report: DiscoveryReport = self.scan()?;
                print::print_lines(report.lines());
                Ok(CommandOutcome::Handled)
            }
            _ => Ok(CommandOutcome::Unrecognized),
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
