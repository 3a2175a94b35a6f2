use std::path::PathBuf;

use ata_common::config::Config;
use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "ata")]
#[command(about = "An interactive shell for local network modules.", version)]
pub struct CommandLine {
    /// JSON file mapping hardware prefixes (AA:BB:CC) to manufacturers
    #[arg(long, value_name = "PATH")]
    pub vendors: Option<PathBuf>,

    /// Interface to send discovery probes from
    #[arg(short, long, value_name = "NAME")]
    pub interface: Option<String>,

    /// Mount a module before the first prompt
    #[arg(short, long, value_name = "NAME")]
    pub mount: Option<String>,

    /// Skip the banner
    #[arg(long)]
    pub no_banner: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only report errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            vendors: self.vendors.clone(),
            interface: self.interface.clone(),
            ..Default::default()
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
