mod commands;
mod terminal;

use ata_common::config::Config;
use ata_common::scanning::ScanHooks;
use ata_core::registry::ModuleRegistry;
use ata_core::shell::Shell;
use ata_plugins::BuiltinModules;
use commands::CommandLine;
use terminal::console::TerminalConsole;
use terminal::print;
use terminal::spinner::SpinnerHooks;
use tracing::error;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    terminal::logging::init_logging(commands.verbose, commands.quiet)?;
    print::banner(commands.no_banner, commands.quiet);

    let cfg: Config = commands.to_config();
    let catalog = BuiltinModules::new(cfg.clone())
        .with_hooks(Box::new(|| -> Box<dyn ScanHooks> { Box::new(SpinnerHooks::new()) }));
    let registry = ModuleRegistry::new(Box::new(catalog));
    let mut shell = Shell::new(registry, TerminalConsole::stdio(), cfg.title.clone());

    print::header("type 'help' for commands", commands.quiet);

    if let Some(name) = commands.mount.as_deref() {
        if let Err(e) = shell.mount(&name.to_lowercase()) {
            error!("{e}");
        }
    }

    shell.run()?;
    print::end_of_program();
    Ok(())
}
