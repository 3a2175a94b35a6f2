//! The capability a loadable shell extension exposes.

use crate::error::ShellError;

/// What a module did with a line forwarded by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Handled,
    Unrecognized,
}

pub trait Module {
    /// Display name, also used as the prompt title while mounted.
    fn name(&self) -> &str;

    /// One line per command the module understands.
    fn help(&self) -> &str;

    /// Receives every line the shell does not recognise itself.
    fn handle_command(&mut self, command: &str) -> Result<CommandOutcome, ShellError>;

    /// Called on dismount. An error keeps the module mounted.
    fn teardown(&mut self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// A directory-like collection of named modules.
pub trait ModuleSource {
    /// Names of every module this source can produce.
    fn names(&self) -> Vec<String>;

    fn load(&self, name: &str) -> anyhow::Result<Box<dyn Module>>;
}
