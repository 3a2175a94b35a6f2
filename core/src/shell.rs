//! # Shell
//!
//! Reads one line at a time and routes it either to a [`Builtin`] or to the
//! mounted module. At most one module is mounted; mounting again, even the
//! same module, is refused until the current one is dismounted.

pub mod commands;

use ata_common::error::ShellError;
use ata_common::module::{CommandOutcome, Module};
use ata_common::print;
use tracing::{debug, error, warn};

use crate::registry::ModuleRegistry;
pub use commands::Builtin;

const SELECT_PROMPT: &str = "select> ";

/// Line input and screen control supplied by the front end.
pub trait Console {
    /// `Ok(None)` means input is exhausted.
    fn read_line(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;

    fn clear(&mut self) -> anyhow::Result<()>;
}

/// Everything that changes between prompts.
pub struct ShellState {
    module: Option<Box<dyn Module>>,
    title: String,
    running: bool,
}

impl ShellState {
    fn new(title: String) -> Self {
        Self {
            module: None,
            title,
            running: false,
        }
    }

    pub fn mounted(&self) -> Option<&str> {
        self.module.as_ref().map(|module| module.name())
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

pub struct Shell<C: Console> {
    state: ShellState,
    registry: ModuleRegistry,
    console: C,
    default_title: String,
}

impl<C: Console> Shell<C> {
    pub fn new(registry: ModuleRegistry, console: C, default_title: impl Into<String>) -> Self {
        let default_title: String = default_title.into();
        Self {
            state: ShellState::new(default_title.clone()),
            registry,
            console,
            default_title,
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn prompt(&self) -> String {
        format!("{}> ", self.state.title)
    }

    pub fn spawn(&mut self) {
        if let Err(e) = self.registry.list_modules() {
            warn!("{e}");
        }
        self.state.running = true;
    }

    pub fn kill(&mut self) {
        self.state.running = false;
    }

    /// Runs until `exit` or end of input. Only console I/O errors escape.
    pub fn run(&mut self) -> anyhow::Result<()> {
        self.spawn();

        while self.state.running {
            let prompt: String = self.prompt();
            let Some(line) = self.console.read_line(&prompt)? else {
                debug!("Input closed");
                self.kill();
                break;
            };

            if let Err(e) = self.execute(&line) {
                error!("{e}");
            }
        }
        Ok(())
    }

    /// Routes one input line.
    pub fn execute(&mut self, line: &str) -> Result<(), ShellError> {
        let command: String = line.trim().to_lowercase();
        let mut words = command.split_whitespace();
        let Some(keyword) = words.next() else {
            return Ok(());
        };

        match Builtin::parse(keyword) {
            Some(Builtin::Help) => {
                self.help();
                Ok(())
            }
            Some(Builtin::Exit) => {
                self.kill();
                Ok(())
            }
            Some(Builtin::Clear) => {
                self.clear();
                Ok(())
            }
            Some(Builtin::Mount) => match words.next() {
                Some(name) => self.mount(name),
                None => self.select_module(),
            },
            Some(Builtin::Ls) => self.module_information(),
            Some(Builtin::Lsmod) => self.display_modules(),
            Some(Builtin::Dismount) => self.dismount(),
            None => self.forward(&command),
        }
    }

    pub fn mount(&mut self, name: &str) -> Result<(), ShellError> {
        if self.state.module.is_some() {
            return Err(ShellError::ModuleAlreadyPresent);
        }

        let module: Box<dyn Module> = self.registry.load(name)?;
        print::print(&format!("Mounted {}.", module.name()));

        self.state.title = module.name().to_string();
        self.state.module = Some(module);
        Ok(())
    }

    /// A failing teardown keeps the module mounted.
    pub fn dismount(&mut self) -> Result<(), ShellError> {
        let Some(module) = self.state.module.as_mut() else {
            return Err(ShellError::NoModuleLoaded);
        };

        module
            .teardown()
            .map_err(|e| ShellError::DismountFailure(format!("{e:#}")))?;
        print::print(&format!("Dismounted {}.", module.name()));

        self.state.module = None;
        self.state.title = self.default_title.clone();
        Ok(())
    }

    pub fn list_modules(&mut self) -> Result<Vec<String>, ShellError> {
        self.registry.list_modules().map(<[String]>::to_vec)
    }

    /// Shows the module list and mounts the entry picked at the `select>` prompt.
    pub fn select_module(&mut self) -> Result<(), ShellError> {
        let names: Vec<String> = self.list_modules()?;
        if self.state.module.is_some() {
            return Err(ShellError::ModuleAlreadyPresent);
        }

        print_module_list(&names);

        let selection: String = self
            .console
            .read_line(SELECT_PROMPT)
            .map_err(|e| ShellError::mount_failure(None, format!("{e:#}")))?
            .ok_or_else(|| ShellError::mount_failure(None, "no selection was made"))?;
        let selection: &str = selection.trim();

        let idx: usize = selection
            .parse()
            .map_err(|_| ShellError::mount_failure(None, format!("'{selection}' is not a module index")))?;
        let name: &String = names
            .get(idx)
            .ok_or_else(|| ShellError::mount_failure(None, format!("selection {idx} is out of range")))?;

        self.mount(name)
    }

    fn display_modules(&mut self) -> Result<(), ShellError> {
        let names: Vec<String> = self.list_modules()?;
        print_module_list(&names);
        Ok(())
    }

    fn module_information(&self) -> Result<(), ShellError> {
        let name: &str = self.state.mounted().ok_or(ShellError::NoModuleLoaded)?;
        print::print(&format!("The {name} module is currently loaded."));
        Ok(())
    }

    fn help(&self) {
        print::print_lines(commands::help_lines());
        if let Some(module) = &self.state.module {
            print::print("");
            print::print(&format!("{}:", module.name()));
            print::print(module.help());
        }
    }

    fn clear(&mut self) {
        if let Err(e) = self.console.clear() {
            warn!("Could not clear the screen: {e:#}");
        }
    }

    fn forward(&mut self, command: &str) -> Result<(), ShellError> {
        let Some(module) = self.state.module.as_mut() else {
            return Err(ShellError::InvalidCommand);
        };

        match module.handle_command(command)? {
            CommandOutcome::Handled => Ok(()),
            CommandOutcome::Unrecognized => Err(ShellError::InvalidCommand),
        }
    }
}

fn print_module_list(names: &[String]) {
    for (idx, name) in names.iter().enumerate() {
        print::print(&format!("{idx}. {}", name.to_uppercase()));
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
