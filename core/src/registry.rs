use ata_common::error::ShellError;
use ata_common::module::{Module, ModuleSource};
use tracing::debug;

/// Knows which modules exist and how to instantiate them by name.
pub struct ModuleRegistry {
    source: Box<dyn ModuleSource>,
    names: Vec<String>,
}

impl ModuleRegistry {
    pub fn new(source: Box<dyn ModuleSource>) -> Self {
        Self {
            source,
            names: Vec::new(),
        }
    }

    /// Re-reads the source. Names are lower-cased, sorted and de-duplicated.
    pub fn gather(&mut self) -> usize {
        let mut names: Vec<String> = self
            .source
            .names()
            .into_iter()
            .map(|name| name.trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .collect();
        names.sort();
        names.dedup();

        debug!("Gathered {} module(s)", names.len());
        self.names = names;
        self.names.len()
    }

    pub fn list_modules(&mut self) -> Result<&[String], ShellError> {
        if self.gather() == 0 {
            return Err(ShellError::EmptyRegistry);
        }
        Ok(&self.names)
    }

    pub fn contains(&mut self, name: &str) -> bool {
        self.gather();
        self.names.iter().any(|known| known.eq_ignore_ascii_case(name))
    }

    /// Instantiates `name`. Unknown names and failing constructors leave nothing behind.
    pub fn load(&mut self, name: &str) -> Result<Box<dyn Module>, ShellError> {
        if !self.contains(name) {
            return Err(ShellError::ModuleNotFound(name.to_string()));
        }
        let name: String = name.to_lowercase();
        self.source
            .load(&name)
            .map_err(|e| ShellError::mount_failure(Some(&name), format!("{e:#}")))
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

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use ata_common::module::CommandOutcome;

    pub struct EchoModule {
        pub name: String,
        pub fail_teardown: bool,
    }

    impl Module for EchoModule {
        fn name(&self) -> &str {
            &self.name
        }

        fn help(&self) -> &str {
            "ECHO      - Replies with its own name."
        }

        fn handle_command(&mut self, command: &str) -> Result<CommandOutcome, ShellError> {
            match command {
                "echo" => Ok(CommandOutcome::Handled),
                "boom" => Err(ShellError::ScanFailure("boom".into())),
                _ => Ok(CommandOutcome::Unrecognized),
            }
        }

        fn teardown(&mut self) -> anyhow::Result<()> {
            if self.fail_teardown {
                anyhow::bail!("teardown refused");
            }
            Ok(())
        }
    }

    /// Serves every name in `names`. `broken` is listed but never loads.
    pub struct StubSource {
        pub names: Vec<&'static str>,
        pub sticky: Vec<&'static str>,
    }

    impl StubSource {
        pub fn new(names: &[&'static str]) -> Self {
            Self {
                names: names.to_vec(),
                sticky: Vec::new(),
            }
        }
    }

    impl ModuleSource for StubSource {
        fn names(&self) -> Vec<String> {
            self.names.iter().map(|n| n.to_string()).collect()
        }

        fn load(&self, name: &str) -> anyhow::Result<Box<dyn Module>> {
            if name == "broken" {
                anyhow::bail!("module failed to initialise");
            }
            Ok(Box::new(EchoModule {
                name: name.to_string(),
                fail_teardown: self.sticky.iter().any(|sticky| *sticky == name),
            }))
        }
    }

    #[test]
    fn names_are_sorted_and_deduplicated() {
        let mut registry = ModuleRegistry::new(Box::new(StubSource::new(&["zeta", "Alpha", "zeta"])));
        assert_eq!(registry.list_modules().unwrap(), ["alpha", "zeta"]);
    }

    #[test]
    fn empty_source_is_an_error() {
        let mut registry = ModuleRegistry::new(Box::new(StubSource::new(&[])));
        assert_eq!(registry.list_modules().unwrap_err(), ShellError::EmptyRegistry);
    }

    #[test]
    fn unknown_module_is_not_found() {
        let mut registry = ModuleRegistry::new(Box::new(StubSource::new(&["discovery"])));
        let err = registry.load("ghost").err().unwrap();
        assert_eq!(err, ShellError::ModuleNotFound("ghost".into()));
    }

    #[test]
    fn lookup_ignores_case() {
        let mut registry = ModuleRegistry::new(Box::new(StubSource::new(&["discovery"])));
        let module = registry.load("DISCOVERY").unwrap();
        assert_eq!(module.name(), "discovery");
    }

    #[test]
    fn failing_constructor_is_a_mount_failure() {
        let mut registry = ModuleRegistry::new(Box::new(StubSource::new(&["broken"])));
        match registry.load("broken") {
            Err(ShellError::MountFailure { name, reason }) => {
                assert_eq!(name.as_deref(), Some("broken"));
                assert!(reason.contains("failed to initialise"));
            }
            other => panic!("expected mount failure, got {:?}", other.map(|m| m.name().to_string())),
        }
    }
}
