use thiserror::Error;

/// Every failure the shell reports to the user.
///
/// The `Display` text is the message printed at the prompt. None of these end
/// the read loop; state is left untouched whenever one is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("There is no module named '{0}'.")]
    ModuleNotFound(String),

    #[error("There is already a module mounted.")]
    ModuleAlreadyPresent,

    #[error("There are no modules currently mounted.")]
    NoModuleLoaded,

    #[error("There was an error whilst trying to dismount the current module: {0}")]
    DismountFailure(String),

    #[error("There was an error whilst scanning the module directory.")]
    EmptyRegistry,

    #[error("Invalid command.")]
    InvalidCommand,

    #[error("There was an error whilst attempting to mount a module: {reason}")]
    MountFailure { name: Option<String>, reason: String },

    #[error("There was an error whilst attempting to scan the network: {0}")]
    ScanFailure(String),

    #[error("Failed to populate manufacturer database: {0}")]
    VendorTableUnavailable(String),
}

impl ShellError {
    pub fn mount_failure(name: Option<&str>, reason: impl ToString) -> Self {
        Self::MountFailure {
            name: name.map(str::to_string),
            reason: reason.to_string(),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_prompt_output() {
        assert_eq!(ShellError::InvalidCommand.to_string(), "Invalid command.");
        assert_eq!(
            ShellError::ModuleAlreadyPresent.to_string(),
            "There is already a module mounted."
        );
        assert_eq!(
            ShellError::ModuleNotFound("ghost".into()).to_string(),
            "There is no module named 'ghost'."
        );
    }

    #[test]
    fn mount_failure_keeps_reason() {
        let err = ShellError::mount_failure(None, "selection 7 is out of range");
        assert!(err.to_string().ends_with("selection 7 is out of range"));
    }
}
