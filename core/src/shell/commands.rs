/// Keywords the shell answers itself, before anything reaches a module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Help,
    Exit,
    Clear,
    Mount,
    Ls,
    Lsmod,
    Dismount,
}

impl Builtin {
    pub const ALL: [Builtin; 7] = [
        Builtin::Help,
        Builtin::Exit,
        Builtin::Clear,
        Builtin::Mount,
        Builtin::Ls,
        Builtin::Lsmod,
        Builtin::Dismount,
    ];

    /// Expects an already lower-cased word.
    pub fn parse(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|builtin| builtin.keyword() == word)
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Builtin::Help => "help",
            Builtin::Exit => "exit",
            Builtin::Clear => "clear",
            Builtin::Mount => "mount",
            Builtin::Ls => "ls",
            Builtin::Lsmod => "lsmod",
            Builtin::Dismount => "dismount",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Builtin::Help => "Prints this display.",
            Builtin::Exit => "Exits this shell environment.",
            Builtin::Clear => "Clears the current text buffer.",
            Builtin::Mount => "Will present a list of all mountable modules.",
            Builtin::Ls => "Presents information about the current module.",
            Builtin::Lsmod => "Will list all available modules.",
            Builtin::Dismount => "Dismount the currently loaded module.",
        }
    }
}

pub fn help_lines() -> Vec<String> {
    let mut lines: Vec<String> = vec![String::from("Commands:")];
    lines.extend(
        Builtin::ALL
            .iter()
            .map(|b| format!("{:<10}- {}", b.keyword().to_uppercase(), b.description())),
    );
    lines
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
