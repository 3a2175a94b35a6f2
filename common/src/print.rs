//! User-visible output.
//!
//! Everything the shell prints goes through a tracing event with target
//! [`PRINT_TARGET`] so the terminal formatter can emit it verbatim while
//! diagnostics keep their level prefix.

use tracing::info;

pub const PRINT_TARGET: &str = "ata::print";

pub fn print(msg: &str) {
    info!(target: "ata::print", raw_msg = msg);
}

pub fn print_lines<I, S>(lines: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        print(line.as_ref());
    }
}
