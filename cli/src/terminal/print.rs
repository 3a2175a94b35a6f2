use ata_common::print::print;
use colored::*;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

const BANNER: &str = r#"
                         __
                  ____ _/ /_____ _
                 / __ `/ __/ __ `/
                / /_/ / /_/ /_/ /
                \__,_/\__/\__,_/
"#;

pub fn banner(no_banner: bool, quiet: bool) {
    if no_banner || quiet {
        return;
    }

    let text_content: String = format!("⟦ ATA v{} ⟧ ", env!("CARGO_PKG_VERSION"));
    let text_width: usize = ::console::measure_text_width(&text_content);
    let text: ColoredString = text_content.color(colors::PRIMARY).bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).color(colors::SEPARATOR);

    print(&format!("{sep}{text}{sep}"));
    print(&format!("{}", BANNER.color(colors::PRIMARY)));
}

pub fn header(msg: &str, quiet: bool) {
    if quiet {
        return;
    }
    print(&header_line(msg));
}

pub fn header_line(msg: &str) -> String {
    let formatted: String = format!("⟦ {} ⟧", msg.to_uppercase());
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    format!(
        "{}{}{}",
        "─".repeat(left).color(colors::SEPARATOR),
        formatted.color(colors::PRIMARY),
        "─".repeat(right).color(colors::SEPARATOR)
    )
}

pub fn end_of_program() {
    print(&format!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)));
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
