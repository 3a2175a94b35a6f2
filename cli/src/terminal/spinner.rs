use std::io::{self, Write};
use std::sync::Mutex;
use std::time::Duration;

use ata_common::network::subnet::SubnetTarget;
use ata_common::scanning::ScanHooks;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};

const TICK: Duration = Duration::from_millis(100);
const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁", "▁▂▂▂▁", "▁▄▂▄▁", "▂▄▆▄▂", "▄▆█▆▄", "▂▄▆▄▂", "▁▄▂▄▁", "▁▂▂▂▁",
];

/// The spinner currently on screen. Log lines are routed through it so they
/// do not tear the animation.
static ACTIVE: Mutex<Option<ProgressBar>> = Mutex::new(None);

fn active() -> Option<ProgressBar> {
    ACTIVE.lock().ok().and_then(|guard| guard.clone())
}

fn set_active(spinner: Option<ProgressBar>) {
    if let Ok(mut guard) = ACTIVE.lock() {
        *guard = spinner;
    }
}

/// Renders scan progress as an indicatif spinner.
#[derive(Default)]
pub struct SpinnerHooks;

impl SpinnerHooks {
    pub fn new() -> Self {
        Self
    }
}

impl ScanHooks for SpinnerHooks {
    fn started(&self, target: &SubnetTarget) {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
            pb.set_style(style.tick_strings(TICK_STRINGS));
        }
        pb.enable_steady_tick(TICK);
        pb.set_message(format!("Probing {}...", target.to_string().bold()));
        set_active(Some(pb));
    }

    fn reply(&self, count: usize) {
        if let Some(pb) = active() {
            pb.set_message(format!(
                "Identified {} hosts so far...",
                count.to_string().green().bold()
            ));
        }
    }

    fn finished(&self) {
        if let Some(pb) = active() {
            pb.finish_and_clear();
        }
        set_active(None);
    }
}

pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match active() {
            Some(pb) => {
                let msg = String::from_utf8_lossy(buf);
                pb.println(msg.trim_end());
                Ok(buf.len())
            }
            None => io::stdout().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}
