//! User-facing status lines (stdout, stderr for errors).

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Clone, Copy)]
enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Tone::Info => ("\x1b[34m", "ℹ️"),
            Tone::Success => ("\x1b[32m", "✅"),
            Tone::Warning => ("\x1b[33m", "⚠️"),
            Tone::Error => ("\x1b[31m", "❌"),
        }
    }
}

fn line<T: fmt::Display>(tone: Tone, msg: T) -> String {
    let (color, icon) = tone.style();
    format!("{color}{BOLD}{icon}{RESET} {msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(Tone::Info, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(Tone::Success, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(Tone::Warning, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(Tone::Error, msg));
}

/// Section header, e.g. one per subject in `list`.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{BOLD}\x1b[36m=== {msg} ==={RESET}");
}
