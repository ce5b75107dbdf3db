//! ANSI colouring for the session tables.

use crate::models::EntryKind;
use crate::utils::formatting::mins2readable;

pub const RESET: &str = "\x1b[0m";

const GREY: &str = "\x1b[90m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";

fn paint(color: &str, value: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Greyed-out placeholder (`--:--`, `in progress`).
pub fn muted(value: &str) -> String {
    paint(GREY, value)
}

/// Signed `+HH:MM`, green above target and red below.
pub fn surplus(mins: i64) -> String {
    let text = mins2readable(mins, true, true);
    match mins.signum() {
        1 => paint(GREEN, &text),
        -1 => paint(RED, &text),
        _ => text,
    }
}

/// Check-in times green, check-out times red, blanks grey.
pub fn entry_time(value: &str, kind: EntryKind) -> String {
    if value.trim().is_empty() || value.trim() == "--:--" {
        return muted(value);
    }

    match kind {
        EntryKind::CheckIn => paint(GREEN, value),
        EntryKind::CheckOut => paint(RED, value),
    }
}
