//! Formatting utilities used for CLI and export outputs.

/// Signed minutes as `+HH:MM` / `-HH:MM` (short) or `+HHh MMm`.
pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 {
        "-"
    } else {
        ""
    };

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}
