use crate::models::Session;

/// Shown instead of a duration while a session has no check-out.
pub const IN_PROGRESS: &str = "in progress";

/// Sum of the closed sessions' minutes.
pub fn total_duration_minutes(sessions: &[Session]) -> i64 {
    sessions.iter().filter_map(|s| s.duration_minutes).sum()
}

/// `HH:MM`, hours unbounded (1500 → `25:00`).
pub fn format_duration(minutes: Option<i64>) -> String {
    match minutes {
        None => IN_PROGRESS.to_string(),
        Some(m) => {
            let sign = if m < 0 { "-" } else { "" };
            let abs = m.abs();
            format!("{}{:02}:{:02}", sign, abs / 60, abs % 60)
        }
    }
}
