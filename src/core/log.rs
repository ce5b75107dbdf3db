use crate::db::log::{LogRow, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

const MAX_OP_WIDTH: usize = 48;

/// ANSI colour per logged operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn op_target(row: &LogRow) -> String {
    let joined = if row.target.is_empty() {
        row.operation.clone()
    } else {
        format!("{} ({})", row.operation, row.target)
    };

    if joined.chars().count() > MAX_OP_WIDTH {
        let mut cut: String = joined.chars().take(MAX_OP_WIDTH - 3).collect();
        cut.push_str("...");
        cut
    } else {
        joined
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render the audit log, one aligned line per row.
    pub fn render(rows: &[LogRow]) -> Vec<String> {
        let id_w = rows.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|r| r.date.len()).max().unwrap_or(0);
        let op_w = rows
            .iter()
            .map(|r| op_target(r).chars().count())
            .max()
            .unwrap_or(0);

        rows.iter()
            .map(|r| {
                let label = op_target(r);
                let padding = " ".repeat(op_w.saturating_sub(label.chars().count()));
                let (op, rest) = label.split_once(' ').unwrap_or((label.as_str(), ""));
                let colored = color_for_operation(&r.operation).paint(op).to_string();
                let sep = if rest.is_empty() { "" } else { " " };

                format!(
                    "{:>id_w$}: {:<date_w$} | {colored}{sep}{rest}{padding} => {}",
                    r.id, r.date, r.message
                )
            })
            .collect()
    }

    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let rows = load_log(&pool.conn)?;

        println!("📜 Internal log:\n");
        for line in Self::render(&rows) {
            println!("{line}");
        }

        Ok(())
    }
}
