use crate::cli::parser::Commands;
use crate::context::AppContext;
use crate::core::calculator::expected::DaySummary;
use crate::core::calculator::format_duration;
use crate::core::logic::{Core, SubjectReport};
use crate::db::queries::{EntryFilter, load_entries};
use crate::errors::AppResult;
use crate::models::{EntryKind, Session, TimeEntry};
use crate::ui::messages::{header, warning};
use crate::utils::colors::{entry_time, muted, surplus};
use crate::utils::range::Period;
use crate::utils::table::Table;
use crate::utils::DisplayZone;

use super::open_db;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::List {
        period,
        today,
        entries: entries_only,
        all_subjects,
    } = cmd
    {
        let period = resolve_period(period.as_deref(), *today, ctx.zone)?;
        let pool = open_db(ctx)?;

        let filter = if *all_subjects {
            EntryFilter::default()
        } else {
            EntryFilter::subject(ctx.subject_id.clone())
        };

        if *entries_only {
            let entries = load_entries(&pool.conn, &filter.around(&period))?;
            print_entries(&entries, &period, ctx.zone);
            return Ok(());
        }

        // full history: a check-in before the period may still pair inside it
        let entries = load_entries(&pool.conn, &filter)?;

        let reports = if *all_subjects {
            Core::reports_by_subject(&entries, ctx.zone, period, ctx.expected_daily_minutes)
        } else {
            vec![Core::build_report(
                &ctx.subject_id,
                &entries,
                ctx.zone,
                period,
                ctx.expected_daily_minutes,
            )]
        };

        if reports.is_empty() {
            warning(format!("No entries recorded ({}).", period.label()));
        }
        for report in &reports {
            print_report(report, ctx.zone);
        }
    }
    Ok(())
}

fn resolve_period(period: Option<&str>, today_only: bool, zone: DisplayZone) -> AppResult<Period> {
    if today_only {
        let today = zone.today();
        return Ok(Period::Between(today, today));
    }

    match period {
        Some(p) => Period::parse(p),
        None => Ok(Period::month_of(zone.today())),
    }
}

fn print_entries(entries: &[TimeEntry], period: &Period, zone: DisplayZone) {
    let mut table = Table::new(["ID", "SUBJECT", "TIMESTAMP", "KIND", "WHERE"]);

    for e in entries.iter().filter(|e| period.contains(zone.date_of(&e.timestamp))) {
        table.add_row(vec![
            e.id.to_string(),
            e.subject_id.clone(),
            zone.format(&e.timestamp, "%Y-%m-%d %H:%M:%S"),
            entry_time(e.kind.label(), e.kind),
            e.location.describe(),
        ]);
    }

    if table.is_empty() {
        warning(format!("No entries for {}.", period.label()));
    } else {
        print!("{}", table.render());
    }
}

fn print_report(report: &SubjectReport, zone: DisplayZone) {
    header(format!("{} · {}", report.subject_id, report.period.label()));

    if report.is_empty() {
        warning(format!(
            "No sessions for {} in {}.",
            report.subject_id,
            report.period.label()
        ));
        return;
    }

    for day in &report.days {
        print_day(day, zone);
    }

    println!(
        "\nTotal worked: {} over {} day(s) | Surplus: {}",
        format_duration(Some(report.total_worked)),
        report.days.len(),
        surplus(report.total_surplus)
    );
    if report.open_sessions > 0 {
        println!("Open sessions: {}", report.open_sessions);
    }
    println!();
}

fn print_day(day: &DaySummary, zone: DisplayZone) {
    println!(
        "\n{} ({})",
        day.group.date_key(),
        day.group.date.format("%a")
    );

    let mut table = Table::new(["IN", "OUT", "DURATION", "WHERE"]);
    // oldest first inside a day reads naturally
    for s in day.group.sessions.iter().rev() {
        table.add_row(session_row(s, zone));
    }
    print!("{}", table.render());

    println!(
        "Worked: {} | Expected: {} | Surplus: {}",
        format_duration(Some(day.worked)),
        format_duration(Some(day.expected)),
        surplus(day.surplus)
    );
}

fn session_row(s: &Session, zone: DisplayZone) -> Vec<String> {
    let check_in = zone.format(&s.check_in.timestamp, "%H:%M");
    let check_out = match &s.check_out {
        Some(out) if s.spans_midnight => {
            format!("{} ({})", zone.format(&out.timestamp, "%H:%M"), zone.format(&out.timestamp, "%m-%d"))
        }
        Some(out) => zone.format(&out.timestamp, "%H:%M"),
        None => "--:--".to_string(),
    };

    let duration = match s.duration_minutes {
        Some(_) => format_duration(s.duration_minutes),
        None => muted(&format_duration(None)),
    };

    let place = match &s.check_out {
        Some(out) if !out.location.is_empty() && out.location != s.check_in.location => format!(
            "{} → {}",
            s.check_in.location.describe(),
            out.location.describe()
        ),
        _ => s.check_in.location.describe(),
    };

    vec![
        entry_time(&check_in, EntryKind::CheckIn),
        entry_time(&check_out, EntryKind::CheckOut),
        duration,
        place,
    ]
}
