use crate::calc::{is_today, month_summary, CalendarMonth, DayCell};
use crate::calc::month_grid::{DAYS_PER_WEEK, WEEKDAY_HEADERS};
use crate::data::{MoodTable, Persistable};
use anyhow::Result;
use chrono::{Local, NaiveDate};

/// `month` is 1-based as typed on the command line.
pub fn run(year: i32, month: u32) -> Result<()> {
    let table = MoodTable::load()?;
    let today = Local::now().date_naive();
    let view = CalendarMonth::new(year, month - 1);
    write_grid(view, &table, today, &mut std::io::stdout())
}

/// Prints a month as a seven-column grid. Days with a mood are marked `*`,
/// today is marked `<`.
pub(crate) fn write_grid<W: std::io::Write>(
    view: CalendarMonth,
    table: &MoodTable,
    today: NaiveDate,
    out: &mut W,
) -> Result<()> {
    let width = DAYS_PER_WEEK * 4;
    writeln!(out, "{:^width$}", view.title())?;
    let header: Vec<String> = WEEKDAY_HEADERS.iter().map(|h| format!("{h:>3} ")).collect();
    writeln!(out, "{}", header.concat().trim_end())?;

    for week in view.grid().chunks(DAYS_PER_WEEK) {
        let mut line = String::new();
        for cell in week {
            match cell {
                DayCell::Empty => line.push_str("    "),
                DayCell::Day(day) => {
                    let marker = if is_today(view.year, view.month, *day, &today) {
                        '<'
                    } else if table.get(&view.date_key(*day)).is_some() {
                        '*'
                    } else {
                        ' '
                    };
                    line.push_str(&format!("{day:>3}{marker}"));
                }
            }
        }
        writeln!(out, "{}", line.trim_end())?;
    }

    let summary = month_summary(table, view);
    writeln!(out, "---")?;
    writeln!(out, "{:<16} {}", "Days Tracked:", summary.days_tracked)?;
    if let Some(mood) = &summary.most_common {
        writeln!(out, "{:<16} {}", "Most Common:", crate::data::mood_record::capitalize(mood))?;
    }
    if let Some(avg) = summary.average_intensity {
        writeln!(out, "{:<16} {:.1}", "Avg Intensity:", avg)?;
    }
    Ok(())
}
