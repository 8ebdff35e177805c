use crate::calc::{CalendarMonth, DateKey};
use crate::data::{MoodRecord, MoodTable, Persistable};
use anyhow::{Context, Result};

pub fn run(month: Option<&str>) -> Result<()> {
    let table = MoodTable::load()?;
    let filter = month.map(parse_month).transpose()?;
    write_moods(&table, filter, &mut std::io::stdout())
}

/// Parses `YYYY-MM` into a calendar month.
pub(crate) fn parse_month(s: &str) -> Result<CalendarMonth> {
    let key: DateKey = format!("{s}-01")
        .parse()
        .with_context(|| format!("'{s}' is not a YYYY-MM month"))?;
    Ok(CalendarMonth::new(key.year(), key.month()))
}

pub(crate) fn write_moods<W: std::io::Write>(
    table: &MoodTable,
    month: Option<CalendarMonth>,
    out: &mut W,
) -> Result<()> {
    let rows: Vec<(&DateKey, &MoodRecord)> = match month {
        Some(m) => table.in_month(m).collect(),
        None => table.moods.iter().collect(),
    };

    writeln!(out, "Moods")?;
    writeln!(out, "---")?;
    writeln!(out, "  {:<12} {:<10} {:<10} {}", "Date", "Mood", "Intensity", "Color")?;
    for (key, rec) in &rows {
        writeln!(
            out,
            "  {:<12} {:<10} {:<10} {}",
            key.to_string(),
            rec.display_name(),
            format!("{}/5", rec.intensity),
            rec.color
        )?;
    }
    writeln!(out, "---")?;
    writeln!(out, "Total: {} day(s)", rows.len())?;
    Ok(())
}
