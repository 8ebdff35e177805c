use crate::calc::CalendarMonth;
use crate::data::MoodTable;
use std::collections::BTreeMap;

/// Figures for the "This Month's Summary" panel.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthSummary {
    pub days_tracked: usize,
    /// Most frequent mood label; ties go to the alphabetically first label.
    pub most_common: Option<String>,
    pub average_intensity: Option<f64>,
}

pub fn month_summary(table: &MoodTable, month: CalendarMonth) -> MonthSummary {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    let mut days_tracked = 0usize;
    let mut intensity_total = 0u32;

    for (_, record) in table.in_month(month) {
        days_tracked += 1;
        intensity_total += record.intensity as u32;
        *counts.entry(record.mood.as_str()).or_default() += 1;
    }

    let mut most_common: Option<(&str, usize)> = None;
    for (mood, count) in counts {
        if most_common.is_none_or(|(_, best)| count > best) {
            most_common = Some((mood, count));
        }
    }

    let average_intensity = if days_tracked > 0 {
        Some(intensity_total as f64 / days_tracked as f64)
    } else {
        None
    };

    MonthSummary {
        days_tracked,
        most_common: most_common.map(|(mood, _)| mood.to_string()),
        average_intensity,
    }
}
