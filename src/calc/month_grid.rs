use crate::calc::date_key::DateKey;
use chrono::Datelike;

/// Number of columns in a month view (Sunday first).
pub const DAYS_PER_WEEK: usize = 7;

/// Offsets used by Sakamoto's day-of-week method, indexed by 0-based month.
const WEEKDAY_OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

/// One position in a rendered month grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DayCell {
    /// Padding before the first day of the month.
    Empty,
    /// A day number in `1..=days_in_month`.
    Day(u32),
}

impl DayCell {
    pub fn day(self) -> Option<u32> {
        match self {
            DayCell::Empty => None,
            DayCell::Day(n) => Some(n),
        }
    }
}

/// Proleptic Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Days in `month` (0 = January) of `year`.
///
/// `month` must be in `0..=11`; anything else is a caller bug.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    debug_assert!(month < 12, "month {month} out of range");
    match month {
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        3 | 5 | 8 | 10 => 30,
        _ => 31,
    }
}

/// Weekday of the first day of `month` (0 = January), where 0 = Sunday.
///
/// Pure integer arithmetic, so it holds for every `i32` year rather than
/// only the range chrono can represent.
pub fn starting_weekday(year: i32, month: u32) -> u32 {
    debug_assert!(month < 12, "month {month} out of range");
    let mut y = year as i64;
    if month < 2 {
        y -= 1;
    }
    let sum = y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400)
        + WEEKDAY_OFFSETS[month as usize]
        + 1;
    sum.rem_euclid(7) as u32
}

/// Leading blanks followed by `Day(1)..=Day(days_in_month)`, row-major for a
/// seven-column grid.
pub fn build_month_grid(year: i32, month: u32) -> Vec<DayCell> {
    let blanks = starting_weekday(year, month) as usize;
    let days = days_in_month(year, month);
    let mut cells = Vec::with_capacity(blanks + days as usize);
    cells.extend(std::iter::repeat_n(DayCell::Empty, blanks));
    cells.extend((1..=days).map(DayCell::Day));
    cells
}

/// Canonical lookup key for a day; `month` is 0-based.
pub fn format_date_key(year: i32, month: u32, day: u32) -> DateKey {
    DateKey::new(year, month, day)
}

/// True when (year, month, day) is the calendar date of `now`.
pub fn is_today(year: i32, month: u32, day: u32, now: &impl Datelike) -> bool {
    now.year() == year && now.month0() == month && now.day() == day
}

/// The month currently shown by a calendar view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarMonth {
    pub year: i32,
    /// 0 = January.
    pub month: u32,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!(month < 12, "month {month} out of range");
        CalendarMonth { year, month }
    }

    pub fn containing(date: &impl Datelike) -> Self {
        CalendarMonth::new(date.year(), date.month0())
    }

    /// Month `delta` months away; rolls the year over as needed.
    pub fn navigate(self, delta: i32) -> Self {
        let total = self.year as i64 * 12 + self.month as i64 + delta as i64;
        CalendarMonth {
            year: total.div_euclid(12) as i32,
            month: total.rem_euclid(12) as u32,
        }
    }

    pub fn days(self) -> u32 {
        days_in_month(self.year, self.month)
    }

    pub fn grid(self) -> Vec<DayCell> {
        build_month_grid(self.year, self.month)
    }

    pub fn date_key(self, day: u32) -> DateKey {
        format_date_key(self.year, self.month, day)
    }

    pub fn title(self) -> String {
        format!("{} {}", month_name(self.month), self.year)
    }
}

/// Full English month name for a 0-based month.
pub fn month_name(month: u32) -> &'static str {
    match month {
        0 => "January",
        1 => "February",
        2 => "March",
        3 => "April",
        4 => "May",
        5 => "June",
        6 => "July",
        7 => "August",
        8 => "September",
        9 => "October",
        10 => "November",
        11 => "December",
        _ => "Unknown",
    }
}

pub const WEEKDAY_HEADERS: [&str; DAYS_PER_WEEK] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_days_in_month_february_leap_rules() {
        assert_eq!(days_in_month(2024, 1), 29);
        assert_eq!(days_in_month(2023, 1), 28);
        assert_eq!(days_in_month(2000, 1), 29);
        assert_eq!(days_in_month(1900, 1), 28);
    }

    #[test]
    fn test_days_in_month_thirty_and_thirty_one() {
        assert_eq!(days_in_month(2025, 0), 31);
        assert_eq!(days_in_month(2025, 3), 30);
        assert_eq!(days_in_month(2025, 8), 30);
        assert_eq!(days_in_month(2025, 11), 31);
    }

    #[test]
    fn test_days_in_month_agrees_with_chrono() {
        for year in 1890..2110 {
            for month in 0..12 {
                let first = d(year, month + 1, 1);
                let next = if month == 11 { d(year + 1, 1, 1) } else { d(year, month + 2, 1) };
                let expected = next.signed_duration_since(first).num_days() as u32;
                assert_eq!(days_in_month(year, month), expected, "{year}-{month}");
            }
        }
    }

    #[test]
    fn test_starting_weekday_agrees_with_chrono() {
        for year in 1600..2400 {
            for month in 0..12 {
                let expected = d(year, month + 1, 1).weekday().num_days_from_sunday();
                assert_eq!(starting_weekday(year, month), expected, "{year}-{month}");
            }
        }
    }

    #[test]
    fn test_starting_weekday_known_months() {
        assert_eq!(starting_weekday(2024, 0), 1); // Monday
        assert_eq!(starting_weekday(2024, 8), 0); // September 2024 starts Sunday
        assert_eq!(starting_weekday(2023, 6), 6); // July 2023 starts Saturday
    }

    #[test]
    fn test_starting_weekday_handles_negative_years() {
        for year in [-4000, -1, 0] {
            for month in 0..12 {
                let expected = d(year, month + 1, 1).weekday().num_days_from_sunday();
                assert_eq!(starting_weekday(year, month), expected, "{year}-{month}");
            }
        }
    }

    #[test]
    fn test_starting_weekday_extreme_years_in_range() {
        for year in [i32::MIN, i32::MAX] {
            for month in 0..12 {
                assert!(starting_weekday(year, month) < 7);
            }
        }
    }

    #[test]
    fn test_grid_length_invariant() {
        for year in 1999..2031 {
            for month in 0..12 {
                let grid = build_month_grid(year, month);
                let expected = starting_weekday(year, month) + days_in_month(year, month);
                assert_eq!(grid.len(), expected as usize, "{year}-{month}");
            }
        }
    }

    #[test]
    fn test_grid_january_2024() {
        let grid = build_month_grid(2024, 0);
        assert_eq!(grid.len(), 32);
        assert_eq!(grid[0], DayCell::Empty);
        let days: Vec<u32> = grid[1..].iter().map(|c| c.day().unwrap()).collect();
        assert_eq!(days, (1..=31).collect::<Vec<_>>());
    }

    #[test]
    fn test_grid_starting_sunday_has_no_blanks() {
        let grid = build_month_grid(2024, 8);
        assert_eq!(grid[0], DayCell::Day(1));
        assert_eq!(grid.len(), 30);
    }

    #[test]
    fn test_grid_is_deterministic() {
        assert_eq!(build_month_grid(2025, 5), build_month_grid(2025, 5));
    }

    #[test]
    fn test_format_date_key_pads_month_and_day() {
        assert_eq!(format_date_key(2024, 0, 5).to_string(), "2024-01-05");
        assert_eq!(format_date_key(2024, 11, 25).to_string(), "2024-12-25");
    }

    #[test]
    fn test_is_today_matches_calendar_date() {
        assert!(is_today(2024, 5, 15, &d(2024, 6, 15)));
        assert!(!is_today(2024, 5, 15, &d(2024, 6, 16)));
        assert!(!is_today(2023, 5, 15, &d(2024, 6, 15)));
    }

    #[test]
    fn test_is_today_ignores_time_of_day() {
        let late = d(2024, 6, 15).and_hms_opt(23, 59, 59).unwrap();
        assert!(is_today(2024, 5, 15, &late));
    }

    #[test]
    fn test_navigate_rolls_over_years() {
        let dec = CalendarMonth::new(2024, 11);
        assert_eq!(dec.navigate(1), CalendarMonth::new(2025, 0));
        let jan = CalendarMonth::new(2024, 0);
        assert_eq!(jan.navigate(-1), CalendarMonth::new(2023, 11));
        assert_eq!(jan.navigate(-13), CalendarMonth::new(2022, 11));
        assert_eq!(jan.navigate(0), jan);
    }

    #[test]
    fn test_navigate_leaves_original_untouched() {
        let m = CalendarMonth::new(2024, 0);
        let grid_before = m.grid();
        let next = m.navigate(1);
        assert_eq!(m.grid(), grid_before);
        assert_ne!(next.grid(), grid_before);
    }

    #[test]
    fn test_calendar_month_title_and_key() {
        let m = CalendarMonth::containing(&d(2024, 2, 29));
        assert_eq!(m.title(), "February 2024");
        assert_eq!(m.days(), 29);
        assert_eq!(m.date_key(29).to_string(), "2024-02-29");
    }

    #[test]
    fn test_month_name_unknown() {
        assert_eq!(month_name(12), "Unknown");
    }
}
