use crate::calc::{CalendarMonth, DateKey};
use crate::data::persistence::Persistable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Highest intensity a record can display.
pub const MAX_INTENSITY: u8 = 5;

/// How someone felt on one day.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MoodRecord {
    pub mood: String,
    pub intensity: u8,
    /// `#RRGGBB`
    pub color: String,
}

impl MoodRecord {
    pub fn new(mood: &str, intensity: u8, color: &str) -> Self {
        MoodRecord {
            mood: mood.to_string(),
            intensity,
            color: color.to_string(),
        }
    }

    /// Label with its first letter upper-cased ("happy" -> "Happy").
    pub fn display_name(&self) -> String {
        capitalize(&self.mood)
    }

    /// Intensity as it should be drawn, never more than five dots.
    pub fn dots(&self) -> usize {
        self.intensity.min(MAX_INTENSITY) as usize
    }
}

pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Per-day mood lookup table, keyed by `DateKey`.
///
/// Loaded from moods.yaml. The app never writes it back; moods logged in a
/// session only live in memory.
#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct MoodTable {
    #[serde(default)]
    pub moods: BTreeMap<DateKey, MoodRecord>,
}

impl Persistable for MoodTable {
    fn filename() -> &'static str {
        "moods.yaml"
    }
    fn is_json() -> bool {
        false
    }
}

impl MoodTable {
    pub fn get(&self, key: &DateKey) -> Option<&MoodRecord> {
        self.moods.get(key)
    }

    /// Inserts or replaces the record for `key`.
    pub fn insert(&mut self, key: DateKey, record: MoodRecord) {
        self.moods.insert(key, record);
    }

    pub fn len(&self) -> usize {
        self.moods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moods.is_empty()
    }

    /// Records that fall inside `month`, in date order.
    pub fn in_month(&self, month: CalendarMonth) -> impl Iterator<Item = (&DateKey, &MoodRecord)> {
        let start = month.date_key(1);
        let end = month.date_key(month.days());
        self.moods.range(start..=end)
    }

    /// The January 2024 sample history written by `init`.
    pub fn sample() -> Self {
        let rows = [
            (1, "happy", 4, "#FFE066"),
            (2, "calm", 3, "#B0E0E6"),
            (3, "excited", 5, "#98FB98"),
            (4, "sad", 2, "#87CEEB"),
            (5, "anxious", 3, "#FFA07A"),
            (6, "happy", 4, "#FFE066"),
            (7, "tired", 2, "#DDA0DD"),
            (8, "calm", 4, "#B0E0E6"),
            (9, "happy", 5, "#FFE066"),
            (10, "confused", 2, "#DEB887"),
        ];
        let mut table = MoodTable::default();
        for (day, mood, intensity, color) in rows {
            table.insert(DateKey::new(2024, 0, day), MoodRecord::new(mood, intensity, color));
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("happy"), "Happy");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("é"), "É");
    }

    #[test]
    fn test_dots_capped_at_five() {
        assert_eq!(MoodRecord::new("happy", 9, "#FFE066").dots(), 5);
        assert_eq!(MoodRecord::new("sad", 2, "#87CEEB").dots(), 2);
    }

    #[test]
    fn test_sample_lookup_by_formatted_key() {
        let table = MoodTable::sample();
        let key = crate::calc::format_date_key(2024, 0, 3);
        let rec = table.get(&key).unwrap();
        assert_eq!(rec.mood, "excited");
        assert_eq!(rec.intensity, 5);
        assert!(table.get(&DateKey::new(2024, 0, 11)).is_none());
    }

    #[test]
    fn test_in_month_limits_to_month() {
        let mut table = MoodTable::sample();
        table.insert(DateKey::new(2023, 11, 31), MoodRecord::new("calm", 3, "#B0E0E6"));
        table.insert(DateKey::new(2024, 1, 1), MoodRecord::new("calm", 3, "#B0E0E6"));
        let jan: Vec<_> = table.in_month(CalendarMonth::new(2024, 0)).collect();
        assert_eq!(jan.len(), 10);
        assert_eq!(jan[0].0.to_string(), "2024-01-01");
        assert_eq!(jan[9].0.to_string(), "2024-01-10");
    }

    #[test]
    fn test_insert_replaces_existing_day() {
        let mut table = MoodTable::sample();
        let key = DateKey::new(2024, 0, 1);
        table.insert(key, MoodRecord::new("silly", 1, "#FF1493"));
        assert_eq!(table.len(), 10);
        assert_eq!(table.get(&key).unwrap().mood, "silly");
    }

    #[test]
    fn test_yaml_keys_are_date_strings() {
        let yaml = serde_norway::to_string(&MoodTable::sample()).unwrap();
        assert!(yaml.contains("2024-01-05"));
        let back: MoodTable = serde_norway::from_str(&yaml).unwrap();
        assert_eq!(back.len(), 10);
    }

    #[test]
    fn test_yaml_rejects_bad_date_key() {
        let yaml = "moods:\n  2024-02-30:\n    mood: happy\n    intensity: 3\n    color: '#FFE066'\n";
        assert!(serde_norway::from_str::<MoodTable>(yaml).is_err());
    }
}
