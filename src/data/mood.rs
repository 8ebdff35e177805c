//! Fixed mood vocabulary used by the picker and the calendar legend.

/// A mood card on the Today tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoodOption {
    pub label: &'static str,
    pub color: &'static str,
    /// Glyph drawn above the label.
    pub icon: &'static str,
}

pub const PICKER_MOODS: [MoodOption; 8] = [
    MoodOption { label: "Happy", color: "#FF6B9D", icon: "☀" },
    MoodOption { label: "Excited", color: "#FF8A95", icon: "✨" },
    MoodOption { label: "Playful", color: "#FFB3BA", icon: "✿" },
    MoodOption { label: "Sad", color: "#D63384", icon: "☂" },
    MoodOption { label: "Angry", color: "#DC143C", icon: "☁" },
    MoodOption { label: "Surprised", color: "#FF69B4", icon: "✦" },
    MoodOption { label: "Tired", color: "#B85450", icon: "☾" },
    MoodOption { label: "Silly", color: "#FF1493", icon: "☺" },
];

/// Calendar heatmap colors.
pub const LEGEND: [MoodOption; 6] = [
    MoodOption { label: "Happy", color: "#FFE066", icon: "☀" },
    MoodOption { label: "Sad", color: "#87CEEB", icon: "☂" },
    MoodOption { label: "Anxious", color: "#FFA07A", icon: "☁" },
    MoodOption { label: "Calm", color: "#B0E0E6", icon: "≈" },
    MoodOption { label: "Excited", color: "#98FB98", icon: "✨" },
    MoodOption { label: "Tired", color: "#DDA0DD", icon: "☾" },
];

pub const MIN_INTENSITY: u8 = 1;
pub const DEFAULT_INTENSITY: u8 = 3;

/// Heatmap color for a mood label, falling back to the picker color and then
/// to a neutral grey.
pub fn calendar_color_for(label: &str) -> &'static str {
    LEGEND
        .iter()
        .chain(PICKER_MOODS.iter())
        .find(|m| m.label.eq_ignore_ascii_case(label))
        .map(|m| m.color)
        .unwrap_or("#A0AEC0")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_color_prefers_legend() {
        assert_eq!(calendar_color_for("happy"), "#FFE066");
        assert_eq!(calendar_color_for("Excited"), "#98FB98");
    }

    #[test]
    fn test_calendar_color_falls_back_to_picker() {
        assert_eq!(calendar_color_for("silly"), "#FF1493");
    }

    #[test]
    fn test_picker_icons_are_distinct() {
        for (i, a) in PICKER_MOODS.iter().enumerate() {
            assert!(!a.icon.is_empty());
            for b in &PICKER_MOODS[i + 1..] {
                assert_ne!(a.icon, b.icon, "{} and {} share an icon", a.label, b.label);
            }
        }
    }

    #[test]
    fn test_calendar_color_unknown_is_grey() {
        assert_eq!(calendar_color_for("meh"), "#A0AEC0");
    }
}
