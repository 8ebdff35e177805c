use crate::data::persistence::Persistable;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TrendPoint {
    pub day: String,
    /// 1 = low, 5 = high.
    pub mood: u8,
    pub color: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DistributionSlice {
    pub mood: String,
    pub percentage: u8,
    pub color: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct KeyStat {
    pub label: String,
    pub value: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct InsightCard {
    pub title: String,
    pub description: String,
    pub color: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Suggestion {
    pub title: String,
    pub body: String,
}

/// Contents of the Insights tab, read from insights.yaml.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct InsightsData {
    pub weekly: Vec<TrendPoint>,
    pub distribution: Vec<DistributionSlice>,
    pub key_stats: Vec<KeyStat>,
    pub insights: Vec<InsightCard>,
    pub suggestions: Vec<Suggestion>,
}

impl Persistable for InsightsData {
    fn filename() -> &'static str {
        "insights.yaml"
    }
    fn is_json() -> bool {
        false
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Period {
    #[default]
    Week,
    Month,
    Year,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Week, Period::Month, Period::Year];

    pub fn label(self) -> &'static str {
        match self {
            Period::Week => "Week",
            Period::Month => "Month",
            Period::Year => "Year",
        }
    }
}

impl InsightsData {
    pub fn max_mood(&self) -> u8 {
        self.weekly.iter().map(|p| p.mood).max().unwrap_or(0)
    }

    /// Bar heights scaled so the best day reaches `max_height`.
    pub fn trend_bar_heights(&self, max_height: u16) -> Vec<u16> {
        let max = self.max_mood();
        if max == 0 {
            return vec![0; self.weekly.len()];
        }
        self.weekly
            .iter()
            .map(|p| (p.mood as u32 * max_height as u32 / max as u32) as u16)
            .collect()
    }
}

impl Default for InsightsData {
    fn default() -> Self {
        fn point(day: &str, mood: u8, color: &str) -> TrendPoint {
            TrendPoint { day: day.into(), mood, color: color.into() }
        }
        fn slice(mood: &str, percentage: u8, color: &str) -> DistributionSlice {
            DistributionSlice { mood: mood.into(), percentage, color: color.into() }
        }
        fn stat(label: &str, value: &str) -> KeyStat {
            KeyStat { label: label.into(), value: value.into() }
        }
        fn card(title: &str, description: &str, color: &str) -> InsightCard {
            InsightCard {
                title: title.into(),
                description: description.into(),
                color: color.into(),
            }
        }
        fn suggestion(title: &str, body: &str) -> Suggestion {
            Suggestion { title: title.into(), body: body.into() }
        }

        InsightsData {
            weekly: vec![
                point("Mon", 4, "#FFE066"),
                point("Tue", 3, "#B0E0E6"),
                point("Wed", 5, "#98FB98"),
                point("Thu", 2, "#87CEEB"),
                point("Fri", 4, "#FFE066"),
                point("Sat", 5, "#98FB98"),
                point("Sun", 3, "#B0E0E6"),
            ],
            distribution: vec![
                slice("Happy", 35, "#FFE066"),
                slice("Calm", 25, "#B0E0E6"),
                slice("Excited", 20, "#98FB98"),
                slice("Sad", 10, "#87CEEB"),
                slice("Anxious", 10, "#FFA07A"),
            ],
            key_stats: vec![
                stat("Days Tracked", "28"),
                stat("Avg Mood", "3.6"),
                stat("Journal Entries", "15"),
                stat("Day Streak", "7"),
            ],
            insights: vec![
                card(
                    "Mood Trending Up",
                    "Your mood has improved by 15% this week compared to last week.",
                    "#48BB78",
                ),
                card(
                    "Best Day Pattern",
                    "You tend to feel happiest on weekends. Consider planning more relaxing activities.",
                    "#4299E1",
                ),
                card(
                    "Evening Reflections",
                    "You journal most often in the evening. This helps process your day.",
                    "#9F7AEA",
                ),
                card(
                    "Emotional Growth",
                    "You've been more open about your feelings lately. Keep it up!",
                    "#FF6B9D",
                ),
            ],
            suggestions: vec![
                suggestion(
                    "🌱 Mindful Moment",
                    "Take five deep breaths and notice how your body feels right now.",
                ),
                suggestion(
                    "📝 Gratitude Practice",
                    "Write down three small things that went well today.",
                ),
                suggestion(
                    "🚶 Movement Break",
                    "A short walk outside can lift your mood and clear your head.",
                ),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_mood_of_default_week() {
        assert_eq!(InsightsData::default().max_mood(), 5);
    }

    #[test]
    fn test_trend_bar_heights_scale_to_max() {
        let heights = InsightsData::default().trend_bar_heights(100);
        assert_eq!(heights, vec![80, 60, 100, 40, 80, 100, 60]);
    }

    #[test]
    fn test_trend_bar_heights_empty_week() {
        let data = InsightsData { weekly: vec![], ..InsightsData::default() };
        assert!(data.trend_bar_heights(10).is_empty());
        assert_eq!(data.max_mood(), 0);
    }

    #[test]
    fn test_distribution_sums_to_hundred() {
        let total: u32 = InsightsData::default()
            .distribution
            .iter()
            .map(|s| s.percentage as u32)
            .sum();
        assert_eq!(total, 100);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let data: InsightsData = serde_norway::from_str("key_stats: []").unwrap();
        assert!(data.key_stats.is_empty());
        assert_eq!(data.weekly.len(), 7);
    }
}
