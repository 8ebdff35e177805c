use crate::data::persistence::Persistable;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Badge {
    pub id: u32,
    pub name: String,
    pub emoji: String,
    pub description: String,
    #[serde(default)]
    pub earned: bool,
}

impl Badge {
    pub fn new(id: u32, name: &str, emoji: &str, description: &str, earned: bool) -> Self {
        Badge {
            id,
            name: name.to_string(),
            emoji: emoji.to_string(),
            description: description.to_string(),
            earned,
        }
    }

    /// Emoji when earned, a lock otherwise.
    pub fn icon(&self) -> &str {
        if self.earned { self.emoji.as_str() } else { "🔒" }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BadgeData {
    pub badges: Vec<Badge>,
}

impl Persistable for BadgeData {
    fn filename() -> &'static str {
        "badges.json"
    }
    fn is_json() -> bool {
        true
    }
}

impl BadgeData {
    pub fn earned(&self) -> impl Iterator<Item = &Badge> {
        self.badges.iter().filter(|b| b.earned)
    }

    pub fn earned_count(&self) -> usize {
        self.earned().count()
    }

    pub fn total(&self) -> usize {
        self.badges.len()
    }
}

impl Default for BadgeData {
    fn default() -> Self {
        BadgeData {
            badges: vec![
                Badge::new(1, "Vulnerability Champ", "💪", "Shared 10 honest entries", true),
                Badge::new(2, "Daily Feeler", "📅", "7-day tracking streak", true),
                Badge::new(3, "Reflection Master", "🧘", "Completed 30 journal entries", false),
                Badge::new(4, "Courage Warrior", "⚡", "Used RealTalk mode 5 times", true),
                Badge::new(5, "Mindful Soul", "🌸", "Practiced gratitude 20 times", false),
                Badge::new(6, "Growth Seeker", "🌱", "Tracked moods for 30 days", false),
            ],
        }
    }
}
