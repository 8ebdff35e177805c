pub mod app_settings;
pub mod badge;
pub mod insights;
pub mod journal;
pub mod mood;
pub mod mood_record;
pub mod persistence;

pub use app_settings::AppSettings;
pub use badge::BadgeData;
pub use insights::{InsightsData, Period};
pub use journal::{JournalDraft, JournalEntry, Visibility};
pub use mood_record::{MoodRecord, MoodTable};
pub use persistence::Persistable;
