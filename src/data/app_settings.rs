use crate::data::persistence::Persistable;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Profile details and switches shown on the Profile tab.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    pub display_name: String,
    pub email: String,
    pub notifications: bool,
    pub night_mode: bool,
    pub real_talk_reminders: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        AppSettings {
            display_name: "Sarah Johnson".to_string(),
            email: "sarah.j@email.com".to_string(),
            notifications: true,
            night_mode: false,
            real_talk_reminders: true,
        }
    }
}

/// Reads the `settings` key from config.yaml; other keys are ignored.
#[derive(Serialize, Deserialize, Default, Debug)]
struct SettingsWrapper {
    #[serde(default)]
    settings: AppSettings,
}

impl Persistable for SettingsWrapper {
    fn filename() -> &'static str {
        "config.yaml"
    }
    fn is_json() -> bool {
        false
    }
}

impl AppSettings {
    pub fn load() -> Result<Self> {
        Ok(SettingsWrapper::load()?.settings)
    }

    pub fn load_from(dir: &Path) -> Result<Self> {
        Ok(SettingsWrapper::load_from(dir)?.settings)
    }

    pub fn save_to(&self, dir: &Path) -> Result<()> {
        SettingsWrapper {
            settings: self.clone(),
        }
        .save_to(dir)
    }
}
