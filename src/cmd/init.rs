use crate::data::{AppSettings, BadgeData, InsightsData, MoodTable, Persistable};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

pub fn run() -> Result<()> {
    let dir = crate::data::persistence::get_data_dir()?;
    fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;
    run_in_dir(&dir)?;
    println!("Data files initialized in {}", dir.display());
    Ok(())
}

/// Writes all default data files into `dir`.
pub(crate) fn run_in_dir(dir: &Path) -> Result<()> {
    info!(dir = %dir.display(), "writing default data files");
    AppSettings::default().save_to(dir)?;
    MoodTable::sample().save_to(dir)?;
    InsightsData::default().save_to(dir)?;
    BadgeData::default().save_to(dir)?;
    Ok(())
}
