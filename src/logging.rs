use anyhow::{Context, Result, anyhow};
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding the log filter, e.g. `MOODCAL_LOG=debug`.
pub const LOG_ENV: &str = "MOODCAL_LOG";
const LOG_FILE: &str = "moodcal.log";

pub fn log_path(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_FILE)
}

/// Sends `tracing` output to `<data_dir>/moodcal.log`. The terminal belongs to
/// the TUI, so nothing is written to stdout or stderr.
pub fn init(data_dir: &Path) -> Result<()> {
    let path = log_path(data_dir);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    fmt()
        .with_env_filter(filter_from_env())
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!(e))
}

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_path_inside_data_dir() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(log_path(tmp.path()), tmp.path().join("moodcal.log"));
    }

    #[test]
    fn test_init_creates_log_file() {
        let tmp = TempDir::new().unwrap();
        // A subscriber may already be installed by another test; the file is
        // opened before that matters.
        let _ = init(tmp.path());
        assert!(log_path(tmp.path()).exists());
    }
}
