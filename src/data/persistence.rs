use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, info};

/// Set once at startup by main() from the --data-dir argument.
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Call this from main() before any load/save operations.
pub fn set_data_dir(path: PathBuf) {
    let _ = DATA_DIR.set(path);
}

pub fn get_data_dir() -> Result<PathBuf> {
    if let Some(dir) = DATA_DIR.get() {
        return Ok(dir.clone());
    }
    // Fallback when running tests or if set_data_dir was not called
    let cwd = std::env::current_dir().context("failed to get current directory")?;
    Ok(cwd.join("config"))
}

/// A data file living in the data directory, stored as JSON or YAML.
pub trait Persistable: Sized + Default + Serialize + for<'de> Deserialize<'de> {
    fn filename() -> &'static str;
    fn is_json() -> bool;

    fn load() -> Result<Self> {
        Self::load_from(&get_data_dir()?)
    }

    fn save(&self) -> Result<()> {
        self.save_to(&get_data_dir()?)
    }

    /// Load from an explicit directory, bypassing the global `DATA_DIR`.
    /// A missing file yields `Default`.
    fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(Self::filename());
        if !path.exists() {
            debug!(path = %path.display(), "data file missing, using defaults");
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let value = Self::decode(&contents)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        info!(path = %path.display(), "loaded data file");
        Ok(value)
    }

    /// Save to an explicit directory, bypassing the global `DATA_DIR`.
    fn save_to(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create dir {}", dir.display()))?;
        let path = dir.join(Self::filename());
        fs::write(&path, self.encode()?)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "saved data file");
        Ok(())
    }

    fn decode(contents: &str) -> Result<Self> {
        if Self::is_json() {
            serde_json::from_str(contents).context("invalid JSON")
        } else {
            serde_norway::from_str(contents).context("invalid YAML")
        }
    }

    fn encode(&self) -> Result<String> {
        if Self::is_json() {
            serde_json::to_string_pretty(self).context("failed to serialize JSON")
        } else {
            serde_norway::to_string(self).context("failed to serialize YAML")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
    struct JsonFixture {
        value: String,
    }

    impl Persistable for JsonFixture {
        fn filename() -> &'static str {
            "fixture.json"
        }
        fn is_json() -> bool {
            true
        }
    }

    #[derive(Serialize, Deserialize, Default, Debug, PartialEq)]
    struct YamlFixture {
        count: u32,
    }

    impl Persistable for YamlFixture {
        fn filename() -> &'static str {
            "fixture.yaml"
        }
        fn is_json() -> bool {
            false
        }
    }

    #[test]
    fn test_load_from_returns_default_when_file_missing() {
        let tmp = TempDir::new().unwrap();
        let result = JsonFixture::load_from(tmp.path()).unwrap();
        assert_eq!(result, JsonFixture::default());
    }

    #[test]
    fn test_json_save_to_and_load_from() {
        let tmp = TempDir::new().unwrap();
        let data = JsonFixture { value: "calm".to_string() };
        data.save_to(tmp.path()).unwrap();
        let raw = fs::read_to_string(tmp.path().join("fixture.json")).unwrap();
        assert!(raw.contains("\"value\": \"calm\""));
        assert_eq!(JsonFixture::load_from(tmp.path()).unwrap(), data);
    }

    #[test]
    fn test_yaml_save_to_and_load_from() {
        let tmp = TempDir::new().unwrap();
        let data = YamlFixture { count: 5 };
        data.save_to(tmp.path()).unwrap();
        let raw = fs::read_to_string(tmp.path().join("fixture.yaml")).unwrap();
        assert!(raw.contains("count: 5"));
        assert_eq!(YamlFixture::load_from(tmp.path()).unwrap(), data);
    }

    #[test]
    fn test_save_to_creates_directory_if_missing() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("a").join("b");
        let data = JsonFixture { value: "nested".to_string() };
        data.save_to(&nested).unwrap();
        assert_eq!(JsonFixture::load_from(&nested).unwrap(), data);
    }

    #[test]
    fn test_load_from_reports_file_on_parse_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("fixture.yaml"), "count: [not a number").unwrap();
        let err = YamlFixture::load_from(tmp.path()).unwrap_err();
        assert!(format!("{err:#}").contains("fixture.yaml"));
    }
}
