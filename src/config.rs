use crate::persistence::PersistenceResult;
use crate::scheduler::DEFAULT_SCHEDULE_TITLE;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Startup settings for a [`ScheduleManager`](crate::ScheduleManager), usually read from JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    pub catalog_path: Option<PathBuf>,
    pub schedule_title: String,
    /// Used by `export` when no destination is given.
    pub export_path: Option<PathBuf>,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            schedule_title: DEFAULT_SCHEDULE_TITLE.to_string(),
            export_path: None,
        }
    }
}

impl SchedulerConfig {
    pub fn with_catalog<P: Into<PathBuf>>(catalog_path: P) -> Self {
        Self {
            catalog_path: Some(catalog_path.into()),
            ..Self::default()
        }
    }

    pub fn load_from_json<P: AsRef<Path>>(path: P) -> PersistenceResult<Self> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(file)?)
    }

    pub fn save_to_json<P: AsRef<Path>>(&self, path: P) -> PersistenceResult<()> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}
