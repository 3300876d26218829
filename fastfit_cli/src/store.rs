//! Last-plan cache with file locking.
//!
//! The planner itself keeps no state; the CLI stores the most recent plan so
//! `show` and `export` can work without regenerating it.

use chrono::{DateTime, Utc};
use fastfit_core::{Error, Result, WeeklyPlan};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use uuid::Uuid;

/// A generated plan plus when it was made
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SavedPlan {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub plan: WeeklyPlan,
}

impl SavedPlan {
    pub fn new(plan: WeeklyPlan) -> Self {
        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            plan,
        }
    }

    /// Load the cached plan with shared locking
    ///
    /// Returns `None` if the file doesn't exist. A corrupt file is logged and
    /// treated as missing.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            tracing::debug!("No saved plan at {:?}", path);
            return Ok(None);
        }

        let file = File::open(path)?;
        file.lock_shared()?;

        let mut contents = String::new();
        let read = std::io::BufReader::new(&file).read_to_string(&mut contents);
        file.unlock()?;
        read?;

        match serde_json::from_str::<SavedPlan>(&contents) {
            Ok(saved) => {
                tracing::debug!("Loaded saved plan {} from {:?}", saved.id, path);
                Ok(Some(saved))
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to parse saved plan {:?}: {}. Ignoring it.",
                    path,
                    e
                );
                Ok(None)
            }
        }
    }

    /// Save atomically: temp file, sync, rename over the original
    pub fn save(&self, path: &Path) -> Result<()> {
        let parent = path
            .parent()
            .ok_or_else(|| Error::Other(format!("plan path {:?} has no parent", path)))?;
        std::fs::create_dir_all(parent)?;

        let temp = NamedTempFile::new_in(parent)?;
        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            let contents = serde_json::to_string(self)?;
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        temp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved plan {} to {:?}", self.id, path);
        Ok(())
    }
}
