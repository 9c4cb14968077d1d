//! Keyed persistence for submitted courses
//!
//! One JSON file per course under the store root, named by course id. The
//! background pipeline rewrites the same file as the run progresses, so a
//! record on disk always reflects the latest known state.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::model::CourseRecord;

pub struct CourseStore {
    root: PathBuf,
}

impl CourseStore {
    /// Open a store rooted at `root`, creating the directory if needed
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        tokio::fs::create_dir_all(&root)
            .await
            .with_context(|| format!("Failed to create course store at {}", root.display()))?;
        Ok(Self { root })
    }

    fn record_path(&self, id: Uuid) -> PathBuf {
        self.root.join(format!("{id}.json"))
    }

    /// Persist a record, replacing any previous version
    pub async fn save(&self, record: &CourseRecord) -> Result<()> {
        let json =
            serde_json::to_string_pretty(record).context("Failed to serialize course record")?;
        let path = self.record_path(record.id);
        tokio::fs::write(&path, json)
            .await
            .with_context(|| format!("Failed to write course record to {}", path.display()))?;
        debug!("Saved course {} to {:?}", record.id, path);
        Ok(())
    }

    /// Load one record by id
    pub async fn load(&self, id: Uuid) -> Result<CourseRecord> {
        let path = self.record_path(id);
        let content = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("No stored course with id {}", id))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse course record at {}", path.display()))
    }

    /// All stored records, oldest submission first.
    ///
    /// Files that cannot be read or parsed are skipped with a warning so one
    /// corrupt record does not hide the rest.
    pub async fn list(&self) -> Result<Vec<CourseRecord>> {
        let mut records = Vec::new();

        let mut entries = tokio::fs::read_dir(&self.root)
            .await
            .with_context(|| format!("Failed to read course store at {}", self.root.display()))?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }
            let content = match tokio::fs::read_to_string(&path).await {
                Ok(content) => content,
                Err(e) => {
                    warn!("Skipping unreadable record {:?}: {}", path, e);
                    continue;
                }
            };
            match serde_json::from_str::<CourseRecord>(&content) {
                Ok(record) => records.push(record),
                Err(e) => warn!("Skipping malformed record {:?}: {}", path, e),
            }
        }

        records.sort_by_key(|r| r.submitted_at);
        Ok(records)
    }
}
