//! Flat-file persistence for the task list.
//!
//! The whole list is read and rewritten on every mutation. That keeps the
//! format simple and human-inspectable at the cost of O(n) work per
//! operation. There is no cross-process lock: two invocations racing on the
//! same file are last-write-wins.

use crate::task::TaskList;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Error reading tasks: {0}")]
    Read(#[source] io::Error),
    #[error("Error reading tasks: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("Error writing tasks: {0}")]
    Write(#[source] io::Error),
}

/// Handle on the persisted store. The file path is supplied at construction
/// rather than resolved from ambient state.
#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the full task list. A missing file is an empty store, not an
    /// error; it appears on the first save.
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<TaskList, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("store file absent, starting empty");
                return Ok(TaskList::new());
            }
            Err(err) => return Err(StoreError::Read(err)),
        };
        serde_json::from_str(&contents).map_err(StoreError::Parse)
    }

    /// Serializes the full list and replaces the store file. The JSON is
    /// written pretty-printed to a sibling temp file first and renamed into
    /// place, so an interrupted invocation never leaves a half-written store.
    #[tracing::instrument(skip_all, fields(path = %self.path.display(), count = tasks.len()))]
    pub fn save(&self, tasks: &TaskList) -> Result<(), StoreError> {
        let json =
            serde_json::to_string_pretty(tasks).map_err(|err| StoreError::Write(err.into()))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json).map_err(StoreError::Write)?;
        fs::rename(&tmp, &self.path).map_err(StoreError::Write)?;
        tracing::debug!("store saved");
        Ok(())
    }
}
