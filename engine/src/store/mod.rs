//! Persisted view state.
//!
//! The surrounding app remembers which city and date the user was
//! looking at, plus the last fetched schedule rows, across sessions.
//! That concern is kept behind an explicit `load`/`save` interface so
//! the resolution engine itself only ever sees an in-memory
//! [`DaySchedule`](crate::core::domain::DaySchedule) snapshot.
//!
//! Two backends ship here: [`MemoryStore`] for tests and ephemeral use,
//! and [`JsonFileStore`] for simple on-disk persistence.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::core::domain::ScheduleRow;

/// The view selection worth remembering between sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewState {
    pub city: String,
    pub date: NaiveDate,
    /// Rows of the last fetched snapshot for that city/date, if any.
    #[serde(default)]
    pub rows: Vec<ScheduleRow>,
}

/// Errors from a view-state backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// A persisted view-state backend.
///
/// `load` returns `Ok(None)` when nothing has been saved yet; absence is
/// not an error.
#[async_trait]
pub trait ViewStateStore: Send + Sync {
    async fn load(&self) -> Result<Option<ViewState>, StoreError>;
    async fn save(&self, state: &ViewState) -> Result<(), StoreError>;
}

/// In-memory backend.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<Option<ViewState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ViewStateStore for MemoryStore {
    async fn load(&self) -> Result<Option<ViewState>, StoreError> {
        Ok(self.state.read().await.clone())
    }

    async fn save(&self, state: &ViewState) -> Result<(), StoreError> {
        *self.state.write().await = Some(state.clone());
        Ok(())
    }
}

/// JSON-file backend. A missing file loads as `None`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ViewStateStore for JsonFileStore {
    async fn load(&self) -> Result<Option<ViewState>, StoreError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, state: &ViewState) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(state)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::CombinedRow;

    fn sample_state() -> ViewState {
        ViewState {
            city: "Ujjain".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            rows: vec![ScheduleRow::Combined(CombinedRow {
                label: "Abhijit Muhurat".to_string(),
                window: "11:45 AM to 12:30 PM".to_string(),
            })],
        }
    }

    #[tokio::test]
    async fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.load().await.unwrap(), None);

        let state = sample_state();
        store.save(&state).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(state));
    }

    #[tokio::test]
    async fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("view_state.json"));
        assert_eq!(store.load().await.unwrap(), None);

        let state = sample_state();
        store.save(&state).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(state));
    }

    #[tokio::test]
    async fn test_file_store_save_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("view_state.json"));

        let mut state = sample_state();
        store.save(&state).await.unwrap();
        state.city = "Varanasi".to_string();
        store.save(&state).await.unwrap();

        assert_eq!(store.load().await.unwrap().unwrap().city, "Varanasi");
    }

    #[tokio::test]
    async fn test_file_store_corrupt_contents_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("view_state.json");
        tokio::fs::write(&path, "not json").await.unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(
            store.load().await,
            Err(StoreError::Serialization(_))
        ));
    }
}
