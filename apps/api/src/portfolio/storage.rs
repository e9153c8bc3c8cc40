//! Local persistence of the portfolio as one JSON blob under one storage key.
//!
//! `AppState` holds an `Arc<dyn PortfolioStore>`: a file under the data directory by
//! default, or an in-process blob when `PORTFOLIO_STORAGE=memory`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::errors::AppError;
use crate::portfolio::models::Portfolio;

pub const LOAD_ERROR_MESSAGE: &str = "Error loading saved portfolio data";

#[async_trait]
pub trait PortfolioStore: Send + Sync {
    async fn save(&self, portfolio: &Portfolio) -> Result<(), AppError>;

    /// Returns `Ok(None)` when nothing has been saved yet.
    async fn load(&self) -> Result<Option<Portfolio>, AppError>;
}

/// How much of a saved blob replaces the in-memory model on load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestoreScope {
    /// Identity, social links, theme and skills. Repeatable sections stay as they are.
    Basics,
    #[default]
    Full,
}

pub fn restore(current: &mut Portfolio, saved: Portfolio, scope: RestoreScope) {
    match scope {
        RestoreScope::Full => *current = saved,
        RestoreScope::Basics => {
            current.basics = saved.basics;
            current.social = saved.social;
            current.theme = saved.theme;
            current.skills = saved.skills;
        }
    }
}

fn decode(blob: &str) -> Result<Portfolio, AppError> {
    serde_json::from_str(blob).map_err(|e| {
        error!("Malformed saved portfolio data: {e}");
        AppError::UnprocessableEntity(LOAD_ERROR_MESSAGE.to_string())
    })
}

fn encode(portfolio: &Portfolio) -> Result<String, AppError> {
    serde_json::to_string(portfolio)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize portfolio: {e}")))
}

// ────────────────────────────────────────────────────────────────────────────
// LocalFileStore
// ────────────────────────────────────────────────────────────────────────────

pub struct LocalFileStore {
    path: PathBuf,
}

impl LocalFileStore {
    pub fn new(data_dir: impl AsRef<Path>, storage_key: &str) -> Self {
        Self {
            path: data_dir.as_ref().join(format!("{storage_key}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PortfolioStore for LocalFileStore {
    async fn save(&self, portfolio: &Portfolio) -> Result<(), AppError> {
        let blob = encode(portfolio)?;
        if let Some(dir) = self.path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| AppError::Storage(format!("create {}: {e}", dir.display())))?;
        }

        // Atomic replace: write a sibling temp file, then rename over the blob.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, blob)
            .await
            .map_err(|e| AppError::Storage(format!("write {}: {e}", tmp.display())))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| AppError::Storage(format!("rename to {}: {e}", self.path.display())))?;

        info!("Saved portfolio to {}", self.path.display());
        Ok(())
    }

    async fn load(&self) -> Result<Option<Portfolio>, AppError> {
        let blob = match tokio::fs::read_to_string(&self.path).await {
            Ok(blob) => blob,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(AppError::Storage(format!(
                    "read {}: {e}",
                    self.path.display()
                )))
            }
        };
        decode(&blob).map(Some)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// MemoryStore
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryStore {
    blob: Mutex<Option<String>>,
}

#[cfg(test)]
impl MemoryStore {
    /// Seeds the store with a raw blob, valid or not.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Mutex::new(Some(blob.into())),
        }
    }
}

#[async_trait]
impl PortfolioStore for MemoryStore {
    async fn save(&self, portfolio: &Portfolio) -> Result<(), AppError> {
        *self.blob.lock().await = Some(encode(portfolio)?);
        Ok(())
    }

    async fn load(&self) -> Result<Option<Portfolio>, AppError> {
        match self.blob.lock().await.as_deref() {
            Some(blob) => decode(blob).map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::models::Project;
    use tempfile::TempDir;

    fn sample() -> Portfolio {
        let mut p = Portfolio::default();
        p.basics.name = "Ada Lovelace".to_string();
        p.basics.title = "Analyst".to_string();
        p.basics.bio = "Wrote the first program.".to_string();
        p.skills.add("Rust");
        p.add_project(Project {
            title: "Engine".to_string(),
            description: "Analytical".to_string(),
            ..Default::default()
        });
        p
    }

    #[tokio::test]
    async fn test_file_store_round_trips_basics() {
        let dir = TempDir::new().unwrap();
        let store = LocalFileStore::new(dir.path(), "portfolioData");
        store.save(&sample()).await.unwrap();

        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.basics.name, "Ada Lovelace");
        assert_eq!(loaded.basics.title, "Analyst");
        assert_eq!(loaded.basics.bio, "Wrote the first program.");
        assert!(store.path().ends_with("portfolioData.json"));
    }

    #[tokio::test]
    async fn test_file_store_missing_file_is_none() {
        let dir = TempDir::new().unwrap();
        let store = LocalFileStore::new(dir.path().join("nested"), "portfolioData");
        assert!(store.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_file_store_malformed_blob_is_unprocessable() {
        let dir = TempDir::new().unwrap();
        let store = LocalFileStore::new(dir.path(), "portfolioData");
        tokio::fs::write(store.path(), "{not json").await.unwrap();

        match store.load().await {
            Err(AppError::UnprocessableEntity(msg)) => assert_eq!(msg, LOAD_ERROR_MESSAGE),
            other => panic!("expected UnprocessableEntity, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_memory_store() {
        let store = MemoryStore::default();
        assert!(store.load().await.unwrap().is_none());

        let saved = sample();
        store.save(&saved).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(saved));
    }

    #[tokio::test]
    async fn test_memory_store_malformed_blob() {
        let store = MemoryStore::with_blob("[1, 2");
        assert!(matches!(
            store.load().await,
            Err(AppError::UnprocessableEntity(_))
        ));
    }

    #[tokio::test]
    async fn test_loaded_skills_stay_unique() {
        let store = MemoryStore::with_blob(r#"{"skills":["Go","Go","Rust"]}"#);
        let loaded = store.load().await.unwrap().unwrap();
        assert_eq!(loaded.skills.iter().collect::<Vec<_>>(), vec!["Go", "Rust"]);
    }

    #[test]
    fn test_restore_basics_keeps_repeatable_sections() {
        let mut current = Portfolio::default();
        current.add_project(Project {
            title: "Current".to_string(),
            ..Default::default()
        });
        restore(&mut current, sample(), RestoreScope::Basics);

        assert_eq!(current.basics.name, "Ada Lovelace");
        assert!(current.skills.contains("Rust"));
        assert_eq!(current.projects.len(), 1);
        assert_eq!(current.projects[0].title, "Current");
    }

    #[test]
    fn test_restore_full_replaces_everything() {
        let mut current = Portfolio::default();
        restore(&mut current, sample(), RestoreScope::Full);
        assert_eq!(current.projects[0].title, "Engine");
    }
}
