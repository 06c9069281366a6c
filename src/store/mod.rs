//! JSON file store.
//!
//! Every entity lives in its own JSON file and is read fresh on each access.
//! Writes go to a sibling temp file which is synced and renamed over the target,
//! and each path has an async lock so read-modify-write cycles on one file are serialized.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use serde::{de::DeserializeOwned, Serialize};
use tokio::io::AsyncWriteExt;

use crate::errors::AppError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// File-backed JSON store with per-path locking.
#[derive(Default)]
pub struct JsonStore {
    locks: Mutex<HashMap<PathBuf, Arc<tokio::sync::Mutex<()>>>>,
}

impl JsonStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_for(&self, path: &Path) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
        locks.entry(path.to_path_buf()).or_default().clone()
    }

    /// Read and deserialize a file. Returns `None` if it does not exist.
    pub async fn read<T: DeserializeOwned>(&self, path: &Path) -> Result<Option<T>, AppError> {
        let bytes = match tokio::fs::read(path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                tracing::error!("Failed to read {}: {:?}", path.display(), e);
                return Err(AppError::Internal("Internal server error".to_string()));
            }
        };

        let value = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::error!("Failed to parse {}: {:?}", path.display(), e);
            AppError::Internal("Internal server error".to_string())
        })?;
        Ok(Some(value))
    }

    /// Read a file as an untyped JSON value.
    pub async fn read_value(&self, path: &Path) -> Result<Option<serde_json::Value>, AppError> {
        self.read(path).await
    }

    /// Replace a file's content wholesale.
    pub async fn write<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), AppError> {
        let lock = self.lock_for(path);
        let _guard = lock.lock().await;
        write_atomic(path, value).await
    }

    /// Read-modify-write a file under its lock.
    ///
    /// `apply` receives the current content (`None` if the file is absent) and returns the
    /// content to store. An error from `apply` aborts without touching the file.
    pub async fn update<T, F>(&self, path: &Path, apply: F) -> Result<T, AppError>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(Option<T>) -> Result<T, AppError>,
    {
        let lock = self.lock_for(path);
        let _guard = lock.lock().await;

        let current = self.read(path).await?;
        let next = apply(current)?;
        write_atomic(path, &next).await?;
        Ok(next)
    }
}

async fn write_atomic<T: Serialize>(path: &Path, value: &T) -> Result<(), AppError> {
    let mut body = serde_json::to_vec_pretty(value)?;
    body.push(b'\n');

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    tokio::fs::create_dir_all(&parent).await?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "data".to_string());
    let temp_path = parent.join(format!(
        ".{}.{}.{}.tmp",
        file_name,
        std::process::id(),
        TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
    ));

    let result = async {
        let mut file = tokio::fs::File::create(&temp_path).await?;
        file.write_all(&body).await?;
        file.sync_all().await?;
        drop(file);
        tokio::fs::rename(&temp_path, path).await
    }
    .await;

    if let Err(e) = result {
        tracing::error!("Failed to write {}: {:?}", path.display(), e);
        tokio::fs::remove_file(&temp_path).await.ok();
        return Err(AppError::Internal("Internal server error".to_string()));
    }

    tracing::debug!("Wrote {}", path.display());
    Ok(())
}
