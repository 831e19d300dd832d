//! Single-file JSON store.
//!
//! Reads parse the whole file on every call. Writes go through one async
//! mutex, land in a temp file next to the target and are renamed over it,
//! so a reader sees either the old or the new document and concurrent
//! writers never overwrite each other's changes.

use crate::{DbError, Document, Result as DbErrorResult};

use std::io::Write;
use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use tempfile::NamedTempFile;
use tokio::sync::Mutex;

pub struct JsonStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonStore {
    /// Open the document at `path`, seeding it (and its parent dirs) if missing
    pub async fn open(path: impl Into<PathBuf>) -> DbErrorResult<Self> {
        let store = Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        };

        if let Some(parent) = store.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| DbError::Io {
                    path: parent.display().to_string(),
                    source,
                    location: ErrorLocation::from(Location::caller()),
                })?;
        }

        let exists = tokio::fs::try_exists(&store.path)
            .await
            .map_err(|source| store.io_error(source))?;

        if !exists {
            let _guard = store.write_lock.lock().await;
            store.write(&Document::seeded()).await?;
            log::info!("Created document store at {}", store.path.display());
        }

        let document = store.read().await?;
        log::debug!(
            "Opened document store at {} ({} users)",
            store.path.display(),
            document.users().len()
        );

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the current document
    pub async fn read(&self) -> DbErrorResult<Document> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| self.io_error(source))?;

        serde_json::from_slice(&bytes).map_err(|e| DbError::Corrupt {
            path: self.path.display().to_string(),
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Read-modify-write under the writer lock.
    ///
    /// When `mutate` returns an error nothing is written.
    pub async fn update<T, F>(&self, mutate: F) -> DbErrorResult<T>
    where
        F: FnOnce(&mut Document) -> DbErrorResult<T>,
    {
        let _guard = self.write_lock.lock().await;

        let mut document = self.read().await?;
        let output = mutate(&mut document)?;
        self.write(&document).await?;

        Ok(output)
    }

    /// Caller must hold `write_lock`
    async fn write(&self, document: &Document) -> DbErrorResult<()> {
        let mut bytes = serde_json::to_vec_pretty(document)?;
        bytes.push(b'\n');

        let path = self.path.clone();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };

        tokio::task::spawn_blocking(move || persist_atomically(&dir, &path, &bytes))
            .await
            .map_err(|e| DbError::Task {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?
    }

    #[track_caller]
    fn io_error(&self, source: std::io::Error) -> DbError {
        DbError::Io {
            path: self.path.display().to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

fn persist_atomically(dir: &Path, path: &Path, bytes: &[u8]) -> DbErrorResult<()> {
    let io_error = |source: std::io::Error| DbError::Io {
        path: path.display().to_string(),
        source,
        location: ErrorLocation::from(Location::caller()),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(io_error)?;
    temp.write_all(bytes).map_err(io_error)?;
    temp.as_file().sync_all().map_err(io_error)?;
    temp.persist(path).map_err(|e| io_error(e.error))?;

    Ok(())
}
