use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use autolot_core::vehicle::Vehicle;
use tokio::sync::Mutex;

/// Errors from the read-modify-write path. Plain reads never fail; see
/// [`VehicleStore::load`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The write-enable flag is off.
    #[error("Inventory file writes are disabled")]
    WritesDisabled,

    #[error("Failed to access inventory file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The existing file is not a vehicle array. It is left untouched.
    #[error("Inventory file {path} is not a valid vehicle array: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    #[error("Failed to serialize inventory: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Outcome of a read-modify-write closure passed to [`VehicleStore::update`].
#[derive(Debug)]
pub enum Change<T> {
    /// The collection was modified and must be written back.
    Modified(T),
    /// Nothing changed; the file is left alone.
    Unchanged(T),
}

/// JSON-array-on-disk vehicle store.
///
/// Mutations made through [`VehicleStore::update`] are serialised by an
/// in-process lock so concurrent requests cannot lose each other's writes.
/// Other processes writing the same file are not coordinated with.
#[derive(Debug)]
pub struct VehicleStore {
    path: PathBuf,
    writes_enabled: bool,
    write_lock: Mutex<()>,
}

impl VehicleStore {
    pub fn new(path: impl Into<PathBuf>, writes_enabled: bool) -> Self {
        Self {
            path: path.into(),
            writes_enabled,
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the write-enable flag is set.
    pub fn is_writable(&self) -> bool {
        self.writes_enabled
    }

    /// Read the whole inventory.
    ///
    /// A missing or unparsable file yields an empty inventory; the cause is
    /// logged, not returned.
    pub async fn load(&self) -> Vec<Vehicle> {
        match self.read().await {
            Ok(vehicles) => vehicles,
            Err(e) => {
                tracing::warn!(error = %e, "Inventory file unreadable, treating as empty");
                Vec::new()
            }
        }
    }

    /// Strict read: only a missing file counts as empty.
    async fn read(&self) -> Result<Vec<Vehicle>, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Inventory file not found, treating as empty");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    /// Overwrite the inventory with `vehicles`.
    ///
    /// Refuses without touching disk when writes are disabled. The file is
    /// written to a sibling temporary path and renamed into place.
    pub async fn save(&self, vehicles: &[Vehicle]) -> Result<(), StoreError> {
        if !self.writes_enabled {
            return Err(StoreError::WritesDisabled);
        }

        let body = serde_json::to_string_pretty(vehicles)?;
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }

        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, body).await.map_err(io_err)?;
        if let Err(e) = tokio::fs::rename(&tmp, &self.path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(io_err(e));
        }

        tracing::debug!(path = %self.path.display(), count = vehicles.len(), "Inventory file written");
        Ok(())
    }

    /// Read-modify-write under the store's write lock.
    ///
    /// Refused up front when writes are disabled, so `mutate` never runs.
    /// An existing file that cannot be read or parsed is never overwritten.
    pub async fn update<T, F>(&self, mutate: F) -> Result<T, StoreError>
    where
        F: FnOnce(&mut Vec<Vehicle>) -> Change<T>,
    {
        if !self.writes_enabled {
            return Err(StoreError::WritesDisabled);
        }

        let _guard = self.write_lock.lock().await;
        let mut vehicles = self.read().await?;

        match mutate(&mut vehicles) {
            Change::Modified(out) => {
                self.save(&vehicles).await?;
                Ok(out)
            }
            Change::Unchanged(out) => Ok(out),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "inventory".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
