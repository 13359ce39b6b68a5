//! File-backed session storage for the CLI.
//!
//! The file is a flat JSON object of string entries, the same two entries the
//! browser keeps in `localStorage`. Writes go to a sibling temp file that is
//! renamed into place, so a crash mid-write never leaves a truncated file.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::BTreeMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracker::{Storage, StorageError};

#[derive(Debug, Clone)]
pub struct FileStorage {
    path: Option<PathBuf>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: Some(path.into()) }
    }

    /// Storage with no backing file; every operation reports `Unavailable`.
    pub fn unavailable() -> Self {
        Self { path: None }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    fn file(&self) -> Result<&Path, StorageError> {
        self.path.as_deref().ok_or(StorageError::Unavailable)
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let path = self.file()?;
        match fs::read_to_string(path) {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| StorageError::Backend(format!("{}: {e}", path.display()))),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(backend(path, &e)),
        }
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let path = self.file()?;
        if map.is_empty() {
            return match fs::remove_file(path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(backend(path, &e)),
            };
        }
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| backend(dir, &e))?;
        }
        let raw = serde_json::to_string_pretty(map).map_err(|e| StorageError::Backend(e.to_string()))?;
        let tmp = path.with_extension("json.tmp");
        write_private(&tmp, raw.as_bytes()).map_err(|e| backend(&tmp, &e))?;
        fs::rename(&tmp, path).map_err(|e| backend(path, &e))
    }

    /// Load the map for a write. A corrupt file is replaced rather than
    /// blocking every future login.
    fn read_map_for_write(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match self.read_map() {
            Err(StorageError::Backend(reason)) => {
                tracing::warn!(%reason, "session file unreadable, starting a new one");
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut map = self.read_map_for_write()?;
        map.insert(key.to_owned(), value.to_owned());
        self.write_map(&map)
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        let mut map = self.read_map_for_write()?;
        if map.remove(key).is_none() && self.path.as_deref().is_some_and(|p| !p.exists()) {
            return Ok(());
        }
        self.write_map(&map)
    }
}

fn backend(path: &Path, e: &std::io::Error) -> StorageError {
    StorageError::Backend(format!("{}: {e}", path.display()))
}

/// Write `contents` to a fresh file readable only by the owner. The file
/// holds a bearer token, so it is created with its final mode rather than
/// chmod-ed after the bytes land.
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    // A leftover temp file would keep whatever mode it was created with.
    if let Err(e) = fs::remove_file(path) {
        if e.kind() != ErrorKind::NotFound {
            return Err(e);
        }
    }
    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(contents)?;
    file.sync_all()
}
