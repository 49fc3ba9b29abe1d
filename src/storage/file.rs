use std::collections::BTreeMap;
use std::fs;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{KeyValueStore, StorageError};

/// A store persisted as a single JSON object on disk.
///
/// Every `set` rewrites the whole file; the file is read on every `get` so
/// that separate instances pointing at the same path agree.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store at `store.json` in the XDG data directory
    /// (`~/.local/share/coreum-ft/`), creating the directory if needed.
    pub fn new() -> Result<Self, StorageError> {
        let data_dir = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
        Self::with_path(data_dir.join("coreum-ft").join("store.json"))
    }

    /// Creates a store at the given file path, creating parent directories.
    pub fn with_path(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let parent = path
            .parent()
            .ok_or_else(|| StorageError::InvalidPath(path.clone()))?;
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.iter().all(u8::is_ascii_whitespace) => Ok(BTreeMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.load()?.remove(key))
    }

    /// Writes `key`, keeping the other keys of a readable file. An existing
    /// file that cannot be read or parsed is replaced.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.load().unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "replacing unreadable store");
            BTreeMap::new()
        });
        entries.insert(key.to_string(), value.to_string());

        let mut writer = BufWriter::new(fs::File::create(&self.path)?);
        serde_json::to_writer_pretty(&mut writer, &entries)?;
        writeln!(writer)?;
        writer.flush()?;

        debug!(path = %self.path.display(), key, "store updated");
        Ok(())
    }
}
