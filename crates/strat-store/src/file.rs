//! File-backed record store
//!
//! Each record lives in its own file at `<root>/<scope>/<name>.<ext>`.
//! The serialization format is detected from the configured extension:
//! - `json` -> JSON
//! - `toml` -> TOML
//! - `yaml`, `yml` -> YAML

use crate::{ConfigRecord, Error, RecordId, RecordStore, Result, io};
use async_trait::async_trait;
use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// File-backed [`RecordStore`].
///
/// Creation of a missing record is double-checked behind an advisory lock
/// file, so concurrent get-or-create callers converge on a single stored
/// record. Writes go through atomic temp-then-rename.
#[derive(Debug)]
pub struct FileStore {
    root: PathBuf,
    extension: String,
}

impl FileStore {
    /// Create a store rooted at `root`, persisting records as JSON.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_extension(root, "json")
    }

    /// Create a store persisting records with the given file extension.
    ///
    /// The extension selects the serialization format; unsupported
    /// extensions surface as errors on first access, not here.
    pub fn with_extension(root: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            extension: extension.into(),
        }
    }

    /// Platform-appropriate default store root:
    /// - Linux: `~/.local/share/strategy-manager/`
    /// - macOS: `~/Library/Application Support/strategy-manager/`
    /// - Windows: `%APPDATA%\strategy-manager\`
    pub fn default_root() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("strategy-manager"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the record file for `id`.
    pub fn record_path(&self, id: &RecordId) -> PathBuf {
        self.root
            .join(&id.scope)
            .join(format!("{}.{}", id.name, self.extension))
    }

    fn lock_path(&self, id: &RecordId) -> PathBuf {
        self.root
            .join(&id.scope)
            .join(format!(".{}.lock", id.name))
    }

    /// Fetch a record snapshot without creating anything.
    pub fn load(&self, id: &RecordId) -> Result<Option<ConfigRecord>> {
        let path = self.record_path(id);
        if !path.is_file() {
            return Ok(None);
        }
        self.read_record(&path).map(Some)
    }

    /// Insert or replace a record.
    pub fn save(&self, record: &ConfigRecord) -> Result<()> {
        let path = self.record_path(&record.id());
        let content = self.encode(&path, record)?;
        io::write_atomic(&path, content.as_bytes())
    }

    fn read_record(&self, path: &Path) -> Result<ConfigRecord> {
        let content = io::read_text(path)?;
        self.decode(path, &content)
    }

    fn decode(&self, path: &Path, content: &str) -> Result<ConfigRecord> {
        match self.extension.to_lowercase().as_str() {
            "json" => serde_json::from_str(content).map_err(|e| Error::Parse {
                path: path.to_path_buf(),
                format: "JSON".into(),
                message: e.to_string(),
            }),
            "toml" => toml::from_str(content).map_err(|e| Error::Parse {
                path: path.to_path_buf(),
                format: "TOML".into(),
                message: e.to_string(),
            }),
            "yaml" | "yml" => serde_yaml::from_str(content).map_err(|e| Error::Parse {
                path: path.to_path_buf(),
                format: "YAML".into(),
                message: e.to_string(),
            }),
            _ => Err(Error::UnsupportedFormat {
                extension: self.extension.clone(),
            }),
        }
    }

    fn encode(&self, path: &Path, record: &ConfigRecord) -> Result<String> {
        match self.extension.to_lowercase().as_str() {
            "json" => serde_json::to_string_pretty(record).map_err(|e| Error::Serialize {
                path: path.to_path_buf(),
                format: "JSON".into(),
                message: e.to_string(),
            }),
            "toml" => toml::to_string_pretty(record).map_err(|e| Error::Serialize {
                path: path.to_path_buf(),
                format: "TOML".into(),
                message: e.to_string(),
            }),
            "yaml" | "yml" => serde_yaml::to_string(record).map_err(|e| Error::Serialize {
                path: path.to_path_buf(),
                format: "YAML".into(),
                message: e.to_string(),
            }),
            _ => Err(Error::UnsupportedFormat {
                extension: self.extension.clone(),
            }),
        }
    }
}

#[async_trait]
impl RecordStore for FileStore {
    async fn get_or_default(&self, id: &RecordId, default: ConfigRecord) -> Result<ConfigRecord> {
        let path = self.record_path(id);
        if path.is_file() {
            return self.read_record(&path);
        }

        // Missing: create behind an advisory lock, re-checking after
        // acquisition so a concurrent creator wins the race cleanly.
        let lock_path = self.lock_path(id);
        if let Some(parent) = lock_path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .map_err(|e| Error::io(&lock_path, e))?;
        lock_file.lock_exclusive().map_err(|_| Error::LockFailed {
            path: lock_path.clone(),
        })?;

        let result = if path.is_file() {
            self.read_record(&path)
        } else {
            tracing::debug!(record = %id, ?path, "record missing, storing default");
            let content = self.encode(&path, &default)?;
            io::write_atomic(&path, content.as_bytes())?;
            Ok(default)
        };

        lock_file.unlock().map_err(|_| Error::LockFailed {
            path: lock_path.clone(),
        })?;
        result
    }
}
