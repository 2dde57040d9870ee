//! History stores
//!
//! Newest entry first; the store keeps at most `limit` entries and drops the
//! oldest beyond that.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::entry::HistoryEntry;
use super::errors::HistoryResult;

/// Default number of retained entries
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Bounded result history
pub trait HistoryStore: Send + Sync {
    /// Prepend an entry, evicting the oldest beyond the limit
    fn record(&self, entry: HistoryEntry) -> HistoryResult<()>;

    /// All entries, newest first
    fn list(&self) -> HistoryResult<Vec<HistoryEntry>>;

    /// Remove every entry
    fn clear(&self) -> HistoryResult<()>;
}

fn prepend(entries: &mut Vec<HistoryEntry>, entry: HistoryEntry, limit: usize) {
    entries.insert(0, entry);
    entries.truncate(limit);
}

/// JSON-array file store.
///
/// The whole file is rewritten on each change through a temporary file and
/// a rename, so readers never see a half-written array.
#[derive(Debug)]
pub struct FileHistoryStore {
    path: PathBuf,
    limit: usize,
    lock: Mutex<()>,
}

impl FileHistoryStore {
    /// Open a store at `path`; the file is created on first write
    pub fn open(path: impl AsRef<Path>, limit: usize) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            limit,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> HistoryResult<Vec<HistoryEntry>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&content)?)
    }

    fn write(&self, entries: &[HistoryEntry]) -> HistoryResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        let json = serde_json::to_vec_pretty(entries)?;
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl HistoryStore for FileHistoryStore {
    fn record(&self, entry: HistoryEntry) -> HistoryResult<()> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut entries = self.read()?;
        prepend(&mut entries, entry, self.limit);
        self.write(&entries)
    }

    fn list(&self) -> HistoryResult<Vec<HistoryEntry>> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut entries = self.read()?;
        entries.truncate(self.limit);
        Ok(entries)
    }

    fn clear(&self) -> HistoryResult<()> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory store
#[derive(Debug)]
pub struct MemoryHistoryStore {
    entries: Mutex<Vec<HistoryEntry>>,
    limit: usize,
}

impl Default for MemoryHistoryStore {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_LIMIT)
    }
}

impl MemoryHistoryStore {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            limit,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn record(&self, entry: HistoryEntry) -> HistoryResult<()> {
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        prepend(&mut entries, entry, self.limit);
        Ok(())
    }

    fn list(&self) -> HistoryResult<Vec<HistoryEntry>> {
        Ok(self.entries.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn clear(&self) -> HistoryResult<()> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner()).clear();
        Ok(())
    }
}
