//! Recent-files bookkeeping over an injected settings store.
//!
//! The viewer never talks to a process-wide settings singleton; it is
//! handed a `SettingsStore` and keeps the most-recently-opened paths
//! under a single key, newest first, capped at five.

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const RECENT_KEY: &str = "recent";

/// Default number of remembered paths.
pub const MAX_RECENT: usize = 5;

/// Application-scoped key-value store for ordered string lists.
pub trait SettingsStore {
    /// Stored list for `key`; a missing key reads as an empty list.
    fn get(&self, key: &str) -> Vec<String>;
    fn set(&mut self, key: &str, values: &[String]) -> Result<()>;
    fn remove(&mut self, key: &str) -> Result<()>;
}

// ── MemoryStore ──

/// In-memory SettingsStore for tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: HashMap<String, Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Vec<String> {
        self.inner.get(key).cloned().unwrap_or_default()
    }

    fn set(&mut self, key: &str, values: &[String]) -> Result<()> {
        self.inner.insert(key.to_string(), values.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.inner.remove(key);
        Ok(())
    }
}

// ── JsonFileStore ──

/// SettingsStore persisted as one JSON object at
/// `<base>/<organization>/<application>.json`.
///
/// The base directory is injected by the caller (the CLI passes the
/// user's config directory; tests pass a temp dir). A missing or
/// unreadable file reads as empty; writes create the directory.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(base: impl AsRef<Path>, organization: &str, application: &str) -> Self {
        let path = base
            .as_ref()
            .join(organization)
            .join(format!("{application}.json"));
        JsonFileStore { path }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> HashMap<String, Vec<String>> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return HashMap::new();
        };
        match serde_json::from_str(&raw) {
            Ok(map) => map,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "unreadable settings file, starting empty");
                HashMap::new()
            }
        }
    }

    fn write(&self, map: &HashMap<String, Vec<String>>) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("creating settings dir {}", dir.display()))?;
        }
        let raw = serde_json::to_string_pretty(map)?;
        fs::write(&self.path, raw)
            .with_context(|| format!("writing settings file {}", self.path.display()))
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> Vec<String> {
        self.read().get(key).cloned().unwrap_or_default()
    }

    fn set(&mut self, key: &str, values: &[String]) -> Result<()> {
        let mut map = self.read();
        map.insert(key.to_string(), values.to_vec());
        self.write(&map)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut map = self.read();
        map.remove(key);
        self.write(&map)
    }
}

// ── RecentFiles ──

/// Ordered list of most-recently-opened policy files, newest first.
pub struct RecentFiles<S: SettingsStore> {
    store: S,
    capacity: usize,
}

impl<S: SettingsStore> RecentFiles<S> {
    pub fn new(store: S) -> Self {
        Self::with_capacity(store, MAX_RECENT)
    }

    pub fn with_capacity(store: S, capacity: usize) -> Self {
        RecentFiles { store, capacity }
    }

    /// Current list, newest first.
    pub fn list(&self) -> Vec<String> {
        self.store.get(RECENT_KEY)
    }

    /// Record `path` as just opened: canonicalize, de-duplicate by moving
    /// it to the front, and truncate to capacity.
    pub fn touch(&mut self, path: &Path) -> Result<()> {
        let resolved = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        let entry = resolved.to_string_lossy().into_owned();

        let mut recents = self.store.get(RECENT_KEY);
        recents.retain(|p| p != &entry);
        recents.insert(0, entry);
        recents.truncate(self.capacity);
        self.store.set(RECENT_KEY, &recents)
    }

    pub fn clear(&mut self) -> Result<()> {
        self.store.remove(RECENT_KEY)
    }
}
