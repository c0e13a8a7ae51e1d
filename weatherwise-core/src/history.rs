use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::anyhow;
use directories::ProjectDirs;
use thiserror::Error;

/// Maximum number of cities the log keeps.
pub const MAX_RECENT: usize = 5;

/// Why a write to the backing file failed. Callers of
/// [`RecentSearches::record`] never see this; it is logged and the log keeps
/// operating in memory.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to encode recent searches")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write recent searches to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Bounded, deduplicated, most-recent-first log of searched cities.
///
/// Recording a city that is already in the log leaves the log untouched (the
/// list keeps insertion order, it is not a move-to-front LRU). The log is a
/// best-effort recency aid: persistence problems degrade it to an in-memory
/// list for the rest of the session instead of surfacing an error.
#[derive(Debug)]
pub struct RecentSearches {
    entries: Vec<String>,
    path: Option<PathBuf>,
}

impl RecentSearches {
    /// Log that lives only for this process. Also the fallback once the
    /// backing file turns out to be unwritable.
    pub fn in_memory() -> Self {
        Self {
            entries: Vec::new(),
            path: None,
        }
    }

    /// Load the log from `path`. A missing, unreadable, or malformed file
    /// yields an empty log; this never errors.
    pub fn load(path: PathBuf) -> Self {
        let entries = read_entries(&path).unwrap_or_default();
        Self {
            entries,
            path: Some(path),
        }
    }

    /// Platform-default location of the backing file.
    pub fn default_path() -> anyhow::Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weatherwise", "weatherwise")
            .ok_or_else(|| anyhow!("Could not determine platform data directory"))?;

        Ok(dirs.data_dir().join("recent_searches.json"))
    }

    /// Record a search. A city already in the log is a no-op; a new one is
    /// prepended and entries beyond capacity are dropped. The updated log is
    /// persisted best-effort.
    pub fn record(&mut self, city: &str) -> &[String] {
        if !self.entries.iter().any(|c| c == city) {
            self.entries.insert(0, city.to_string());
            self.entries.truncate(MAX_RECENT);

            if let Err(err) = self.persist() {
                tracing::warn!(error = %err, "recent searches not persisted; keeping in-memory list");
                self.path = None;
            }
        }

        &self.entries
    }

    /// Current contents, most recent first.
    pub fn all(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the whole list to the backing file. The write goes to a sibling
    /// temp file that is renamed over the target, so a reader never observes
    /// a partially written list.
    fn persist(&self) -> Result<(), PersistError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|source| PersistError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        let json = serde_json::to_vec(&self.entries)?;
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, &json).map_err(|source| PersistError::Write {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, path).map_err(|source| PersistError::Write {
            path: path.clone(),
            source,
        })?;

        Ok(())
    }
}

fn read_entries(path: &Path) -> Option<Vec<String>> {
    let contents = fs::read_to_string(path).ok()?;
    let mut entries: Vec<String> = serde_json::from_str(&contents).ok()?;
    entries.truncate(MAX_RECENT);
    Some(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn length_never_exceeds_capacity() {
        let mut log = RecentSearches::in_memory();
        for city in ["Lisbon", "Oslo", "Cairo", "Lima", "Quito", "Hanoi", "Accra"] {
            log.record(city);
        }

        assert_eq!(log.all().len(), MAX_RECENT);
        assert_eq!(log.all(), ["Accra", "Hanoi", "Quito", "Lima", "Cairo"]);
    }

    #[test]
    fn recording_a_duplicate_is_a_noop() {
        let mut log = RecentSearches::in_memory();
        log.record("London");
        log.record("Paris");
        log.record("London");

        // Not move-to-front: London keeps its original position.
        assert_eq!(log.all(), ["Paris", "London"]);

        let after_twice = log.record("Paris").to_vec();
        assert_eq!(after_twice, ["Paris", "London"]);
    }

    #[test]
    fn persists_most_recent_first_across_loads() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("recent.json");

        let mut log = RecentSearches::load(path.clone());
        log.record("Paris");
        log.record("Tokyo");
        drop(log);

        let reloaded = RecentSearches::load(path);
        assert_eq!(reloaded.all(), ["Tokyo", "Paris"]);
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().expect("tempdir");
        let log = RecentSearches::load(dir.path().join("absent.json"));
        assert!(log.is_empty());
    }

    #[test]
    fn malformed_file_loads_empty() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("recent.json");
        fs::write(&path, "{ not json").expect("write fixture");

        let log = RecentSearches::load(path);
        assert!(log.is_empty());
    }

    #[test]
    fn oversized_file_is_truncated_on_load() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("recent.json");
        let cities: Vec<String> = (0..9).map(|i| format!("City{i}")).collect();
        fs::write(&path, serde_json::to_vec(&cities).expect("encode fixture"))
            .expect("write fixture");

        let log = RecentSearches::load(path);
        assert_eq!(log.all().len(), MAX_RECENT);
        assert_eq!(log.all()[0], "City0");
    }

    #[test]
    fn no_temp_file_left_behind() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("recent.json");

        let mut log = RecentSearches::load(path.clone());
        log.record("Berlin");

        assert!(path.exists());
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn unwritable_path_degrades_to_memory() {
        let dir = tempdir().expect("tempdir");
        // A plain file where the parent directory should be makes every
        // write attempt fail.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"").expect("write blocker");

        let mut log = RecentSearches::load(blocker.join("recent.json"));
        log.record("Sydney");
        log.record("Mumbai");

        assert_eq!(log.all(), ["Mumbai", "Sydney"]);
        assert!(!blocker.is_dir());
    }
}
