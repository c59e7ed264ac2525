//! Contribution toggle store.
//!
//! # Responsibility
//! - Hold the set of highlighted days as a `YYYY-MM-DD -> true` map.
//! - Persist it as one JSON object per file.
//!
//! # Invariants
//! - Keys are canonical date keys; the only stored value is `true`.
//! - `toggle` is pure; persistence is a separate, explicit `save`.
//! - Reads report failures as `Err`. Collapsing them to an empty map is the
//!   caller's policy, not the repository's.
//! - Saves replace the whole file (temp file + rename). No locking: the last
//!   writer wins.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure reading or writing the backing file.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read `{path}`: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse `{path}`: {source}")]
    Parse { path: PathBuf, source: serde_json::Error },

    #[error("failed to encode contributions: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write `{path}`: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Highlighted days keyed by `YYYY-MM-DD`.
///
/// Deserializing drops entries whose value is not `true`, so a map read from
/// disk never writes them back.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, bool>", into = "BTreeMap<String, bool>")]
pub struct Contributions(BTreeMap<String, bool>);

impl Contributions {
    pub fn new() -> Self { Self::default() }

    /// Whether the day is highlighted.
    pub fn is_marked(&self, key: &str) -> bool { self.0.get(key).copied().unwrap_or(false) }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Marked keys in ascending date order.
    pub fn keys(&self) -> impl Iterator<Item = &str> { self.0.keys().map(String::as_str) }
}

impl From<BTreeMap<String, bool>> for Contributions {
    fn from(mut map: BTreeMap<String, bool>) -> Self {
        map.retain(|_, marked| *marked);
        Self(map)
    }
}

impl From<Contributions> for BTreeMap<String, bool> {
    fn from(contributions: Contributions) -> Self { contributions.0 }
}

impl<K: Into<String>> FromIterator<K> for Contributions {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        Self(iter.into_iter().map(|key| (key.into(), true)).collect())
    }
}

/// Flip one day: a marked key is removed, anything else becomes `true`.
pub fn toggle(mut contributions: Contributions, key: &str) -> Contributions {
    if contributions.0.remove(key) != Some(true) {
        contributions.0.insert(key.to_owned(), true);
    }
    contributions
}

/// Persistence boundary for [`Contributions`].
pub trait ContributionRepository {
    /// Load the stored map. A store that was never written is empty, not an error.
    fn load(&self) -> StoreResult<Contributions>;

    /// Replace the stored map.
    fn save(&self, contributions: &Contributions) -> StoreResult<()>;
}

/// JSON file repository.
#[derive(Clone, Debug)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

    /// Repository for `file_name` inside `dir`.
    pub fn in_dir(dir: &Path, file_name: &str) -> Self { Self::new(dir.join(file_name)) }

    pub fn path(&self) -> &Path { &self.path }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ContributionRepository for JsonFileRepository {
    fn load(&self) -> StoreResult<Contributions> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Contributions::new()),
            Err(source) => return Err(StoreError::Read { path: self.path.clone(), source }),
        };

        if data.trim().is_empty() {
            return Ok(Contributions::new());
        }

        serde_json::from_str(&data).map_err(|source| StoreError::Parse { path: self.path.clone(), source })
    }

    fn save(&self, contributions: &Contributions) -> StoreResult<()> {
        let json = serde_json::to_string(contributions)?;
        let write_err = |source| StoreError::Write { path: self.path.clone(), source };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let temp = self.temp_path();
        fs::write(&temp, json).map_err(write_err)?;
        if let Err(source) = fs::rename(&temp, &self.path) {
            fs::remove_file(&temp).ok();
            return Err(write_err(source));
        }
        log::debug!("saved {} contribution(s) to {}", contributions.len(), self.path.display());
        Ok(())
    }
}
