//! File-based viewer profile at ~/.locality/profile.json.
//!
//! Holds the viewer's own city and country. A missing or unreadable file
//! loads as an empty profile.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::geo::{canonicalize, UserLocale};

#[derive(Serialize, Deserialize, Clone, Default)]
struct ProfileEntry {
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    country: Option<String>,
    /// Last write, UTC millis.
    #[serde(default)]
    updated_at: i64,
}

/// The stored viewer profile.
pub struct ProfileStore {
    path: PathBuf,
    entry: ProfileEntry,
}

impl ProfileStore {
    /// Load from the default location (~/.locality/profile.json).
    pub fn load() -> Self {
        Self::load_from(Self::default_path())
    }

    /// Load from a specific path.
    pub fn load_from(path: PathBuf) -> Self {
        let entry = Self::read_file(&path).unwrap_or_default();
        Self { path, entry }
    }

    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".locality")
            .join("profile.json")
    }

    fn read_file(path: &Path) -> Option<ProfileEntry> {
        let data = fs::read_to_string(path).ok()?;
        match serde_json::from_str(&data) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Ignoring unreadable profile {}: {}", path.display(), e);
                None
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn locale(&self) -> UserLocale {
        UserLocale::new(self.entry.city.as_deref(), self.entry.country.as_deref())
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        if self.entry.updated_at == 0 {
            return None;
        }
        Utc.timestamp_millis_opt(self.entry.updated_at).single()
    }

    /// Replace the stored locale and persist. The country is stored under
    /// its canonical name.
    pub fn set(&mut self, locale: UserLocale) -> Result<()> {
        self.entry = ProfileEntry {
            city: locale.city,
            country: locale.country.map(|c| canonicalize(&c)),
            updated_at: Utc::now().timestamp_millis(),
        };
        self.persist()
    }

    /// Forget the stored locale and remove the file.
    pub fn clear(&mut self) -> Result<()> {
        self.entry = ProfileEntry::default();
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entry)?;
        fs::write(&self.path, json)?;
        tracing::debug!("Saved profile to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (ProfileStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = ProfileStore::load_from(dir.path().join("nested").join("profile.json"));
        (store, dir)
    }

    #[test]
    fn test_missing_file_is_empty() {
        let (store, _dir) = temp_store();
        assert!(store.locale().is_empty());
        assert!(store.updated_at().is_none());
    }

    #[test]
    fn test_set_persists_and_canonicalizes() {
        let (mut store, _dir) = temp_store();
        store
            .set(UserLocale::new(Some("Abidjan"), Some("ivory coast")))
            .unwrap();

        let reloaded = ProfileStore::load_from(store.path().to_path_buf());
        let locale = reloaded.locale();
        assert_eq!(locale.city(), Some("Abidjan"));
        assert_eq!(locale.country(), Some("Côte d'Ivoire"));
        assert!(reloaded.updated_at().is_some());
    }

    #[test]
    fn test_unknown_country_stored_verbatim() {
        let (mut store, _dir) = temp_store();
        store.set(UserLocale::new(None, Some("Narnia"))).unwrap();
        assert_eq!(store.locale().country(), Some("Narnia"));
        assert_eq!(store.locale().city(), None);
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("profile.json");
        fs::write(&path, "{ not json").unwrap();
        let store = ProfileStore::load_from(path);
        assert!(store.locale().is_empty());
    }

    #[test]
    fn test_clear_removes_file() {
        let (mut store, _dir) = temp_store();
        store.set(UserLocale::new(Some("Dakar"), None)).unwrap();
        assert!(store.path().exists());

        store.clear().unwrap();
        assert!(!store.path().exists());
        assert!(store.locale().is_empty());
        // Clearing twice is fine.
        store.clear().unwrap();
    }
}
