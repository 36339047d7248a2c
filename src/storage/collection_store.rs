//! Collection storage
//!
//! Persists each named collection as a JSON-serialized array in its own
//! `<key>.json` file under the data directory, mirroring the fixed
//! local-storage keys of the web client. Writes replace the whole array;
//! there are no transactions across keys and no schema versioning.

use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Fixed collection keys
pub mod keys {
    pub const ASSIGNMENTS: &str = "assignments";
    pub const RESOURCES: &str = "resources";
    pub const NOTES: &str = "notes";
    pub const STUDY_SESSIONS: &str = "studySessions";
    pub const COURSES: &str = "courses";

    /// All collection keys, in load order
    pub const ALL: [&str; 5] = [ASSIGNMENTS, RESOURCES, NOTES, STUDY_SESSIONS, COURSES];
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

/// Key-value storage for the study collections
pub struct CollectionStore {
    data_dir: PathBuf,
}

impl CollectionStore {
    /// Create storage rooted at `data_dir`, creating the directory if needed
    pub fn new(data_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("studybuddy"))
            .ok_or(StorageError::DataDirNotFound)
    }

    pub fn data_dir(&self) -> &PathBuf {
        &self.data_dir
    }

    fn collection_file(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }

    /// Load a collection; a missing file is an empty collection
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let path = self.collection_file(key);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path)?;
        let items: Vec<T> = serde_json::from_str(&content)?;
        Ok(items)
    }

    /// Save a collection, replacing any previous contents under the key
    pub fn save<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let json = serde_json::to_string_pretty(items)?;
        fs::write(self.collection_file(key), json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Course, StudySession};
    use chrono::Utc;

    fn open_temp() -> (tempfile::TempDir, CollectionStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = CollectionStore::new(dir.path().to_path_buf()).unwrap();
        (dir, store)
    }

    #[test]
    fn test_missing_collection_is_empty() {
        let (_dir, store) = open_temp();
        let courses: Vec<Course> = store.load(keys::COURSES).unwrap();
        assert!(courses.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let (_dir, store) = open_temp();
        let sessions = vec![
            StudySession::new("Physics".to_string(), 25, Utc::now()),
            StudySession::new("History".to_string(), 25, Utc::now()),
        ];

        store.save(keys::STUDY_SESSIONS, &sessions).unwrap();
        let loaded: Vec<StudySession> = store.load(keys::STUDY_SESSIONS).unwrap();
        assert_eq!(loaded, sessions);
    }

    #[test]
    fn test_save_replaces_previous_contents() {
        let (_dir, store) = open_temp();
        let first = vec![Course::new("Math".to_string(), Utc::now())];
        let second = vec![Course::new("Biology".to_string(), Utc::now())];

        store.save(keys::COURSES, &first).unwrap();
        store.save(keys::COURSES, &second).unwrap();

        let loaded: Vec<Course> = store.load(keys::COURSES).unwrap();
        assert_eq!(loaded, second);
    }

    #[test]
    fn test_file_holds_plain_json_array() {
        let (dir, store) = open_temp();
        let courses = vec![Course::new("Math".to_string(), Utc::now())];
        store.save(keys::COURSES, &courses).unwrap();

        let raw = std::fs::read_to_string(dir.path().join("courses.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value[0]["name"], "Math");
    }
}
