//! Character persistence - one JSON file per character
//!
//! Files live under a characters directory and are keyed by the sanitized
//! character name. Failures surface as `Result` values for the caller to
//! report; nothing here panics or aborts the program.

use crate::core::error::{ForgeError, Result};
use crate::sheet::record::{sanitize_name, CharacterRecord};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed character storage
#[derive(Debug, Clone)]
pub struct CharacterStore {
    characters_dir: PathBuf,
}

impl CharacterStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let characters_dir = dir.into();
        fs::create_dir_all(&characters_dir)?;
        Ok(Self { characters_dir })
    }

    pub fn dir(&self) -> &Path {
        &self.characters_dir
    }

    fn path_for(&self, character_name: &str) -> PathBuf {
        self.characters_dir
            .join(format!("{}.json", sanitize_name(character_name)))
    }

    /// Write a record, keyed by its sanitized name. Returns the file path.
    pub fn save(&self, record: &CharacterRecord) -> Result<PathBuf> {
        let path = self.path_for(&record.name);
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&path, json)?;
        tracing::info!(path = %path.display(), "Saved character");
        Ok(path)
    }

    /// Load a record by character name
    pub fn load(&self, character_name: &str) -> Result<CharacterRecord> {
        let path = self.path_for(character_name);
        if !path.exists() {
            return Err(ForgeError::CharacterNotFound(character_name.to_string()));
        }
        self.load_path(&path)
    }

    fn load_path(&self, path: &Path) -> Result<CharacterRecord> {
        let content = fs::read_to_string(path)?;
        let record = serde_json::from_str(&content)?;
        Ok(record)
    }

    /// List saved characters as (display name, file path), skipping files
    /// that cannot be read or parsed.
    pub fn list(&self) -> Vec<(String, PathBuf)> {
        let Ok(entries) = fs::read_dir(&self.characters_dir) else {
            return Vec::new();
        };
        let mut characters = Vec::new();
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            match self.load_path(&path) {
                Ok(record) if !record.name.is_empty() => {
                    characters.push((record.name, path));
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable character file");
                }
            }
        }
        characters.sort();
        characters
    }

    /// Delete a character's file. `Ok(false)` means there was nothing to
    /// delete.
    pub fn delete(&self, character_name: &str) -> Result<bool> {
        let path = self.path_for(character_name);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record(name: &str) -> CharacterRecord {
        CharacterRecord {
            name: name.to_string(),
            class_name: "Fighter".to_string(),
            level: 3,
            might: 2,
            ..Default::default()
        }
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = CharacterStore::open(dir.path()).unwrap();

        let record = sample_record("Brakka");
        store.save(&record).unwrap();

        let loaded = store.load("Brakka").unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_name_sanitized_in_path() {
        let dir = tempfile::tempdir().unwrap();
        let store = CharacterStore::open(dir.path()).unwrap();

        let record = sample_record("Jory of the Vale");
        let path = store.save(&record).unwrap();
        assert!(path.ends_with("Jory_of_the_Vale.json"));

        // Loadable under the unsanitized display name.
        assert!(store.load("Jory of the Vale").is_ok());
    }

    #[test]
    fn test_load_missing_character() {
        let dir = tempfile::tempdir().unwrap();
        let store = CharacterStore::open(dir.path()).unwrap();
        assert!(matches!(
            store.load("Nobody"),
            Err(ForgeError::CharacterNotFound(_))
        ));
    }

    #[test]
    fn test_list_skips_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = CharacterStore::open(dir.path()).unwrap();

        store.save(&sample_record("Alda")).unwrap();
        store.save(&sample_record("Brakka")).unwrap();
        fs::write(dir.path().join("broken.json"), "not json {").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let names: Vec<_> = store.list().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Alda", "Brakka"]);
    }

    #[test]
    fn test_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = CharacterStore::open(dir.path()).unwrap();

        store.save(&sample_record("Alda")).unwrap();
        assert!(store.delete("Alda").unwrap());
        assert!(!store.delete("Alda").unwrap());
        assert!(store.list().is_empty());
    }
}
