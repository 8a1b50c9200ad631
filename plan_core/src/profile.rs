//! User profile persistence with file locking.
//!
//! This module handles saving and loading the user profile with proper file
//! locking to prevent concurrent access issues. Unlike derived state, a
//! profile is user-entered data: a malformed file is surfaced as an error
//! instead of being silently replaced with defaults.

use crate::{Error, Result, UserProfile};
use fs2::FileExt;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

impl UserProfile {
    /// Load the profile from a file with shared locking
    ///
    /// Returns `Ok(None)` if no profile has been saved yet.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            tracing::info!("No profile file found at {:?}", path);
            return Ok(None);
        }

        let file = File::open(path)?;

        // Acquire shared lock for reading
        file.lock_shared()?;

        let mut contents = String::new();
        let mut reader = std::io::BufReader::new(&file);
        let read_result = reader.read_to_string(&mut contents);
        file.unlock()?;
        read_result?;

        let profile = serde_json::from_str::<UserProfile>(&contents).map_err(|e| {
            Error::Profile(format!(
                "Profile file {:?} is malformed ({}); re-run onboarding or fix it by hand",
                path, e
            ))
        })?;

        tracing::debug!("Loaded profile from {:?}", path);
        Ok(Some(profile))
    }

    /// Save the profile to a file with exclusive locking
    ///
    /// Atomically writes by:
    /// 1. Writing to a temp file
    /// 2. Syncing to disk
    /// 3. Renaming over the original
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        // Create unique temp file in the same directory for atomic rename
        let temp = NamedTempFile::new_in(path.parent().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "profile path missing parent")
        })?)?;

        // Acquire exclusive lock on the temp file to serialize concurrent writers
        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            let contents = serde_json::to_string_pretty(self)?;
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        // Atomically replace old profile file
        temp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved profile to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::*;

    fn sample_profile() -> UserProfile {
        UserProfile {
            age: 42,
            weight_kg: 82.5,
            height_cm: 180.0,
            fitness_level: Difficulty::Intermediate,
            goal: WorkoutFocus::Metabolic,
            diet: DietType::Paleo,
            sleep_quality: 3,
            stress_level: 3,
            available_equipment: vec![Equipment::Dumbbell, Equipment::Machine],
            injuries: vec![Injury {
                name: "ankle sprain".into(),
                category: Some(InjuryCategory::Joint),
                details: Some("left side".into()),
                is_current: true,
                recovery_time: Some("6 weeks".into()),
            }],
            sessions_per_week: 4,
        }
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("profile.json");

        let profile = sample_profile();
        profile.save(&path).unwrap();

        let loaded = UserProfile::load(&path).unwrap().unwrap();
        assert_eq!(loaded, profile);
    }

    #[test]
    fn test_load_nonexistent_returns_none() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("nonexistent.json");

        assert!(UserProfile::load(&path).unwrap().is_none());
    }

    #[test]
    fn test_malformed_profile_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("profile.json");

        std::fs::write(&path, "{ invalid json }").unwrap();

        let result = UserProfile::load(&path);
        assert!(matches!(result, Err(Error::Profile(_))));
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("profile.json");

        // No injuries, no sessions_per_week: serde defaults apply
        let json = r#"{
            "age": 25,
            "weight_kg": 70.0,
            "height_cm": 170.0,
            "fitness_level": "beginner",
            "goal": "strength",
            "diet": "omnivore",
            "sleep_quality": 4,
            "stress_level": 2,
            "available_equipment": ["bodyweight"]
        }"#;
        std::fs::write(&path, json).unwrap();

        let profile = UserProfile::load(&path).unwrap().unwrap();
        assert!(profile.injuries.is_empty());
        assert_eq!(profile.sessions_per_week, 3);
    }

    #[test]
    fn test_atomic_save_leaves_no_temp_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("profile.json");

        sample_profile().save(&path).unwrap();

        assert!(path.exists());
        let extras: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name() != "profile.json")
            .collect();
        assert!(
            extras.is_empty(),
            "Expected only profile.json, found extras: {:?}",
            extras
        );
    }
}
