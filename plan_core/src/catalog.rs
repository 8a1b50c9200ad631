//! Default catalog of exercises.
//!
//! This module provides the built-in exercise definitions for the system.
//! Callers may supply their own catalog; nothing in the engine requires
//! this one.

use crate::types::*;
use once_cell::sync::Lazy;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog_internal);

/// Get a reference to the cached default catalog
///
/// This function returns a reference to the pre-built catalog, avoiding
/// the overhead of rebuilding it on every plan generation.
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Builds the default catalog with built-in exercises
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns
/// a cached reference. This function is retained for testing and custom
/// catalog creation.
pub fn build_default_catalog() -> Catalog {
    build_default_catalog_internal()
}

fn exercise(
    id: &str,
    name: &str,
    description: &str,
    muscle_target: MuscleGroup,
    difficulty: Difficulty,
    equipment: Vec<Equipment>,
    is_compound: bool,
    substitute_id: Option<&str>,
    video_id: Option<&str>,
) -> Exercise {
    Exercise {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        muscle_target,
        difficulty,
        equipment,
        is_compound,
        substitute_id: substitute_id.map(Into::into),
        video_id: video_id.map(Into::into),
    }
}

/// Internal function that actually builds the catalog
fn build_default_catalog_internal() -> Catalog {
    let exercises = vec![
        exercise(
            "1",
            "Barbell Squat",
            "Feet shoulder-width apart. Drop the hips below parallel.",
            MuscleGroup::Legs,
            Difficulty::Advanced,
            vec![Equipment::Barbell],
            true,
            Some("7"),
            Some("SW_C1A-rejs"),
        ),
        exercise(
            "2",
            "Leg Press",
            "Drive the platform through the heels without locking the knees.",
            MuscleGroup::Legs,
            Difficulty::Intermediate,
            vec![Equipment::Machine],
            true,
            None,
            Some("IZxyjW7MPJQ"),
        ),
        exercise(
            "3",
            "Bench Press",
            "Lower the bar to mid-chest with elbows at 45 degrees.",
            MuscleGroup::Chest,
            Difficulty::Intermediate,
            vec![Equipment::Barbell],
            true,
            None,
            Some("rT7DgCr-3pg"),
        ),
        exercise(
            "4",
            "Barbell Row",
            "Slight knee bend, torso hinged to 45 degrees, pull to the waist.",
            MuscleGroup::Back,
            Difficulty::Intermediate,
            vec![Equipment::Barbell],
            true,
            None,
            Some("9efgcAjQW70"),
        ),
        exercise(
            "5",
            "Overhead Press",
            "Standing, press the bar overhead to full lockout.",
            MuscleGroup::Shoulders,
            Difficulty::Intermediate,
            vec![Equipment::Barbell],
            true,
            None,
            Some("2yjwHeE_uC0"),
        ),
        exercise(
            "6",
            "Plank",
            "Body in a straight line, glutes and abs braced.",
            MuscleGroup::Core,
            Difficulty::Beginner,
            vec![Equipment::Bodyweight],
            false,
            None,
            Some("ASdvN_XEl_c"),
        ),
        exercise(
            "7",
            "Glute Bridge",
            "Lift the hips with a hard glute squeeze at the top.",
            MuscleGroup::Legs,
            Difficulty::Beginner,
            vec![Equipment::Bodyweight],
            false,
            None,
            Some("wPM8icPu6H8"),
        ),
        exercise(
            "8",
            "Biceps Curl",
            "Curl the dumbbells to the shoulders without swinging.",
            MuscleGroup::Arms,
            Difficulty::Beginner,
            vec![Equipment::Dumbbell],
            false,
            None,
            Some("ykJmrZ5v0Oo"),
        ),
        exercise(
            "9",
            "Lunge",
            "Lower the back knee until it almost touches the floor.",
            MuscleGroup::Legs,
            Difficulty::Intermediate,
            vec![Equipment::Dumbbell],
            true,
            None,
            Some("D7KaRcUTQeE"),
        ),
    ];

    Catalog { exercises }
}

impl Catalog {
    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for ex in &self.exercises {
            if ex.id.is_empty() {
                errors.push("Exercise has empty ID".to_string());
            }
            if ex.name.is_empty() {
                errors.push(format!("Exercise '{}' has empty name", ex.id));
            }
            if ex.equipment.is_empty() {
                errors.push(format!("Exercise '{}' has no required equipment", ex.id));
            }
            if let Some(ref sub) = ex.substitute_id {
                if !self.exercises.iter().any(|other| &other.id == sub) {
                    errors.push(format!(
                        "Exercise '{}' references non-existent substitute '{}'",
                        ex.id, sub
                    ));
                }
            }
        }

        // Duplicate IDs break substitute resolution and ideal lookup
        for (i, ex) in self.exercises.iter().enumerate() {
            if self.exercises[..i].iter().any(|other| other.id == ex.id) {
                errors.push(format!("Duplicate exercise ID '{}'", ex.id));
            }
        }

        // Every region of the base session template needs at least one entry
        for region in [
            MuscleGroup::Legs,
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Core,
        ] {
            if !self.exercises.iter().any(|ex| ex.muscle_target == region) {
                errors.push(format!("Catalog has no exercise targeting {}", region));
            }
        }

        errors
    }

    /// All exercises targeting a region, in catalog order
    pub fn for_region(&self, region: MuscleGroup) -> impl Iterator<Item = &Exercise> {
        self.exercises
            .iter()
            .filter(move |ex| ex.muscle_target == region)
    }
}
