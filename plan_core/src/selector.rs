//! Exercise selection against equipment and safety restrictions.
//!
//! Filters the catalog into a pool of exercises the user can safely perform,
//! then picks one exercise per body region, substituting when the
//! unconstrained "ideal" choice is unavailable.

use crate::types::{Catalog, Equipment, Exercise, MuscleGroup};
use std::collections::HashSet;

/// The per-region outcome of selection
#[derive(Clone, Debug)]
pub struct RegionSelection<'a> {
    pub exercise: &'a Exercise,
    pub is_substitute: bool,
    /// Name of the ideal exercise this selection replaced, for user-facing
    /// disclosure
    pub replaced_exercise_name: Option<&'a str>,
}

/// An exercise is equipment-eligible if it only needs bodyweight or at least
/// one of its required items is available to the user
pub fn equipment_eligible(exercise: &Exercise, available: &[Equipment]) -> bool {
    exercise.equipment.contains(&Equipment::Bodyweight)
        || exercise.equipment.iter().any(|eq| available.contains(eq))
}

/// Build the pool of exercises the user can safely perform
///
/// An entry is pool-eligible if it is equipment-eligible and is not a
/// compound movement targeting a restricted region. Isolation movements in a
/// restricted region stay in the pool (lower risk).
pub fn build_pool<'a>(
    catalog: &'a Catalog,
    available: &[Equipment],
    restricted: &HashSet<MuscleGroup>,
) -> Vec<&'a Exercise> {
    catalog
        .exercises
        .iter()
        .filter(|ex| {
            if restricted.contains(&ex.muscle_target) && ex.is_compound {
                return false;
            }
            equipment_eligible(ex, available)
        })
        .collect()
}

/// The unconstrained best choice for a region: first compound entry in
/// catalog order, falling back to the first entry of any kind
pub fn ideal_for_region(catalog: &Catalog, region: MuscleGroup) -> Option<&Exercise> {
    catalog
        .for_region(region)
        .find(|ex| ex.is_compound)
        .or_else(|| catalog.for_region(region).next())
}

/// Select the exercise for one region of a session
///
/// Returns `None` when the catalog has no entry for the region or no
/// pool-eligible candidate exists; the region is then omitted from the
/// session, which is acceptable and reproducible.
pub fn select_for_region<'a>(
    catalog: &'a Catalog,
    pool: &[&'a Exercise],
    region: MuscleGroup,
) -> Option<RegionSelection<'a>> {
    let ideal = ideal_for_region(catalog, region)?;

    let accessible: Vec<&Exercise> = pool
        .iter()
        .copied()
        .filter(|ex| ex.muscle_target == region)
        .collect();

    let chosen = if accessible.iter().any(|ex| ex.id == ideal.id) {
        ideal
    } else if let Some(compound) = accessible.iter().find(|ex| ex.is_compound) {
        compound
    } else if let Some(isolation) = accessible.iter().find(|ex| !ex.is_compound) {
        isolation
    } else {
        tracing::debug!("No eligible exercise for {}; region skipped", region);
        return None;
    };

    let is_substitute = chosen.id != ideal.id;
    if is_substitute {
        tracing::info!(
            "Substituting '{}' for '{}' ({})",
            chosen.name,
            ideal.name,
            region
        );
    }

    Some(RegionSelection {
        exercise: chosen,
        is_substitute,
        replaced_exercise_name: is_substitute.then_some(ideal.name.as_str()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::build_default_catalog;
    use crate::safety::restricted_regions;
    use crate::types::Injury;

    fn all_equipment() -> Vec<Equipment> {
        vec![
            Equipment::Barbell,
            Equipment::Dumbbell,
            Equipment::Machine,
            Equipment::Cable,
        ]
    }

    fn knee_injury() -> Vec<Injury> {
        vec![Injury {
            name: "knee pain".into(),
            category: None,
            details: None,
            is_current: true,
            recovery_time: None,
        }]
    }

    #[test]
    fn test_bodyweight_always_equipment_eligible() {
        let catalog = build_default_catalog();
        let plank = catalog.exercises.iter().find(|e| e.name == "Plank").unwrap();
        assert!(equipment_eligible(plank, &[]));
    }

    #[test]
    fn test_no_restrictions_picks_ideal() {
        let catalog = build_default_catalog();
        let pool = build_pool(&catalog, &all_equipment(), &HashSet::new());

        let selection = select_for_region(&catalog, &pool, MuscleGroup::Legs).unwrap();
        assert_eq!(selection.exercise.name, "Barbell Squat");
        assert!(!selection.is_substitute);
        assert!(selection.replaced_exercise_name.is_none());
    }

    #[test]
    fn test_knee_injury_excludes_leg_compounds() {
        let catalog = build_default_catalog();
        let restricted = restricted_regions(&knee_injury());
        let pool = build_pool(&catalog, &all_equipment(), &restricted);

        assert!(pool
            .iter()
            .all(|ex| !(ex.muscle_target == MuscleGroup::Legs && ex.is_compound)));
        // Isolation leg work stays available
        assert!(pool.iter().any(|ex| ex.name == "Glute Bridge"));
    }

    #[test]
    fn test_knee_injury_substitutes_with_disclosure() {
        let catalog = build_default_catalog();
        let restricted = restricted_regions(&knee_injury());
        let pool = build_pool(&catalog, &all_equipment(), &restricted);

        let selection = select_for_region(&catalog, &pool, MuscleGroup::Legs).unwrap();
        assert!(selection.is_substitute);
        assert_eq!(selection.exercise.name, "Glute Bridge");
        assert_eq!(selection.replaced_exercise_name, Some("Barbell Squat"));
    }

    #[test]
    fn test_missing_equipment_falls_back_to_eligible_compound() {
        let catalog = build_default_catalog();
        // Machine only: squat (barbell) is out, leg press (machine) is the
        // first eligible compound
        let pool = build_pool(&catalog, &[Equipment::Machine], &HashSet::new());

        let selection = select_for_region(&catalog, &pool, MuscleGroup::Legs).unwrap();
        assert!(selection.is_substitute);
        assert_eq!(selection.exercise.name, "Leg Press");
        assert_eq!(selection.replaced_exercise_name, Some("Barbell Squat"));
    }

    #[test]
    fn test_region_skipped_when_nothing_eligible() {
        let catalog = build_default_catalog();
        // No equipment at all: chest/back/shoulders entries all need a
        // barbell, so those regions drop out entirely
        let pool = build_pool(&catalog, &[], &HashSet::new());

        assert!(select_for_region(&catalog, &pool, MuscleGroup::Chest).is_none());
        assert!(select_for_region(&catalog, &pool, MuscleGroup::Back).is_none());
        // Bodyweight regions survive
        assert!(select_for_region(&catalog, &pool, MuscleGroup::Core).is_some());
    }

    #[test]
    fn test_selection_is_deterministic() {
        let catalog = build_default_catalog();
        let restricted = restricted_regions(&knee_injury());
        let pool = build_pool(&catalog, &all_equipment(), &restricted);

        let first = select_for_region(&catalog, &pool, MuscleGroup::Legs).unwrap();
        let second = select_for_region(&catalog, &pool, MuscleGroup::Legs).unwrap();
        assert_eq!(first.exercise.id, second.exercise.id);
        assert_eq!(first.is_substitute, second.is_substitute);
    }
}
