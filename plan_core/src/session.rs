//! Session composition: one workout from a focus and per-region selections.
//!
//! A session walks the base template regions in a fixed order, prescribes
//! sets/reps from the focus, and wraps the main work in fixed warmup and
//! cooldown steps plus a cardio finisher.

use crate::selector::{select_for_region, RegionSelection};
use crate::types::*;
use chrono::{DateTime, Duration, Utc};

/// Region visit order for base sessions (arms intentionally excluded)
pub const BASE_TEMPLATE: [MuscleGroup; 5] = [
    MuscleGroup::Legs,
    MuscleGroup::Chest,
    MuscleGroup::Back,
    MuscleGroup::Shoulders,
    MuscleGroup::Core,
];

/// Prescribe sets and reps for a focus
///
/// The final arm is unreachable with the current focus enumeration but is
/// kept explicit so the mapping stays total.
pub fn sets_for_focus(focus: WorkoutFocus) -> Vec<WorkoutSet> {
    let (sets, reps) = match focus {
        WorkoutFocus::Strength => (4, 5),
        WorkoutFocus::Hypertrophy => (3, 12),
        WorkoutFocus::Metabolic => (3, 15),
        WorkoutFocus::Performance => (4, 20),
        #[allow(unreachable_patterns)]
        _ => (3, 10),
    };
    vec![
        WorkoutSet {
            reps,
            weight_kg: 0.0,
            completed: false,
        };
        sets
    ]
}

/// Cardio finisher for a focus: HIIT for metabolic/performance work,
/// low-intensity steady state otherwise
pub fn cardio_for_focus(focus: WorkoutFocus) -> ProtocolStep {
    match focus {
        WorkoutFocus::Metabolic | WorkoutFocus::Performance => ProtocolStep {
            name: "High-Intensity Intervals".into(),
            duration_min: 12,
            description: "30/30 protocol: 30s max effort, 30s active recovery.".into(),
            video_id: Some("ml6cT4AZdqI".into()),
        },
        _ => ProtocolStep {
            name: "LISS (Low-Intensity Cardio)".into(),
            duration_min: 20,
            description: "Zone 2: brisk walk or easy bike. Ideal for active recovery.".into(),
            video_id: Some("8fL-U0eFkMc".into()),
        },
    }
}

/// Two fixed warmup steps; the activation block names the first selected
/// region, or falls back to a full-body cue when every region was skipped
pub fn warmup_steps(first_region: Option<MuscleGroup>) -> Vec<ProtocolStep> {
    let activation_target = first_region
        .map(|r| r.to_string())
        .unwrap_or_else(|| "Full Body".into());
    vec![
        ProtocolStep {
            name: "Joint Mobility".into(),
            duration_min: 3,
            description: "Controlled rotations for synovial lubrication.".into(),
            video_id: Some("XW_A-rejs".into()),
        },
        ProtocolStep {
            name: format!("Activation: {}", activation_target),
            duration_min: 5,
            description: "Light sets to groove the movement pattern and wake up the CNS.".into(),
            video_id: Some("IZxyjW7MPJQ".into()),
        },
    ]
}

/// Two fixed cooldown steps, independent of focus
pub fn cooldown_steps() -> Vec<ProtocolStep> {
    vec![
        ProtocolStep {
            name: "Static Stretching".into(),
            duration_min: 3,
            description: "Posterior chain focus with diaphragmatic breathing.".into(),
            video_id: Some("mYpU22_9C6Y".into()),
        },
        ProtocolStep {
            name: "Hip Mobility".into(),
            duration_min: 2,
            description: "Psoas and iliacus release.".into(),
            video_id: Some("LpW69H9rEEY".into()),
        },
    ]
}

pub(crate) fn place_selection(selection: &RegionSelection<'_>, focus: WorkoutFocus) -> WorkoutExercise {
    WorkoutExercise {
        exercise: selection.exercise.clone(),
        sets: sets_for_focus(focus),
        is_substitute: selection.is_substitute,
        replaced_exercise_name: selection.replaced_exercise_name.map(Into::into),
        notes: if selection.is_substitute {
            "Safety substitution due to joint compromise.".into()
        } else {
            String::new()
        },
    }
}

/// Compose one base session for a focus
///
/// Regions with no eligible exercise are silently omitted; the session just
/// carries fewer exercises than the template.
pub fn compose_session(
    catalog: &Catalog,
    pool: &[&Exercise],
    focus: WorkoutFocus,
    day_offset: i64,
    now: DateTime<Utc>,
) -> WorkoutSession {
    let exercises: Vec<WorkoutExercise> = BASE_TEMPLATE
        .iter()
        .filter_map(|&region| select_for_region(catalog, pool, region))
        .map(|selection| place_selection(&selection, focus))
        .collect();

    let first_region = exercises.first().map(|we| we.exercise.muscle_target);

    WorkoutSession {
        date: (now + Duration::days(day_offset)).date_naive(),
        focus,
        warmup: warmup_steps(first_region),
        cooldown: cooldown_steps(),
        cardio_finisher: cardio_for_focus(focus),
        exercises,
        is_completed: false,
    }
}
