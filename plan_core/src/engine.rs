//! Weekly plan assembly.
//!
//! This module implements the plan generation logic:
//! - Classify injuries into restricted regions
//! - Build the safe exercise pool
//! - Compose the three mandatory focus sessions
//! - Conditionally append the hybrid performance session
//!
//! Generation is a pure function of (profile, catalog, now): no hidden
//! randomness, no mutation of inputs.

use crate::safety::restricted_regions;
use crate::selector::{build_pool, RegionSelection};
use crate::session::{cardio_for_focus, compose_session, cooldown_steps, place_selection};
use crate::types::*;
use chrono::{DateTime, Duration, Utc};

/// Circuit order for the hybrid session
const CIRCUIT_TEMPLATE: [MuscleGroup; 4] = [
    MuscleGroup::Legs,
    MuscleGroup::Core,
    MuscleGroup::Back,
    MuscleGroup::Chest,
];

/// Generate a full weekly plan for a user
///
/// Always emits Strength (day 1), Hypertrophy (day 3) and Metabolic (day 5)
/// sessions. A fourth hybrid/performance session (day 6) is added only for
/// non-beginners whose goal or chosen frequency supports the extra load.
pub fn generate_weekly_plan(
    profile: &UserProfile,
    catalog: &Catalog,
    now: DateTime<Utc>,
) -> WeeklyPlan {
    let restricted = restricted_regions(&profile.injuries);
    let pool = build_pool(catalog, &profile.available_equipment, &restricted);

    let mut sessions = vec![
        compose_session(catalog, &pool, WorkoutFocus::Strength, 1, now),
        compose_session(catalog, &pool, WorkoutFocus::Hypertrophy, 3, now),
        compose_session(catalog, &pool, WorkoutFocus::Metabolic, 5, now),
    ];

    // Hybrid session gating: a solid base (intermediate+) avoids CNS
    // overload; metabolic/performance goals get priority; at 4+ chosen days
    // the session doubles as structured active recovery.
    let is_level_ready = profile.fitness_level != Difficulty::Beginner;
    let is_goal_compatible =
        profile.goal == WorkoutFocus::Metabolic || profile.goal == WorkoutFocus::Performance;
    let has_enough_frequency = profile.sessions_per_week >= 4;

    if is_level_ready && (is_goal_compatible || has_enough_frequency) {
        tracing::info!(
            "Adding hybrid session (goal_compatible={}, frequency={})",
            is_goal_compatible,
            profile.sessions_per_week
        );
        sessions.push(compose_hybrid_session(&pool, 6, now, profile));
    }

    WeeklyPlan {
        week_number: 1,
        sessions,
    }
}

/// Compose the hybrid functional/cardio session
///
/// Exercises are drawn from the functional subset of the pool (bodyweight,
/// dumbbell or cable movements that allow a dynamic flow) and arranged as a
/// no-rest metabolic circuit. The cardio finisher adapts to the user's
/// equipment tier.
fn compose_hybrid_session(
    pool: &[&Exercise],
    day_offset: i64,
    now: DateTime<Utc>,
    profile: &UserProfile,
) -> WorkoutSession {
    let functional_pool: Vec<&Exercise> = pool
        .iter()
        .copied()
        .filter(|ex| {
            ex.equipment.contains(&Equipment::Bodyweight)
                || ex.equipment.contains(&Equipment::Dumbbell)
                || ex.equipment.contains(&Equipment::Cable)
        })
        .collect();

    let mut exercises = Vec::new();
    for (index, &target) in CIRCUIT_TEMPLATE.iter().enumerate() {
        let options: Vec<&Exercise> = functional_pool
            .iter()
            .copied()
            .filter(|ex| ex.muscle_target == target)
            .collect();

        // Rotate by circuit position so repeated regions vary when options
        // exist; fall back to any safe exercise rather than dropping the slot
        let chosen = if !options.is_empty() {
            Some(options[index % options.len()])
        } else {
            pool.first().copied()
        };

        let Some(chosen) = chosen else { continue };

        let selection = RegionSelection {
            exercise: chosen,
            is_substitute: false,
            replaced_exercise_name: None,
        };
        let mut placed = place_selection(&selection, WorkoutFocus::Performance);
        placed.notes = "Metabolic circuit: no rest between exercises in the block.".into();
        exercises.push(placed);
    }

    WorkoutSession {
        date: (now + Duration::days(day_offset)).date_naive(),
        focus: WorkoutFocus::Performance,
        exercises,
        warmup: vec![ProtocolStep {
            name: "Biomechanical Activation".into(),
            duration_min: 6,
            description: "Joint preparation specific to multi-planar movement.".into(),
            video_id: Some("XW_A-rejs".into()),
        }],
        cooldown: cooldown_steps(),
        cardio_finisher: hybrid_finisher(profile),
        is_completed: false,
    }
}

/// Pick the hybrid session's cardio finisher by equipment tier
///
/// Machine access favors low-impact, high-demand intervals; advanced users
/// with a barbell get a complex; everyone else runs the default HIIT block.
fn hybrid_finisher(profile: &UserProfile) -> ProtocolStep {
    if profile.available_equipment.contains(&Equipment::Machine) {
        return ProtocolStep {
            name: "Machine Intervals (Rower/Air Bike)".into(),
            duration_min: 15,
            description:
                "Aerobic power focus. Hold 80-90% of max capacity in 1-minute intervals.".into(),
            video_id: Some("8fL-U0eFkMc".into()),
        };
    }

    if profile.available_equipment.contains(&Equipment::Barbell)
        && profile.fitness_level == Difficulty::Advanced
    {
        return ProtocolStep {
            name: "Barbell Complex EMOM".into(),
            duration_min: 10,
            description:
                "5 clean & press reps at the top of every minute. Rest the remainder.".into(),
            video_id: Some("IZxyjW7MPJQ".into()),
        };
    }

    cardio_for_focus(WorkoutFocus::Performance)
}
