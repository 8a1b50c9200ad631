//! Core domain types for the training plan engine.
//!
//! This module defines the fundamental types used throughout the system:
//! - Exercises and the body regions they target
//! - User profiles (biometrics, goals, injuries, equipment)
//! - Generated sessions, weekly plans and protocol steps
//! - Frequency and nutrition value objects

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

// ============================================================================
// Enumerations
// ============================================================================

/// Body region targeted by an exercise
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MuscleGroup {
    Legs,
    Chest,
    Back,
    Shoulders,
    Arms,
    Core,
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MuscleGroup::Legs => "Legs",
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Back => "Back",
            MuscleGroup::Shoulders => "Shoulders",
            MuscleGroup::Arms => "Arms",
            MuscleGroup::Core => "Core",
        };
        write!(f, "{}", label)
    }
}

/// Training emphasis of a session
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutFocus {
    Strength,
    Hypertrophy,
    Metabolic,
    Performance,
}

impl fmt::Display for WorkoutFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WorkoutFocus::Strength => "Strength",
            WorkoutFocus::Hypertrophy => "Hypertrophy",
            WorkoutFocus::Metabolic => "Metabolic",
            WorkoutFocus::Performance => "Performance",
        };
        write!(f, "{}", label)
    }
}

/// Equipment an exercise requires or a user has available
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Equipment {
    Bodyweight,
    Dumbbell,
    Barbell,
    Machine,
    Cable,
}

/// Experience tier of a user or difficulty tier of an exercise
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// Dietary pattern used for macro splits
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DietType {
    Omnivore,
    Vegan,
    Keto,
    Paleo,
    Vegetarian,
}

/// Broad classification of a reported injury
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InjuryCategory {
    Joint,
    Muscle,
    Chronic,
}

// ============================================================================
// Catalog Types
// ============================================================================

/// A catalog exercise definition (e.g., "Barbell Squat")
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Exercise {
    pub id: String,
    pub name: String,
    pub description: String,
    pub muscle_target: MuscleGroup,
    pub difficulty: Difficulty,
    pub equipment: Vec<Equipment>,
    pub is_compound: bool,
    #[serde(default)]
    pub substitute_id: Option<String>,
    #[serde(default)]
    pub video_id: Option<String>,
}

/// The complete catalog of exercises, in definition order
///
/// Order matters: "ideal" selection picks the first matching entry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Catalog {
    pub exercises: Vec<Exercise>,
}

// ============================================================================
// User Profile Types
// ============================================================================

/// A user-reported injury
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Injury {
    pub name: String,
    #[serde(default)]
    pub category: Option<InjuryCategory>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default = "default_true")]
    pub is_current: bool,
    #[serde(default)]
    pub recovery_time: Option<String>,
}

fn default_true() -> bool {
    true
}

/// User profile captured at onboarding and updated incrementally
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub age: u32,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub fitness_level: Difficulty,
    pub goal: WorkoutFocus,
    pub diet: DietType,
    /// Self-rating 1-5
    pub sleep_quality: u8,
    /// Self-rating 1-5
    pub stress_level: u8,
    pub available_equipment: Vec<Equipment>,
    #[serde(default)]
    pub injuries: Vec<Injury>,
    #[serde(default = "default_sessions_per_week")]
    pub sessions_per_week: u8,
}

fn default_sessions_per_week() -> u8 {
    3
}

// ============================================================================
// Generated Plan Types
// ============================================================================

/// A single prescribed set within a workout exercise
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSet {
    pub reps: u32,
    pub weight_kg: f64,
    pub completed: bool,
}

/// An exercise as placed into a session, with its prescription
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutExercise {
    pub exercise: Exercise,
    pub sets: Vec<WorkoutSet>,
    pub is_substitute: bool,
    #[serde(default)]
    pub replaced_exercise_name: Option<String>,
    #[serde(default)]
    pub notes: String,
}

/// A timed warmup/cooldown/cardio protocol step
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProtocolStep {
    pub name: String,
    pub duration_min: u32,
    pub description: String,
    #[serde(default)]
    pub video_id: Option<String>,
}

/// One generated workout session
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSession {
    pub date: NaiveDate,
    pub focus: WorkoutFocus,
    pub exercises: Vec<WorkoutExercise>,
    pub warmup: Vec<ProtocolStep>,
    pub cooldown: Vec<ProtocolStep>,
    pub cardio_finisher: ProtocolStep,
    pub is_completed: bool,
}

/// A full week of generated sessions
///
/// Regenerated wholesale on every call; never partially patched.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct WeeklyPlan {
    pub week_number: u32,
    pub sessions: Vec<WorkoutSession>,
}

// ============================================================================
// Advisory Value Objects
// ============================================================================

/// Recommended weekly training frequency with justification
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FrequencyRecommendation {
    pub days: u8,
    pub reason: String,
    /// True when the recommendation stems from a medical/recovery
    /// restriction rather than a preference-based suggestion.
    pub is_restricted: bool,
}

/// Daily calorie and macro targets
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct NutritionPlan {
    pub calories: i32,
    pub protein_g: i32,
    pub carbs_g: i32,
    pub fats_g: i32,
    pub key_micros: Vec<String>,
}

// ============================================================================
// Session History Types
// ============================================================================

/// How a session was finished
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    Full,
    Early,
}

/// A record of a completed session, appended to the history log
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CompletedSessionRecord {
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub focus: WorkoutFocus,
    pub status: CompletionStatus,
}
