//! Daily calorie and macro target derivation.
//!
//! Mifflin-St Jeor base estimate, activity multiplier from chosen weekly
//! frequency, goal-based calorie adjustment and diet-based macro split.
//!
//! The calculator performs no input validation: callers are expected to
//! supply sane defaults, and nonsensical biometrics propagate into
//! nonsensical targets rather than raising.

use crate::types::{DietType, NutritionPlan, UserProfile, WorkoutFocus};

/// Fixed micronutrient watch-list, independent of inputs
const KEY_MICROS: [&str; 3] = ["Magnesium", "Zinc", "Vitamin D3"];

/// Compute the daily nutrition plan for a profile
pub fn calculate_nutrition(profile: &UserProfile) -> NutritionPlan {
    // Fixed base formula; do not substitute a different equation
    let bmr = 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * f64::from(profile.age)
        + 5.0;

    let multiplier = if profile.sessions_per_week >= 4 {
        1.55
    } else {
        1.375
    };

    let mut calories = bmr * multiplier;
    match profile.goal {
        WorkoutFocus::Metabolic => calories -= 400.0,
        WorkoutFocus::Hypertrophy => calories += 300.0,
        _ => {}
    }

    let (protein_pct, carb_pct, fat_pct) = macro_split(profile.diet);

    NutritionPlan {
        calories: calories.round() as i32,
        protein_g: (calories * protein_pct / 4.0).round() as i32,
        carbs_g: (calories * carb_pct / 4.0).round() as i32,
        fats_g: (calories * fat_pct / 9.0).round() as i32,
        key_micros: KEY_MICROS.iter().map(|s| s.to_string()).collect(),
    }
}

/// Macro split percentages of calories (protein, carbs, fat) by diet type
fn macro_split(diet: DietType) -> (f64, f64, f64) {
    match diet {
        DietType::Keto => (0.25, 0.05, 0.70),
        DietType::Vegan | DietType::Vegetarian => (0.25, 0.50, 0.25),
        DietType::Paleo => (0.35, 0.25, 0.40),
        DietType::Omnivore => (0.30, 0.40, 0.30),
    }
}
