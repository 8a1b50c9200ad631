//! Weekly training frequency recommendation.
//!
//! Pure advisory function of the user profile. Precedence, first match wins:
//! 1. Medical/recovery restriction (injury, senior, stress + poor sleep)
//! 2. Beginner adaptation
//! 3. Advanced volume (low stress, hypertrophy/performance goal)
//! 4. Four-day default

use crate::types::{Difficulty, FrequencyRecommendation, UserProfile, WorkoutFocus};

/// Compute the recommended weekly session count for a profile
pub fn calculate_recommended_frequency(profile: &UserProfile) -> FrequencyRecommendation {
    let has_injuries = profile.injuries.iter().any(|i| i.is_current);
    let is_senior = profile.age > 60;
    let high_stress = profile.stress_level > 3;
    let poor_sleep = profile.sleep_quality < 3;

    // 1. Medical restriction and critical recovery
    if has_injuries || is_senior || (high_stress && poor_sleep) {
        let reason = if has_injuries || is_senior {
            if is_senior {
                "Prioritizing joint longevity with 3 full-body days.".to_string()
            } else {
                "We recommend 3 days so your injuries have time to heal between stimuli."
                    .to_string()
            }
        } else {
            "Your stress levels and lack of sleep suggest your nervous system needs more \
             rest. 3 days is optimal to avoid overtraining."
                .to_string()
        };

        return FrequencyRecommendation {
            days: 3,
            reason,
            is_restricted: true,
        };
    }

    // 2. Experience level
    if profile.fitness_level == Difficulty::Beginner {
        return FrequencyRecommendation {
            days: 3,
            reason: "As a beginner, your body needs to adapt gradually. 3 days allow safe \
                     progression."
                .to_string(),
            is_restricted: false,
        };
    }

    // 3. Goals and lifestyle
    if profile.fitness_level == Difficulty::Advanced
        && !high_stress
        && (profile.goal == WorkoutFocus::Hypertrophy
            || profile.goal == WorkoutFocus::Performance)
    {
        return FrequencyRecommendation {
            days: 5,
            reason: "Your physical base and low stress allow a 5-day volume for maximum \
                     results."
                .to_string(),
            is_restricted: false,
        };
    }

    FrequencyRecommendation {
        days: 4,
        reason: "4 days is the sweet spot balancing work, personal life and physical \
                 progress."
            .to_string(),
        is_restricted: false,
    }
}

/// True when the user's chosen frequency exceeds a restriction-flagged
/// recommendation, meaning a caller-visible safety warning must be shown
pub fn safety_conflict(profile: &UserProfile, recommendation: &FrequencyRecommendation) -> bool {
    profile.sessions_per_week > recommendation.days && recommendation.is_restricted
}
