//! Injury-to-region safety classification.
//!
//! Maps a user's reported injuries to the set of body regions that must not
//! receive compound loading. Matching is keyword-based and fail-open: an
//! injury name that matches no keyword contributes no restriction. Compound
//! movements are what get excluded downstream, so an unmatched injury is
//! never silently dangerous.

use crate::types::{Injury, MuscleGroup};
use std::collections::HashSet;

/// Keyword table mapping injury-name tokens to restricted regions
const KEYWORD_TABLE: &[(&[&str], &[MuscleGroup])] = &[
    (
        &["knee", "ankle", "foot"],
        &[MuscleGroup::Legs],
    ),
    (
        &["shoulder", "elbow", "wrist"],
        &[MuscleGroup::Shoulders, MuscleGroup::Chest, MuscleGroup::Back],
    ),
    (
        &["back", "lumbar", "spine"],
        &[MuscleGroup::Back, MuscleGroup::Core, MuscleGroup::Legs],
    ),
];

/// Pluggable injury classification seam
///
/// The default keyword matcher is a simplistic stand-in for a medical rules
/// engine; implementing this trait lets a richer taxonomy replace it without
/// touching the selector or composer.
pub trait RegionClassifier {
    fn restricted_regions(&self, injuries: &[Injury]) -> HashSet<MuscleGroup>;
}

/// Default keyword-based classifier
#[derive(Clone, Copy, Debug, Default)]
pub struct KeywordClassifier;

impl RegionClassifier for KeywordClassifier {
    fn restricted_regions(&self, injuries: &[Injury]) -> HashSet<MuscleGroup> {
        restricted_regions(injuries)
    }
}

/// Compute the set of restricted regions from reported injuries
///
/// Case-insensitive substring matching against a fixed keyword table.
/// Multiple injuries union their restricted regions.
pub fn restricted_regions(injuries: &[Injury]) -> HashSet<MuscleGroup> {
    let mut restricted = HashSet::new();

    for injury in injuries {
        let name = injury.name.to_lowercase();
        let mut matched = false;

        for (keywords, regions) in KEYWORD_TABLE {
            if keywords.iter().any(|k| name.contains(k)) {
                restricted.extend(regions.iter().copied());
                matched = true;
            }
        }

        if !matched {
            tracing::debug!(
                "Injury '{}' matched no safety keywords; no restriction applied",
                injury.name
            );
        }
    }

    if !restricted.is_empty() {
        tracing::info!("Restricted regions from injuries: {:?}", restricted);
    }

    restricted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn injury(name: &str) -> Injury {
        Injury {
            name: name.into(),
            category: None,
            details: None,
            is_current: true,
            recovery_time: None,
        }
    }

    #[test]
    fn test_knee_restricts_legs() {
        let restricted = restricted_regions(&[injury("Knee pain")]);
        assert_eq!(restricted.len(), 1);
        assert!(restricted.contains(&MuscleGroup::Legs));
    }

    #[test]
    fn test_shoulder_restricts_upper_body() {
        let restricted = restricted_regions(&[injury("shoulder impingement")]);
        assert!(restricted.contains(&MuscleGroup::Shoulders));
        assert!(restricted.contains(&MuscleGroup::Chest));
        assert!(restricted.contains(&MuscleGroup::Back));
        assert!(!restricted.contains(&MuscleGroup::Legs));
    }

    #[test]
    fn test_lumbar_restricts_posterior_chain() {
        let restricted = restricted_regions(&[injury("chronic lumbar strain")]);
        assert!(restricted.contains(&MuscleGroup::Back));
        assert!(restricted.contains(&MuscleGroup::Core));
        assert!(restricted.contains(&MuscleGroup::Legs));
    }

    #[test]
    fn test_case_insensitive_matching() {
        let restricted = restricted_regions(&[injury("SPRAINED ANKLE")]);
        assert!(restricted.contains(&MuscleGroup::Legs));
    }

    #[test]
    fn test_multiple_injuries_union() {
        let restricted = restricted_regions(&[injury("knee"), injury("wrist tendinitis")]);
        assert!(restricted.contains(&MuscleGroup::Legs));
        assert!(restricted.contains(&MuscleGroup::Shoulders));
        assert!(restricted.contains(&MuscleGroup::Chest));
        assert!(restricted.contains(&MuscleGroup::Back));
    }

    #[test]
    fn test_unmatched_injury_fails_open() {
        let restricted = restricted_regions(&[injury("tennis finger")]);
        assert!(restricted.is_empty());
    }

    #[test]
    fn test_no_injuries_no_restrictions() {
        let restricted = restricted_regions(&[]);
        assert!(restricted.is_empty());
    }
}
