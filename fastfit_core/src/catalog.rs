//! Default exercise catalog, one tagged pool per workout category.
//!
//! The catalog is reference data: built once, shared read-only, and only ever
//! extended by cloning (see [`ExerciseCatalog::with_custom`]).

use crate::config::CustomExercise;
use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

use IntensityTier::{High, Low, Medium};

/// Exercise pools keyed by category, each in selection order
#[derive(Clone, Debug, Default)]
pub struct ExerciseCatalog {
    pools: HashMap<WorkoutCategory, Vec<Exercise>>,
}

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<ExerciseCatalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static ExerciseCatalog {
    &DEFAULT_CATALOG
}

fn ex(id: &str, name: &str, tiers: &[IntensityTier]) -> Exercise {
    Exercise {
        id: id.into(),
        name: name.into(),
        tiers: tiers.to_vec(),
    }
}

/// Builds the default catalog
///
/// **Note**: prefer `get_default_catalog()` outside tests.
pub fn build_default_catalog() -> ExerciseCatalog {
    let mut pools = HashMap::new();

    pools.insert(
        WorkoutCategory::Cardio,
        vec![
            ex("marching_in_place", "Marching in place", &[Low]),
            ex("brisk_walk", "Brisk walk", &[Low, Medium]),
            ex("easy_cycling", "Easy cycling", &[Low, Medium]),
            ex("step_ups", "Step-ups", &[Low, Medium]),
            ex("jumping_jacks", "Jumping jacks", &[Medium, High]),
            ex("jump_rope", "Jump rope", &[Medium, High]),
            ex("high_knees", "High knees", &[High]),
            ex("stair_sprints", "Stair sprints", &[High]),
        ],
    );

    pools.insert(
        WorkoutCategory::Strength,
        vec![
            ex("wall_pushups", "Wall push-ups", &[Low]),
            ex("glute_bridges", "Glute bridges", &[Low, Medium]),
            ex("bodyweight_squats", "Bodyweight squats", &[Low, Medium]),
            ex("bird_dogs", "Bird dogs", &[Low]),
            ex("pushups", "Push-ups", &[Medium, High]),
            ex("reverse_lunges", "Reverse lunges", &[Medium, High]),
            ex("plank", "Plank hold", &[Medium, High]),
            ex("goblet_squats", "Goblet squats", &[High]),
            ex("pike_pushups", "Pike push-ups", &[High]),
        ],
    );

    pools.insert(
        WorkoutCategory::Flexibility,
        vec![
            ex("neck_rolls", "Neck rolls", &[Low]),
            ex("cat_cow", "Cat-cow", &[Low, Medium]),
            ex("hamstring_stretch", "Standing hamstring stretch", &[Low, Medium]),
            ex("hip_flexor_stretch", "Kneeling hip flexor stretch", &[Low, Medium]),
            ex("shoulder_openers", "Doorway shoulder openers", &[Low]),
            ex("pigeon_pose", "Pigeon pose", &[Medium]),
            ex("deep_squat_hold", "Deep squat hold", &[Medium]),
        ],
    );

    pools.insert(
        WorkoutCategory::Mixed,
        vec![
            ex("bodyweight_circuit", "Bodyweight circuit", &[Low, Medium]),
            ex("mobility_flow", "Mobility flow", &[Low]),
            ex("farmer_carry", "Farmer carry", &[Low, Medium]),
            ex("step_and_reach", "Step and reach", &[Low]),
            ex("kettlebell_swings", "Kettlebell swings", &[Medium, High]),
            ex("mountain_climbers", "Mountain climbers", &[Medium, High]),
            ex("thrusters", "Thrusters", &[High]),
            ex("burpees", "Burpees", &[High]),
        ],
    );

    pools.insert(
        WorkoutCategory::HighIntensity,
        vec![
            ex("low_impact_intervals", "Low-impact intervals", &[Low]),
            ex("marching_intervals", "Fast marching intervals", &[Low]),
            ex("incline_mountain_climbers", "Incline mountain climbers", &[Low]),
            ex("skater_steps", "Skater steps", &[Low, Medium]),
            ex("tabata_squats", "Tabata squats", &[Medium, High]),
            ex("speed_step_ups", "Speed step-ups", &[Medium]),
            ex("jab_cross_intervals", "Jab-cross intervals", &[Medium]),
            ex("burpee_intervals", "Burpee intervals", &[High]),
            ex("sprint_intervals", "Sprint intervals", &[High]),
            ex("jump_squats", "Jump squats", &[High]),
        ],
    );

    pools.insert(
        WorkoutCategory::Yoga,
        vec![
            ex("childs_pose_flow", "Child's pose flow", &[Low]),
            ex("cat_cow_flow", "Cat-cow flow", &[Low]),
            ex("seated_forward_fold", "Seated forward fold", &[Low]),
            ex("supine_twist", "Supine twist", &[Low]),
            ex("sun_salutation_a", "Sun salutation A", &[Medium]),
            ex("warrior_sequence", "Warrior sequence", &[Medium]),
            ex("chair_pose", "Chair pose", &[Medium]),
            ex("boat_pose", "Boat pose", &[Medium]),
        ],
    );

    pools.insert(
        WorkoutCategory::Walking,
        vec![
            ex("easy_walk", "Easy walk", &[Low]),
            ex("post_meal_walk", "Post-meal walk", &[Low]),
            ex("nature_walk", "Nature walk", &[Low, Medium]),
            ex("arm_swing_walk", "Walk with arm circles", &[Low]),
            ex("interval_walk", "Interval walk", &[Medium]),
            ex("incline_walk", "Incline walk", &[Medium]),
            ex("hill_walk", "Hill walk", &[Medium]),
        ],
    );

    ExerciseCatalog { pools }
}

impl ExerciseCatalog {
    /// The pool for `category`, empty if the category has none
    pub fn pool(&self, category: WorkoutCategory) -> &[Exercise] {
        self.pools.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Exercises in `category` tagged with `tier`, in pool order
    pub fn matching(
        &self,
        category: WorkoutCategory,
        tier: IntensityTier,
    ) -> impl Iterator<Item = &Exercise> {
        self.pool(category).iter().filter(move |e| e.suits(tier))
    }

    /// A copy of this catalog with custom exercises appended to their pools
    pub fn with_custom(&self, custom: &[CustomExercise]) -> ExerciseCatalog {
        let mut catalog = self.clone();
        for extra in custom {
            catalog
                .pools
                .entry(extra.category)
                .or_default()
                .push(Exercise {
                    id: extra.id.clone(),
                    name: extra.name.clone(),
                    tiers: extra.tiers.clone(),
                });
        }
        catalog
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for category in WorkoutCategory::ALL {
            let pool = self.pool(category);
            let mut seen = HashSet::new();

            for exercise in pool {
                if exercise.id.is_empty() {
                    errors.push(format!("Category '{}' has an exercise with empty ID", category));
                }
                if exercise.name.is_empty() {
                    errors.push(format!("Exercise '{}' has empty name", exercise.id));
                }
                if exercise.tiers.is_empty() {
                    errors.push(format!("Exercise '{}' has no intensity tiers", exercise.id));
                }
                if !seen.insert(exercise.id.as_str()) {
                    errors.push(format!(
                        "Category '{}' lists exercise '{}' twice",
                        category, exercise.id
                    ));
                }
            }

            for tier in [Low, Medium, High] {
                if tier <= category.max_tier() && !pool.iter().any(|e| e.suits(tier)) {
                    errors.push(format!(
                        "Category '{}' has no {} exercises",
                        category, tier
                    ));
                }
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_category() {
        let catalog = build_default_catalog();
        for category in WorkoutCategory::ALL {
            assert!(
                !catalog.pool(category).is_empty(),
                "Category {} has no pool",
                category
            );
        }
    }

    #[test]
    fn test_default_catalog_validates() {
        let errors = get_default_catalog().validate();
        assert!(
            errors.is_empty(),
            "Default catalog has validation errors: {:?}",
            errors
        );
    }

    #[test]
    fn test_every_reachable_tier_has_four_exercises() {
        let catalog = get_default_catalog();
        for category in WorkoutCategory::ALL {
            for tier in [Low, Medium, High] {
                if tier <= category.max_tier() {
                    let count = catalog.matching(category, tier).count();
                    assert!(count >= 4, "{} {} has only {} exercises", category, tier, count);
                }
            }
        }
    }

    #[test]
    fn test_matching_preserves_pool_order() {
        let catalog = get_default_catalog();
        let ids: Vec<&str> = catalog
            .matching(WorkoutCategory::Cardio, Medium)
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(
            ids,
            vec!["brisk_walk", "easy_cycling", "step_ups", "jumping_jacks", "jump_rope"]
        );
    }

    #[test]
    fn test_with_custom_leaves_default_untouched() {
        let custom = vec![CustomExercise {
            category: WorkoutCategory::Yoga,
            id: "tree_pose".into(),
            name: "Tree pose".into(),
            tiers: vec![Low],
        }];
        let extended = get_default_catalog().with_custom(&custom);

        assert_eq!(
            extended.pool(WorkoutCategory::Yoga).len(),
            get_default_catalog().pool(WorkoutCategory::Yoga).len() + 1
        );
        assert!(!get_default_catalog()
            .pool(WorkoutCategory::Yoga)
            .iter()
            .any(|e| e.id == "tree_pose"));
    }

    #[test]
    fn test_validate_reports_problems() {
        let custom = vec![
            CustomExercise {
                category: WorkoutCategory::Walking,
                id: "easy_walk".into(),
                name: "Duplicate".into(),
                tiers: vec![Low],
            },
            CustomExercise {
                category: WorkoutCategory::Walking,
                id: "untagged".into(),
                name: "Untagged".into(),
                tiers: vec![],
            },
        ];
        let errors = get_default_catalog().with_custom(&custom).validate();
        assert!(errors.iter().any(|e| e.contains("twice")));
        assert!(errors.iter().any(|e| e.contains("no intensity tiers")));
    }

    #[test]
    fn test_empty_catalog_fails_validation() {
        let errors = ExerciseCatalog::default().validate();
        assert!(errors.iter().any(|e| e.contains("has no low exercises")));
    }
}
