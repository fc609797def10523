use crate::models::profile::{Goal, Targets, UserProfile};

/// Moderate activity multiplier applied to BMR.
pub const ACTIVITY_FACTOR: f64 = 1.5;
pub const DEFICIT_KCAL: f64 = 500.0;
pub const SURPLUS_KCAL: f64 = 300.0;

const PROTEIN_SHARE: f64 = 0.30;
const CARBS_SHARE: f64 = 0.40;
const FAT_SHARE: f64 = 0.30;
const KCAL_PER_G_PROTEIN: f64 = 4.0;
const KCAL_PER_G_CARBS: f64 = 4.0;
const KCAL_PER_G_FAT: f64 = 9.0;

/// Mifflin-St Jeor basal metabolic rate (kcal/day).
pub fn bmr(profile: &UserProfile) -> f64 {
    10.0 * profile.weight + 6.25 * profile.height - 5.0 * profile.age as f64 + 5.0
}

/// Daily calorie and macro targets for a profile.
///
/// Each value is rounded independently from the unrounded calorie figure, so
/// the macro grams need not reconcile exactly with the calorie total. Inputs
/// are not validated; nonsensical metrics produce nonsensical (clamped) targets.
pub fn compute_targets(profile: &UserProfile) -> Targets {
    let mut calories = bmr(profile) * ACTIVITY_FACTOR;

    match profile.goal {
        Goal::ReduceWeight => calories -= DEFICIT_KCAL,
        Goal::BuildMuscle => calories += SURPLUS_KCAL,
        Goal::Maintain => {}
    }

    Targets {
        calories: to_whole(calories),
        protein: to_whole(calories * PROTEIN_SHARE / KCAL_PER_G_PROTEIN),
        carbs: to_whole(calories * CARBS_SHARE / KCAL_PER_G_CARBS),
        fat: to_whole(calories * FAT_SHARE / KCAL_PER_G_FAT),
    }
}

// Float-to-int casts saturate, so negatives land on 0.
fn to_whole(v: f64) -> u32 {
    v.round() as u32
}
