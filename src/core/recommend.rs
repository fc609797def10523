use crate::core::targets::compute_targets;
use crate::models::analytics::PeriodAnalytics;
use crate::models::profile::UserProfile;
use crate::models::recommendation::{Category, Priority, Recommendation};

pub const MAX_RECOMMENDATIONS: usize = 5;

const CALORIE_LOW: f64 = 0.85;
const CALORIE_HIGH: f64 = 1.15;
const PROTEIN_LOW: f64 = 0.80;
const CARBS_HIGH: f64 = 1.30;

/// Rule-based advice for an analytics report.
///
/// Returns nothing without a profile. Rules are emitted in fixed order, which
/// is also their priority order, and the list is cut at
/// [`MAX_RECOMMENDATIONS`]. The two general tips always come last, so they are
/// the first to go if the list overflows.
pub fn recommendations(
    analytics: &PeriodAnalytics,
    profile: Option<&UserProfile>,
) -> Vec<Recommendation> {
    let Some(profile) = profile else {
        return Vec::new();
    };

    let targets = compute_targets(profile);
    let avg_calories = analytics.average_calories as f64;
    let avg_protein = analytics.average_protein as f64;
    let avg_carbs = analytics.average_carbs as f64;
    let target_calories = targets.calories as f64;

    let mut recs = Vec::new();

    if avg_calories < target_calories * CALORIE_LOW {
        recs.push(Recommendation::new(
            "1",
            "Increase Your Caloric Intake",
            format!(
                "You're consuming {} fewer calories than your target. Consider adding \
                 nutrient-dense snacks like nuts, avocados, or protein shakes.",
                (target_calories - avg_calories).round()
            ),
            Category::Nutrition,
            Priority::High,
        ));
    } else if avg_calories > target_calories * CALORIE_HIGH {
        recs.push(Recommendation::new(
            "2",
            "Reduce Caloric Surplus",
            format!(
                "You're consuming {} more calories than your target. Try smaller portions \
                 or replace high-calorie snacks with fruits and vegetables.",
                (avg_calories - target_calories).round()
            ),
            Category::Nutrition,
            Priority::High,
        ));
    }

    if avg_protein < targets.protein as f64 * PROTEIN_LOW {
        recs.push(Recommendation::new(
            "3",
            "Boost Your Protein Intake",
            format!(
                "Aim for {}g of protein daily. Add lean meats, fish, eggs, legumes, or \
                 protein powder to your meals, especially at lunch and dinner.",
                targets.protein
            ),
            Category::Balance,
            Priority::High,
        ));
    }

    if avg_carbs > targets.carbs as f64 * CARBS_HIGH {
        recs.push(Recommendation::new(
            "4",
            "Balance Your Carbohydrate Intake",
            "Consider reducing refined carbs and sugary foods. Focus on complex \
             carbohydrates like whole grains, vegetables, and legumes for sustained energy."
                .to_string(),
            Category::Balance,
            Priority::Medium,
        ));
    }

    recs.push(Recommendation::new(
        "5",
        "Optimize Meal Timing",
        "Try to eat at consistent times each day. Include protein with breakfast to \
         stabilize blood sugar and reduce cravings throughout the day."
            .to_string(),
        Category::Timing,
        Priority::Medium,
    ));

    recs.push(Recommendation::new(
        "6",
        "Stay Hydrated",
        "Drink at least 8 glasses of water daily. Proper hydration supports metabolism, \
         digestion, and helps control appetite."
            .to_string(),
        Category::Hydration,
        Priority::Medium,
    ));

    tracing::debug!(
        fired = recs.len() - 2,
        avg_calories,
        target_calories,
        "generated recommendations"
    );

    recs.truncate(MAX_RECOMMENDATIONS);
    recs
}
