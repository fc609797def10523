mod common;

use common::{day, make_meal, sample_profile};
use nutrilog::core::analytics::weekly_analytics;
use nutrilog::core::recommend::{MAX_RECOMMENDATIONS, recommendations};
use nutrilog::models::analytics::{Period, PeriodAnalytics, Trend};
use nutrilog::models::profile::{Goal, UserProfile};
use nutrilog::models::recommendation::{Category, Priority};

/// A report with the given rounded averages and no daily detail.
fn report(calories: i64, protein: i64, carbs: i64, fat: i64) -> PeriodAnalytics {
    PeriodAnalytics {
        period: Period::Last7Days,
        from: day(2024, 1, 1),
        to: day(2024, 1, 7),
        average_calories: calories,
        average_protein: protein,
        average_carbs: carbs,
        average_fat: fat,
        trend: Trend::OnTarget,
        daily_stats: Vec::new(),
    }
}

fn ids(recs: &[nutrilog::models::recommendation::Recommendation]) -> Vec<&str> {
    recs.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn test_no_profile_returns_empty() {
    assert!(recommendations(&report(0, 0, 0, 0), None).is_empty());
}

/// Scenario: Nothing logged yet
///   Given targets of 2464 kcal and 185 g protein
///   When the weekly averages are all zero
///   Then the intake and protein rules fire, followed by the two general tips
#[test]
fn test_empty_week_fires_intake_and_protein() {
    let profile = sample_profile(Goal::Maintain);
    let recs = recommendations(&report(0, 0, 0, 0), Some(&profile));

    assert_eq!(ids(&recs), vec!["1", "3", "5", "6"]);
    assert_eq!(recs[0].title, "Increase Your Caloric Intake");
    assert_eq!(recs[0].priority, Priority::High);
    assert_eq!(recs[0].category, Category::Nutrition);
    assert!(recs[0].description.contains("2464 fewer calories"));
    assert!(recs[1].description.contains("185g of protein"));
    assert_eq!(recs[1].category, Category::Balance);
    assert_eq!(recs[2].category, Category::Timing);
    assert_eq!(recs[2].priority, Priority::Medium);
    assert_eq!(recs[3].category, Category::Hydration);
}

#[test]
fn test_surplus_and_high_carbs() {
    let profile = sample_profile(Goal::Maintain);
    let recs = recommendations(&report(3000, 200, 400, 90), Some(&profile));

    assert_eq!(ids(&recs), vec!["2", "4", "5", "6"]);
    assert_eq!(recs[0].title, "Reduce Caloric Surplus");
    assert!(recs[0].description.contains("536 more calories"));
    assert_eq!(recs[1].priority, Priority::Medium);
}

#[test]
fn test_on_target_only_general_tips() {
    let profile = sample_profile(Goal::Maintain);
    let recs = recommendations(&report(2464, 185, 246, 82), Some(&profile));
    assert_eq!(ids(&recs), vec!["5", "6"]);
}

/// Every conditional rule that can fire together still leaves five entries,
/// with the hydration tip cut by truncation.
#[test]
fn test_three_rules_fill_the_list() {
    let profile = sample_profile(Goal::Maintain);
    let recs = recommendations(&report(3000, 50, 400, 90), Some(&profile));
    assert_eq!(recs.len(), MAX_RECOMMENDATIONS);
    assert_eq!(ids(&recs), vec!["2", "3", "4", "5", "6"]);
}

#[test]
fn test_calorie_band_edges() {
    let profile = sample_profile(Goal::Maintain);
    // 0.85 * 2464 = 2094.4, 1.15 * 2464 = 2833.6
    let low = recommendations(&report(2094, 185, 246, 82), Some(&profile));
    assert_eq!(low[0].id, "1");
    let ok_low = recommendations(&report(2095, 185, 246, 82), Some(&profile));
    assert_eq!(ok_low[0].id, "5");
    let ok_high = recommendations(&report(2833, 185, 246, 82), Some(&profile));
    assert_eq!(ok_high[0].id, "5");
    let high = recommendations(&report(2834, 185, 246, 82), Some(&profile));
    assert_eq!(high[0].id, "2");
}

/// Targets are recomputed from body metrics, so a profile without stored
/// targets still gets personalised advice.
#[test]
fn test_profile_without_stored_targets() {
    let profile = UserProfile::new(25, 70.0, 170.0, Goal::BuildMuscle);
    let recs = recommendations(&report(0, 0, 0, 0), Some(&profile));
    assert!(recs[0].description.contains("2764 fewer calories"));
}

#[test]
fn test_never_more_than_five() {
    let profile = sample_profile(Goal::ReduceWeight);
    for cal in [0, 1000, 1964, 3000, 10_000] {
        for protein in [0, 100, 500] {
            for carbs in [0, 200, 1000] {
                let recs = recommendations(&report(cal, protein, carbs, 0), Some(&profile));
                assert!(recs.len() <= MAX_RECOMMENDATIONS);
                assert!(recs.len() >= 2);
            }
        }
    }
}

#[test]
fn test_from_weekly_analytics() {
    let profile = sample_profile(Goal::Maintain);
    let meals = vec![make_meal("2024-01-07", 700.0, 20.0, 80.0, 20.0)];
    let a = weekly_analytics(&meals, Some(&profile), day(2024, 1, 7));
    let recs = recommendations(&a, Some(&profile));
    // avg 100 kcal -> 2364 short
    assert!(recs[0].description.contains("2364 fewer calories"));
    assert_eq!(recs[1].id, "3");
}
