use crate::models::analytics::DailyStats;
use crate::models::meal::MealEntry;

/// Sum the intake of every entry logged on `date`.
///
/// Matching is exact string equality on the stored `YYYY-MM-DD` value.
pub fn daily_stats(meals: &[MealEntry], date: &str) -> DailyStats {
    meals
        .iter()
        .filter(|m| m.date == date)
        .fold(DailyStats::zero(date), |mut acc, m| {
            acc.total_calories += m.calories;
            acc.total_protein += m.protein;
            acc.total_carbs += m.carbs;
            acc.total_fat += m.fat;
            acc
        })
}
