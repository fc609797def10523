use chrono::{Duration, NaiveDate};

use crate::core::stats::daily_stats;
use crate::models::analytics::{DailyStats, Period, PeriodAnalytics, Trend};
use crate::models::meal::MealEntry;
use crate::models::profile::UserProfile;

/// Mean calories above `target * ABOVE_FACTOR` classify as `above`.
const ABOVE_FACTOR: f64 = 1.10;
/// Mean calories below `target * BELOW_FACTOR` classify as `below`.
const BELOW_FACTOR: f64 = 0.90;

/// Aggregate meals over the window of `period` ending at `today` (inclusive).
///
/// Every day of the window appears in `daily_stats`, zero-filled when nothing
/// was logged, and averages divide by the full window length.
pub fn period_analytics(
    meals: &[MealEntry],
    profile: Option<&UserProfile>,
    period: Period,
    today: NaiveDate,
) -> PeriodAnalytics {
    let days = period.days();
    let from = today - Duration::days(days as i64 - 1);

    let daily: Vec<DailyStats> = from
        .iter_days()
        .take(days as usize)
        .map(|d| daily_stats(meals, &d.format("%Y-%m-%d").to_string()))
        .collect();

    let n = days as f64;
    let mean = |f: fn(&DailyStats) -> f64| daily.iter().map(f).sum::<f64>() / n;
    let avg_calories = mean(|d| d.total_calories);
    let avg_protein = mean(|d| d.total_protein);
    let avg_carbs = mean(|d| d.total_carbs);
    let avg_fat = mean(|d| d.total_fat);

    let trend = classify_trend(avg_calories, profile.and_then(|p| p.target_calories()));

    tracing::debug!(
        %period,
        %from,
        %today,
        meals = meals.len(),
        avg_calories,
        %trend,
        "computed period analytics"
    );

    PeriodAnalytics {
        period,
        from,
        to: today,
        average_calories: avg_calories.round() as i64,
        average_protein: avg_protein.round() as i64,
        average_carbs: avg_carbs.round() as i64,
        average_fat: avg_fat.round() as i64,
        trend,
        daily_stats: daily,
    }
}

/// The seven days ending at `today`.
pub fn weekly_analytics(
    meals: &[MealEntry],
    profile: Option<&UserProfile>,
    today: NaiveDate,
) -> PeriodAnalytics {
    period_analytics(meals, profile, Period::Last7Days, today)
}

/// Compare mean calories to the target; no target means no judgment.
pub fn classify_trend(avg_calories: f64, target_calories: Option<u32>) -> Trend {
    let Some(target) = target_calories else {
        return Trend::OnTarget;
    };
    let target = target as f64;
    if avg_calories > target * ABOVE_FACTOR {
        Trend::Above
    } else if avg_calories < target * BELOW_FACTOR {
        Trend::Below
    } else {
        Trend::OnTarget
    }
}
