use anyhow::Result;
use serde::Serialize;

use crate::core::targets::compute_targets;
use crate::db::Store;
use crate::models::analytics::DailyStats;
use crate::models::profile::{Goal, UserProfile};

/// Answers collected by the intake flow.
pub struct ProfileInput<'a> {
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    pub goal: Goal,
    pub dietary_preference: Option<&'a str>,
    /// Comma separated.
    pub allergies: Option<&'a str>,
}

/// Split a comma separated allergy list, dropping blanks.
pub fn parse_allergies(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Build a profile with its targets filled in.
pub fn build_profile(input: ProfileInput) -> UserProfile {
    let mut profile = UserProfile::new(input.age, input.weight, input.height, input.goal);
    if let Some(pref) = input.dietary_preference.map(str::trim).filter(|s| !s.is_empty()) {
        profile.dietary_preference = pref.to_string();
    }
    if let Some(raw) = input.allergies {
        profile.allergies = parse_allergies(raw);
    }
    profile.targets = Some(compute_targets(&profile));
    profile
}

/// Replace the stored profile with a freshly computed one.
pub fn save_intake(store: &mut impl Store, input: ProfileInput) -> Result<UserProfile> {
    let profile = build_profile(input);
    store.save_profile(&profile)?;
    tracing::info!(goal = %profile.goal, "profile saved");
    Ok(profile)
}

#[derive(Debug, Serialize)]
pub struct MacroProgress {
    pub consumed: f64,
    pub target: u32,
    /// Share of the target consumed, one decimal.
    pub percent: f64,
}

#[derive(Debug, Serialize)]
pub struct DailyProgress {
    pub calories: MacroProgress,
    pub protein: MacroProgress,
    pub carbs: MacroProgress,
    pub fat: MacroProgress,
}

/// A day's totals against the stored targets. None if the profile has none.
pub fn progress(profile: &UserProfile, stats: &DailyStats) -> Option<DailyProgress> {
    let t = profile.targets?;
    Some(DailyProgress {
        calories: macro_progress(stats.total_calories, t.calories),
        protein: macro_progress(stats.total_protein, t.protein),
        carbs: macro_progress(stats.total_carbs, t.carbs),
        fat: macro_progress(stats.total_fat, t.fat),
    })
}

fn macro_progress(consumed: f64, target: u32) -> MacroProgress {
    let percent = if target == 0 {
        0.0
    } else {
        (consumed / target as f64 * 1000.0).round() / 10.0
    };
    MacroProgress {
        consumed,
        target,
        percent,
    }
}
