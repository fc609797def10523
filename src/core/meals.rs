use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use crate::core::stats::daily_stats;
use crate::db::Store;
use crate::models::analytics::DailyStats;
use crate::models::meal::{MealEntry, MealType};

/// Fields for a new meal entry.
pub struct MealInput<'a> {
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub name: &'a str,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub notes: Option<&'a str>,
}

/// Partial update for an existing entry; `None` keeps the stored value.
#[derive(Default)]
pub struct MealPatch<'a> {
    pub date: Option<NaiveDate>,
    pub meal_type: Option<MealType>,
    pub name: Option<&'a str>,
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    pub notes: Option<&'a str>,
}

/// Build a validated entry with a fresh id.
pub fn new_meal(input: MealInput) -> Result<MealEntry> {
    let mut m = MealEntry::new(
        input.date,
        input.meal_type,
        input.name.trim().to_string(),
        input.calories,
    );
    m.protein = input.protein;
    m.carbs = input.carbs;
    m.fat = input.fat;
    m.notes = input
        .notes
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(String::from);
    m.validate()?;
    Ok(m)
}

/// Validate and store a new meal. Returns the created entry.
pub fn add_meal(store: &mut impl Store, input: MealInput) -> Result<MealEntry> {
    let m = new_meal(input)?;
    store.add_meal(&m)?;
    tracing::info!(id = %m.id, date = %m.date, meal_type = %m.meal_type, "meal added");
    Ok(m)
}

/// Apply a patch to a stored meal and write the full record back.
pub fn edit_meal(store: &mut impl Store, id: &str, patch: MealPatch) -> Result<MealEntry> {
    let mut m = store
        .list_meals()?
        .into_iter()
        .find(|m| m.id == id)
        .ok_or_else(|| anyhow::anyhow!("meal not found: {}", id))?;

    if let Some(d) = patch.date {
        m.date = d.format("%Y-%m-%d").to_string();
    }
    if let Some(t) = patch.meal_type {
        m.meal_type = t;
    }
    if let Some(n) = patch.name {
        m.name = n.trim().to_string();
    }
    if let Some(v) = patch.calories {
        m.calories = v;
    }
    if let Some(v) = patch.protein {
        m.protein = v;
    }
    if let Some(v) = patch.carbs {
        m.carbs = v;
    }
    if let Some(v) = patch.fat {
        m.fat = v;
    }
    if let Some(n) = patch.notes {
        let n = n.trim();
        m.notes = if n.is_empty() { None } else { Some(n.to_string()) };
    }
    m.validate()?;

    if !store.update_meal(id, &m)? {
        anyhow::bail!("meal not found: {}", id);
    }
    tracing::info!(id, "meal updated");
    Ok(m)
}

/// Remove a meal by id.
pub fn delete_meal(store: &mut impl Store, id: &str) -> Result<()> {
    if !store.delete_meal(id)? {
        anyhow::bail!("meal not found: {}", id);
    }
    tracing::info!(id, "meal deleted");
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct SlotSummary {
    pub meal_type: MealType,
    pub count: usize,
    pub calories: f64,
}

#[derive(Debug, Serialize)]
pub struct DayView {
    pub date: String,
    pub entries: Vec<MealEntry>,
    pub totals: DailyStats,
    pub slots: Vec<SlotSummary>,
}

/// Everything logged on one day, with totals and a per-slot breakdown.
pub fn day_view(meals: &[MealEntry], date: &str) -> DayView {
    let entries: Vec<MealEntry> = meals.iter().filter(|m| m.date == date).cloned().collect();

    let slots = MealType::ALL
        .iter()
        .filter_map(|&t| {
            let in_slot: Vec<&MealEntry> = entries.iter().filter(|m| m.meal_type == t).collect();
            if in_slot.is_empty() {
                None
            } else {
                Some(SlotSummary {
                    meal_type: t,
                    count: in_slot.len(),
                    calories: in_slot.iter().map(|m| m.calories).sum(),
                })
            }
        })
        .collect();

    DayView {
        date: date.to_string(),
        totals: daily_stats(meals, date),
        entries,
        slots,
    }
}
