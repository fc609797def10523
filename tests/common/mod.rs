#![allow(dead_code)]

use chrono::NaiveDate;
use nutrilog::db::Database;
use nutrilog::models::meal::{MealEntry, MealType};
use nutrilog::models::profile::{Goal, UserProfile};
use tempfile::TempDir;

/// Create a temporary database for testing.
pub fn setup_db() -> (TempDir, Database) {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).unwrap();
    (dir, db)
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A lunch entry on `date` with the given calories and macros.
pub fn make_meal(date: &str, calories: f64, protein: f64, carbs: f64, fat: f64) -> MealEntry {
    let mut m = MealEntry::new(
        NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        MealType::Lunch,
        "Test meal".to_string(),
        calories,
    );
    m.protein = protein;
    m.carbs = carbs;
    m.fat = fat;
    m
}

/// 25 y/o, 70 kg, 170 cm; targets 2464 kcal / 185 P / 246 C / 82 F when maintaining.
pub fn sample_profile(goal: Goal) -> UserProfile {
    let mut p = UserProfile::new(25, 70.0, 170.0, goal);
    p.targets = Some(nutrilog::core::targets::compute_targets(&p));
    p
}
