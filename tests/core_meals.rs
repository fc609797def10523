mod common;

use common::{day, make_meal, setup_db};
use nutrilog::core::meals::{self, MealInput, MealPatch};
use nutrilog::db::{MemoryStore, Store};
use nutrilog::models::meal::MealType;

fn input(name: &str, calories: f64) -> MealInput<'_> {
    MealInput {
        date: day(2024, 2, 10),
        meal_type: MealType::Breakfast,
        name,
        calories,
        protein: 20.0,
        carbs: 45.0,
        fat: 12.0,
        notes: Some("  with berries "),
    }
}

// ── new_meal / add_meal ─────────────────────────────────────────────────────

#[test]
fn test_new_meal_fills_fields() {
    let m = meals::new_meal(input("  Oatmeal ", 380.0)).unwrap();
    assert_eq!(m.date, "2024-02-10");
    assert_eq!(m.meal_type, MealType::Breakfast);
    assert_eq!(m.name, "Oatmeal");
    assert_eq!(m.notes.as_deref(), Some("with berries"));
    assert_eq!(m.id.len(), 36);
}

#[test]
fn test_new_meal_ids_are_unique() {
    let a = meals::new_meal(input("Oatmeal", 380.0)).unwrap();
    let b = meals::new_meal(input("Oatmeal", 380.0)).unwrap();
    assert_ne!(a.id, b.id);
}

#[test]
fn test_new_meal_requires_name() {
    let err = meals::new_meal(input("   ", 380.0)).unwrap_err();
    assert!(err.to_string().contains("name"));
}

#[test]
fn test_new_meal_requires_calories() {
    let err = meals::new_meal(input("Water", 0.0)).unwrap_err();
    assert!(err.to_string().contains("calories"));
}

#[test]
fn test_new_meal_rejects_negative_macros() {
    let mut i = input("Oatmeal", 380.0);
    i.fat = -1.0;
    let err = meals::new_meal(i).unwrap_err();
    assert!(err.to_string().contains("fat"));
}

#[test]
fn test_add_meal_stores_entry() {
    let mut store = MemoryStore::new();
    let m = meals::add_meal(&mut store, input("Oatmeal", 380.0)).unwrap();
    let all = store.list_meals().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], m);
}

#[test]
fn test_add_meal_invalid_is_not_stored() {
    let mut store = MemoryStore::new();
    assert!(meals::add_meal(&mut store, input("", 380.0)).is_err());
    assert!(store.list_meals().unwrap().is_empty());
}

// ── edit_meal ───────────────────────────────────────────────────────────────

#[test]
fn test_edit_meal_patches_fields() {
    let mut store = MemoryStore::new();
    let m = meals::add_meal(&mut store, input("Oatmeal", 380.0)).unwrap();

    let updated = meals::edit_meal(
        &mut store,
        &m.id,
        MealPatch {
            calories: Some(420.0),
            meal_type: Some(MealType::Snack),
            date: Some(day(2024, 2, 11)),
            notes: Some(""),
            ..Default::default()
        },
    )
    .unwrap();

    assert_eq!(updated.id, m.id);
    assert_eq!(updated.calories, 420.0);
    assert_eq!(updated.meal_type, MealType::Snack);
    assert_eq!(updated.date, "2024-02-11");
    assert_eq!(updated.notes, None);
    assert_eq!(updated.protein, 20.0);
    assert_eq!(store.list_meals().unwrap()[0], updated);
}

#[test]
fn test_edit_meal_unknown_id() {
    let mut store = MemoryStore::new();
    let err = meals::edit_meal(&mut store, "nope", MealPatch::default()).unwrap_err();
    assert!(err.to_string().contains("meal not found"));
}

#[test]
fn test_edit_meal_validation_keeps_original() {
    let mut store = MemoryStore::new();
    let m = meals::add_meal(&mut store, input("Oatmeal", 380.0)).unwrap();
    let patch = MealPatch {
        name: Some(" "),
        ..Default::default()
    };
    assert!(meals::edit_meal(&mut store, &m.id, patch).is_err());
    assert_eq!(store.list_meals().unwrap()[0].name, "Oatmeal");
}

#[test]
fn test_edit_meal_on_sqlite() {
    let (_dir, mut db) = setup_db();
    let m = meals::add_meal(&mut db, input("Oatmeal", 380.0)).unwrap();
    let patch = MealPatch {
        name: Some("Porridge"),
        ..Default::default()
    };
    meals::edit_meal(&mut db, &m.id, patch).unwrap();
    let all = db.list_meals().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Porridge");
}

// ── delete_meal ─────────────────────────────────────────────────────────────

#[test]
fn test_delete_meal() {
    let mut store = MemoryStore::new();
    let a = meals::add_meal(&mut store, input("Oatmeal", 380.0)).unwrap();
    let b = meals::add_meal(&mut store, input("Toast", 200.0)).unwrap();
    meals::delete_meal(&mut store, &a.id).unwrap();
    let all = store.list_meals().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, b.id);
}

#[test]
fn test_delete_meal_unknown_id() {
    let mut store = MemoryStore::new();
    assert!(meals::delete_meal(&mut store, "missing").is_err());
}

// ── day_view ────────────────────────────────────────────────────────────────

#[test]
fn test_day_view_groups_slots() {
    let mut breakfast = make_meal("2024-02-10", 300.0, 10.0, 40.0, 5.0);
    breakfast.meal_type = MealType::Breakfast;
    let lunch_a = make_meal("2024-02-10", 500.0, 30.0, 50.0, 15.0);
    let lunch_b = make_meal("2024-02-10", 150.0, 5.0, 20.0, 3.0);
    let other_day = make_meal("2024-02-11", 900.0, 0.0, 0.0, 0.0);
    let all = vec![breakfast, lunch_a, other_day, lunch_b];

    let view = meals::day_view(&all, "2024-02-10");
    assert_eq!(view.entries.len(), 3);
    assert_eq!(view.totals.total_calories, 950.0);
    assert_eq!(view.slots.len(), 2);
    assert_eq!(view.slots[0].meal_type, MealType::Breakfast);
    assert_eq!(view.slots[1].meal_type, MealType::Lunch);
    assert_eq!(view.slots[1].count, 2);
    assert_eq!(view.slots[1].calories, 650.0);
}

#[test]
fn test_day_view_empty() {
    let view = meals::day_view(&[], "2024-02-10");
    assert!(view.entries.is_empty());
    assert!(view.slots.is_empty());
    assert_eq!(view.totals.total_calories, 0.0);
}
