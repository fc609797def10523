mod common;

use common::{day, make_meal, sample_profile, setup_db};
use nutrilog::core::analytics::weekly_analytics;
use nutrilog::core::stats::daily_stats;
use nutrilog::db::{Database, MemoryStore, Store};
use nutrilog::models::meal::MealType;
use nutrilog::models::analytics::Trend;
use nutrilog::models::profile::{Goal, UserProfile};
use rusqlite::{Connection, params};

/// Every store implementation must behave the same way.
fn exercise_store(store: &mut impl Store) {
    assert!(store.load_profile().unwrap().is_none());
    assert!(store.list_meals().unwrap().is_empty());

    let mut profile = sample_profile(Goal::BuildMuscle);
    profile.allergies = vec!["peanuts".into(), "shellfish".into()];
    profile.dietary_preference = "pescatarian".into();
    store.save_profile(&profile).unwrap();
    assert_eq!(store.load_profile().unwrap(), Some(profile));

    let a = make_meal("2024-01-01", 500.0, 30.0, 50.0, 10.0);
    let mut b = make_meal("2024-01-02", 300.0, 20.0, 25.0, 8.0);
    b.notes = Some("leftovers".into());
    let c = make_meal("2024-01-01", 200.0, 5.0, 30.0, 2.0);
    for m in [&a, &b, &c] {
        store.add_meal(m).unwrap();
    }

    let listed = store.list_meals().unwrap();
    assert_eq!(listed, vec![a.clone(), b.clone(), c.clone()]);

    let mut replacement = b.clone();
    replacement.name = "Soup".into();
    replacement.meal_type = MealType::Dinner;
    assert!(store.update_meal(&b.id, &replacement).unwrap());
    assert!(!store.update_meal("missing", &replacement).unwrap());

    let listed = store.list_meals().unwrap();
    assert_eq!(listed[1], replacement);
    assert_eq!(listed.len(), 3);

    assert!(store.delete_meal(&a.id).unwrap());
    assert!(!store.delete_meal(&a.id).unwrap());
    let listed = store.list_meals().unwrap();
    assert_eq!(listed, vec![replacement, c]);

    store.clear_all().unwrap();
    assert!(store.load_profile().unwrap().is_none());
    assert!(store.list_meals().unwrap().is_empty());
}

#[test]
fn test_sqlite_store_contract() {
    let (_dir, mut db) = setup_db();
    exercise_store(&mut db);
}

#[test]
fn test_in_memory_sqlite_store_contract() {
    let mut db = Database::open_in_memory().unwrap();
    exercise_store(&mut db);
}

#[test]
fn test_memory_store_contract() {
    let mut store = MemoryStore::new();
    exercise_store(&mut store);
}

#[test]
fn test_profile_without_targets_persists_as_none() {
    let (_dir, mut db) = setup_db();
    let p = UserProfile::new(30, 60.0, 165.0, Goal::Maintain);
    db.save_profile(&p).unwrap();
    assert_eq!(db.load_profile().unwrap().unwrap().targets, None);
}

#[test]
fn test_data_survives_reopen() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("nested").join("data.db");
    let meal = make_meal("2024-01-01", 500.0, 30.0, 50.0, 10.0);
    {
        let mut db = Database::open(&path).unwrap();
        db.add_meal(&meal).unwrap();
    }
    let db = Database::open(&path).unwrap();
    assert_eq!(db.list_meals().unwrap(), vec![meal]);
}

#[cfg(unix)]
#[test]
fn test_database_file_is_private() {
    use std::os::unix::fs::PermissionsExt;
    let (dir, _db) = setup_db();
    let mode = std::fs::metadata(dir.path().join("test.db"))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn test_memory_store_with_data() {
    let meal = make_meal("2024-01-01", 500.0, 30.0, 50.0, 10.0);
    let store = MemoryStore::with_data(Some(sample_profile(Goal::Maintain)), vec![meal.clone()]);
    assert_eq!(store.list_meals().unwrap(), vec![meal]);
    assert!(store.load_profile().unwrap().is_some());
}

#[test]
fn test_unreadable_meal_row_fails_the_read() {
    let (dir, mut db) = setup_db();
    let a = make_meal("2024-01-07", 700.0, 40.0, 80.0, 20.0);
    let b = make_meal("2024-01-07", 700.0, 40.0, 80.0, 20.0);
    db.add_meal(&a).unwrap();
    db.add_meal(&b).unwrap();
    assert_eq!(daily_stats(&db.list_meals().unwrap(), "2024-01-07").total_calories, 1400.0);

    let conn = Connection::open(dir.path().join("test.db")).unwrap();
    conn.execute(
        "UPDATE meals SET meal_type = 'brunch' WHERE id = ?1",
        params![b.id],
    )
    .unwrap();

    let err = db.list_meals().unwrap_err();
    assert!(format!("{err:#}").contains(&b.id));
}

#[test]
fn test_partial_targets_in_storage_read_as_absent() {
    let (dir, mut db) = setup_db();
    db.save_profile(&UserProfile::new(25, 70.0, 170.0, Goal::Maintain))
        .unwrap();

    let conn = Connection::open(dir.path().join("test.db")).unwrap();
    conn.execute("UPDATE profile SET target_calories = 2000 WHERE id = 1", [])
        .unwrap();

    let profile = db.load_profile().unwrap().unwrap();
    assert_eq!(profile.targets, None);

    // Far above 2000 kcal, but with no complete target set there is no judgment.
    let meals = vec![make_meal("2024-01-07", 30000.0, 0.0, 0.0, 0.0)];
    let a = weekly_analytics(&meals, Some(&profile), day(2024, 1, 7));
    assert_eq!(a.average_calories, 4286);
    assert_eq!(a.trend, Trend::OnTarget);
}
