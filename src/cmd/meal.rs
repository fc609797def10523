use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use nutrilog::core::meals::{self, MealInput, MealPatch};
use nutrilog::db::Database;
use nutrilog::models::config::Config;
use nutrilog::models::meal::MealType;
use nutrilog::output;
use nutrilog::output::human;

/// `macros` is calories, protein, carbs, fat.
pub fn run_add(
    meal_type: &str,
    name: &str,
    macros: [f64; 4],
    note: Option<&str>,
    date: NaiveDate,
    human_flag: bool,
) -> Result<()> {
    let mut db = Database::open(&Config::db_path()?)?;
    let meal_type: MealType = meal_type.parse()?;
    let [calories, protein, carbs, fat] = macros;
    let m = meals::add_meal(
        &mut db,
        MealInput {
            date,
            meal_type,
            name,
            calories,
            protein,
            carbs,
            fat,
            notes: note,
        },
    )?;

    if human_flag {
        println!("Added: {}", human::format_meal(&m));
    } else {
        let out = output::success("meal", json!({ "action": "add", "entry": m }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_edit(
    id: &str,
    day: Option<NaiveDate>,
    meal_type: Option<&str>,
    name: Option<&str>,
    macros: [Option<f64>; 4],
    note: Option<&str>,
    human_flag: bool,
) -> Result<()> {
    let mut db = Database::open(&Config::db_path()?)?;
    let meal_type = meal_type.map(str::parse::<MealType>).transpose()?;
    let [calories, protein, carbs, fat] = macros;
    let m = meals::edit_meal(
        &mut db,
        id,
        MealPatch {
            date: day,
            meal_type,
            name,
            calories,
            protein,
            carbs,
            fat,
            notes: note,
        },
    )?;

    if human_flag {
        println!("Updated: {}", human::format_meal(&m));
    } else {
        let out = output::success("meal", json!({ "action": "edit", "entry": m }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_delete(id: &str, human_flag: bool) -> Result<()> {
    let mut db = Database::open(&Config::db_path()?)?;
    meals::delete_meal(&mut db, id)?;

    if human_flag {
        println!("Deleted meal {}", id);
    } else {
        let out = output::success("meal", json!({ "action": "delete", "id": id }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
