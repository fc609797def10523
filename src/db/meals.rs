use anyhow::{Context, Result};
use rusqlite::params;

use crate::models::meal::MealEntry;

use super::Database;

struct MealRow {
    id: String,
    date: String,
    meal_type: String,
    name: String,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    notes: Option<String>,
}

fn row_to_meal(r: MealRow) -> Result<MealEntry> {
    Ok(MealEntry {
        meal_type: r.meal_type.parse()?,
        id: r.id,
        date: r.date,
        name: r.name,
        calories: r.calories,
        protein: r.protein,
        carbs: r.carbs,
        fat: r.fat,
        notes: r.notes,
    })
}

impl Database {
    pub fn insert_meal(&self, m: &MealEntry) -> Result<()> {
        self.conn.execute(
            "INSERT INTO meals (id, date, meal_type, name, calories, protein, carbs, fat, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            params![
                m.id,
                m.date,
                m.meal_type.to_string(),
                m.name,
                m.calories,
                m.protein,
                m.carbs,
                m.fat,
                m.notes,
            ],
        )?;
        tracing::debug!(id = %m.id, "meal row inserted");
        Ok(())
    }

    pub fn query_meals(&self) -> Result<Vec<MealEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, meal_type, name, calories, protein, carbs, fat, notes
             FROM meals ORDER BY seq",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(MealRow {
                id: row.get(0)?,
                date: row.get(1)?,
                meal_type: row.get(2)?,
                name: row.get(3)?,
                calories: row.get(4)?,
                protein: row.get(5)?,
                carbs: row.get(6)?,
                fat: row.get(7)?,
                notes: row.get(8)?,
            })
        })?;

        let mut meals = Vec::new();
        for row in rows {
            let r = row?;
            let id = r.id.clone();
            meals.push(
                row_to_meal(r).with_context(|| format!("unreadable meal row {id}"))?,
            );
        }
        Ok(meals)
    }

    /// Replace the earliest row with `id`.
    pub fn replace_meal(&self, id: &str, m: &MealEntry) -> Result<bool> {
        let changed = self.conn.execute(
            "UPDATE meals
             SET id = ?1, date = ?2, meal_type = ?3, name = ?4, calories = ?5,
                 protein = ?6, carbs = ?7, fat = ?8, notes = ?9
             WHERE seq = (SELECT MIN(seq) FROM meals WHERE id = ?10)",
            params![
                m.id,
                m.date,
                m.meal_type.to_string(),
                m.name,
                m.calories,
                m.protein,
                m.carbs,
                m.fat,
                m.notes,
                id,
            ],
        )?;
        Ok(changed > 0)
    }

    pub fn remove_meal(&self, id: &str) -> Result<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM meals WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }
}
