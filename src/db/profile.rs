use anyhow::Result;
use rusqlite::{OptionalExtension, params};

use crate::models::profile::{Targets, UserProfile};

use super::Database;

struct ProfileRow {
    age: u32,
    weight: f64,
    height: f64,
    allergies: Option<String>,
    goal: String,
    dietary_preference: String,
    target_calories: Option<u32>,
    target_protein: Option<u32>,
    target_carbs: Option<u32>,
    target_fat: Option<u32>,
}

fn row_to_profile(r: ProfileRow) -> Result<UserProfile> {
    let allergies: Vec<String> = match r.allergies {
        Some(ref a) => serde_json::from_str(a).unwrap_or_default(),
        None => Vec::new(),
    };
    // Targets are written together; a partial set is treated as absent.
    let targets = match (
        r.target_calories,
        r.target_protein,
        r.target_carbs,
        r.target_fat,
    ) {
        (Some(calories), Some(protein), Some(carbs), Some(fat)) => Some(Targets {
            calories,
            protein,
            carbs,
            fat,
        }),
        _ => None,
    };
    Ok(UserProfile {
        age: r.age,
        weight: r.weight,
        height: r.height,
        allergies,
        goal: r.goal.parse()?,
        dietary_preference: r.dietary_preference,
        targets,
    })
}

impl Database {
    pub fn get_profile(&self) -> Result<Option<UserProfile>> {
        let row = self
            .conn
            .query_row(
                "SELECT age, weight, height, allergies, goal, dietary_preference,
                        target_calories, target_protein, target_carbs, target_fat
                 FROM profile WHERE id = 1",
                [],
                |row| {
                    Ok(ProfileRow {
                        age: row.get(0)?,
                        weight: row.get(1)?,
                        height: row.get(2)?,
                        allergies: row.get(3)?,
                        goal: row.get(4)?,
                        dietary_preference: row.get(5)?,
                        target_calories: row.get(6)?,
                        target_protein: row.get(7)?,
                        target_carbs: row.get(8)?,
                        target_fat: row.get(9)?,
                    })
                },
            )
            .optional()?;
        row.map(row_to_profile).transpose()
    }

    pub fn put_profile(&self, p: &UserProfile) -> Result<()> {
        let allergies_json = if p.allergies.is_empty() {
            None
        } else {
            Some(serde_json::to_string(&p.allergies)?)
        };
        let t = p.targets;
        self.conn.execute(
            "INSERT OR REPLACE INTO profile
             (id, age, weight, height, allergies, goal, dietary_preference,
              target_calories, target_protein, target_carbs, target_fat)
             VALUES (1, ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                p.age,
                p.weight,
                p.height,
                allergies_json,
                p.goal.to_string(),
                p.dietary_preference,
                t.map(|t| t.calories),
                t.map(|t| t.protein),
                t.map(|t| t.carbs),
                t.map(|t| t.fat),
            ],
        )?;
        tracing::debug!("profile row written");
        Ok(())
    }
}
