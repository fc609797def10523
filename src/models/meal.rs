use anyhow::Result;
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub const ALL: [MealType; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];
}

impl std::fmt::Display for MealType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Breakfast => write!(f, "breakfast"),
            Self::Lunch => write!(f, "lunch"),
            Self::Dinner => write!(f, "dinner"),
            Self::Snack => write!(f, "snack"),
        }
    }
}

impl FromStr for MealType {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" => Ok(Self::Snack),
            _ => anyhow::bail!(
                "invalid meal type: {} (expected breakfast/lunch/dinner/snack)",
                s
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealEntry {
    pub id: String,
    /// Calendar day, `YYYY-MM-DD`.
    pub date: String,
    pub meal_type: MealType,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl MealEntry {
    pub fn new(date: NaiveDate, meal_type: MealType, name: String, calories: f64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date: date.format("%Y-%m-%d").to_string(),
            meal_type,
            name,
            calories,
            protein: 0.0,
            carbs: 0.0,
            fat: 0.0,
            notes: None,
        }
    }

    /// Basic presence checks applied before an entry is written.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("meal name is required");
        }
        if self.calories == 0.0 {
            anyhow::bail!("meal calories are required");
        }
        for (label, v) in [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
        ] {
            if !v.is_finite() || v < 0.0 {
                anyhow::bail!("{} must be a non-negative number", label);
            }
        }
        let re = Regex::new(r"^\d{4}-\d{2}-\d{2}$")?;
        if !re.is_match(&self.date)
            || NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").is_err()
        {
            anyhow::bail!("invalid date: {} (expected YYYY-MM-DD)", self.date);
        }
        Ok(())
    }
}
