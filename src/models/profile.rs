use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    #[serde(alias = "lose_weight")]
    ReduceWeight,
    #[serde(alias = "gain_muscle")]
    BuildMuscle,
    Maintain,
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReduceWeight => write!(f, "reduce_weight"),
            Self::BuildMuscle => write!(f, "build_muscle"),
            Self::Maintain => write!(f, "maintain"),
        }
    }
}

impl FromStr for Goal {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "reduce_weight" | "lose_weight" => Ok(Self::ReduceWeight),
            "build_muscle" | "gain_muscle" => Ok(Self::BuildMuscle),
            "maintain" => Ok(Self::Maintain),
            _ => anyhow::bail!(
                "invalid goal: {} (expected reduce_weight/build_muscle/maintain)",
                s
            ),
        }
    }
}

/// Daily calorie and macro targets. Always computed together.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Targets {
    pub calories: u32,
    /// grams
    pub protein: u32,
    /// grams
    pub carbs: u32,
    /// grams
    pub fat: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub age: u32,
    /// kg
    pub weight: f64,
    /// cm
    pub height: f64,
    #[serde(default)]
    pub allergies: Vec<String>,
    pub goal: Goal,
    #[serde(default = "default_dietary_preference")]
    pub dietary_preference: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Targets>,
}

fn default_dietary_preference() -> String {
    "none".to_string()
}

impl UserProfile {
    pub fn new(age: u32, weight: f64, height: f64, goal: Goal) -> Self {
        Self {
            age,
            weight,
            height,
            allergies: Vec::new(),
            goal,
            dietary_preference: default_dietary_preference(),
            targets: None,
        }
    }

    pub fn target_calories(&self) -> Option<u32> {
        self.targets.map(|t| t.calories)
    }
}
