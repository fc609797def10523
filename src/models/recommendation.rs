use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Nutrition,
    Balance,
    Timing,
    Hydration,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nutrition => write!(f, "nutrition"),
            Self::Balance => write!(f, "balance"),
            Self::Timing => write!(f, "timing"),
            Self::Hydration => write!(f, "hydration"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
}

impl Recommendation {
    pub fn new(
        id: &str,
        title: &str,
        description: String,
        category: Category,
        priority: Priority,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description,
            category,
            priority,
        }
    }
}
