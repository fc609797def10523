use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Summed intake for one calendar day. Derived on demand, never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyStats {
    pub date: String,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
}

impl DailyStats {
    pub fn zero(date: &str) -> Self {
        Self {
            date: date.to_string(),
            total_calories: 0.0,
            total_protein: 0.0,
            total_carbs: 0.0,
            total_fat: 0.0,
        }
    }
}

/// Analytics window selector.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    #[serde(rename = "last_7_days")]
    Last7Days,
    #[serde(rename = "last_1_month")]
    Last1Month,
    #[serde(rename = "last_6_months")]
    Last6Months,
    #[serde(rename = "last_1_year")]
    Last1Year,
}

impl Period {
    /// Fixed day count of the window ending today (inclusive).
    pub fn days(self) -> u32 {
        match self {
            Self::Last7Days => 7,
            Self::Last1Month => 30,
            Self::Last6Months => 180,
            Self::Last1Year => 365,
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Last7Days => write!(f, "last_7_days"),
            Self::Last1Month => write!(f, "last_1_month"),
            Self::Last6Months => write!(f, "last_6_months"),
            Self::Last1Year => write!(f, "last_1_year"),
        }
    }
}

impl FromStr for Period {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "last_7_days" | "7days" | "week" => Ok(Self::Last7Days),
            "last_1_month" | "1month" | "month" => Ok(Self::Last1Month),
            "last_6_months" | "6months" => Ok(Self::Last6Months),
            "last_1_year" | "1year" | "year" => Ok(Self::Last1Year),
            _ => anyhow::bail!(
                "invalid period: {} (expected last_7_days/last_1_month/last_6_months/last_1_year)",
                s
            ),
        }
    }
}

/// Average intake relative to the profile's calorie target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Above,
    Below,
    OnTarget,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Above => write!(f, "above"),
            Self::Below => write!(f, "below"),
            Self::OnTarget => write!(f, "on_target"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodAnalytics {
    pub period: Period,
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub average_calories: i64,
    pub average_protein: i64,
    pub average_carbs: i64,
    pub average_fat: i64,
    pub trend: Trend,
    /// One entry per window day, oldest first.
    pub daily_stats: Vec<DailyStats>,
}

impl PeriodAnalytics {
    /// Window days with at least one logged calorie, oldest first.
    pub fn logged_days(&self) -> impl Iterator<Item = &DailyStats> {
        self.daily_stats.iter().filter(|d| d.total_calories > 0.0)
    }
}
