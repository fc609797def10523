pub mod analytics;
pub mod config;
pub mod meal;
pub mod profile;
pub mod recommendation;

pub use analytics::{DailyStats, Period, PeriodAnalytics, Trend};
pub use meal::{MealEntry, MealType};
pub use profile::{Goal, Targets, UserProfile};
pub use recommendation::{Category, Priority, Recommendation};
