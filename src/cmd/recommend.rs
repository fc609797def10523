use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use nutrilog::core::{analytics, recommend};
use nutrilog::db::{Database, Store};
use nutrilog::models::analytics::Period;
use nutrilog::models::config::Config;
use nutrilog::output;
use nutrilog::output::human;

pub fn run(period: Option<&str>, today: NaiveDate, human_flag: bool) -> Result<()> {
    let period: Period = period.unwrap_or("last_7_days").parse()?;
    let db = Database::open(&Config::db_path()?)?;
    let meals = db.list_meals()?;
    let profile = db.load_profile()?;

    let report = analytics::period_analytics(&meals, profile.as_ref(), period, today);
    let recs = recommend::recommendations(&report, profile.as_ref());

    if human_flag {
        println!("{}", human::format_recommendations(&recs));
    } else {
        let out = output::success(
            "recommend",
            json!({
                "period": period,
                "average_calories": report.average_calories,
                "trend": report.trend,
                "recommendations": recs,
            }),
        );
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
