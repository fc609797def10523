use anyhow::Result;
use chrono::NaiveDate;

use nutrilog::core::analytics;
use nutrilog::db::{Database, Store};
use nutrilog::models::analytics::Period;
use nutrilog::models::config::Config;
use nutrilog::output;
use nutrilog::output::human;

pub fn run(period: Option<&str>, today: NaiveDate, human_flag: bool) -> Result<()> {
    let config = Config::load()?;
    let period: Period = match period {
        Some(p) => p.parse()?,
        None => config.analytics.default_period,
    };
    let db = Database::open(&Config::db_path()?)?;
    let meals = db.list_meals()?;
    let profile = db.load_profile()?;

    let result = analytics::period_analytics(&meals, profile.as_ref(), period, today);

    if human_flag {
        let targets = profile.as_ref().and_then(|p| p.targets);
        println!("{}", human::format_analytics(&result, targets.as_ref()));
    } else {
        let out = output::success("analytics", serde_json::to_value(&result)?);
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
