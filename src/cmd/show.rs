use anyhow::Result;
use chrono::NaiveDate;
use serde_json::json;

use nutrilog::core::{meals, profile};
use nutrilog::db::{Database, Store};
use nutrilog::models::config::Config;
use nutrilog::output;
use nutrilog::output::human;

pub fn run(day: NaiveDate, human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path()?)?;
    let all = db.list_meals()?;
    let user = db.load_profile()?;

    let view = meals::day_view(&all, &day.format("%Y-%m-%d").to_string());
    let progress = user
        .as_ref()
        .and_then(|p| profile::progress(p, &view.totals));

    if human_flag {
        println!("{}", human::format_day(&view, progress.as_ref()));
    } else {
        let out = output::success("show", json!({ "day": view, "progress": progress }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
