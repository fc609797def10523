use anyhow::Result;
use serde_json::json;

use nutrilog::core::targets;
use nutrilog::db::{Database, Store};
use nutrilog::models::config::Config;
use nutrilog::output;
use nutrilog::output::human;

pub fn run_show(human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path()?)?;
    let profile = db.load_profile()?;

    if human_flag {
        match profile {
            Some(ref p) => println!("{}", human::format_profile(p)),
            None => println!("No profile yet. Run `nutrilog init` to create one."),
        }
    } else {
        let out = output::success("profile", json!({ "profile": profile }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

pub fn run_targets(human_flag: bool) -> Result<()> {
    let db = Database::open(&Config::db_path()?)?;
    let profile = db
        .load_profile()?
        .ok_or_else(|| anyhow::anyhow!("no profile found, run `nutrilog init` first"))?;
    let t = targets::compute_targets(&profile);
    let bmr = (targets::bmr(&profile) * 10.0).round() / 10.0;

    if human_flag {
        println!("BMR: {} kcal", bmr);
        println!("Daily targets: {}", human::format_targets(&t));
    } else {
        let out = output::success("profile", json!({ "bmr": bmr, "targets": t }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
