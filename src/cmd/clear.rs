use anyhow::Result;
use serde_json::json;

use nutrilog::db::{Database, Store};
use nutrilog::models::config::Config;
use nutrilog::output;

pub fn run(yes: bool, human: bool) -> Result<()> {
    if !yes {
        anyhow::bail!("refusing to delete all data without --yes");
    }
    let mut db = Database::open(&Config::db_path()?)?;
    db.clear_all()?;

    if human {
        println!("All nutrition data cleared.");
    } else {
        let out = output::success("clear", json!({ "cleared": true }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}
