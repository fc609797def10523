use anyhow::Result;
use serde_json::json;
use std::io::{self, Write};

use nutrilog::core::profile::{self, ProfileInput};
use nutrilog::db::Database;
use nutrilog::models::config::Config;
use nutrilog::models::profile::Goal;
use nutrilog::output;
use nutrilog::output::human;

pub struct InitArgs<'a> {
    pub skip: bool,
    pub age: Option<u32>,
    pub weight: Option<f64>,
    pub height: Option<f64>,
    pub goal: Option<&'a str>,
    pub diet: Option<&'a str>,
    pub allergies: Option<&'a str>,
    pub human: bool,
}

pub fn run(args: InitArgs) -> Result<()> {
    let config = Config::load().unwrap_or_default();
    config.save()?;

    if args.skip {
        if args.human {
            println!("Config initialized with defaults at {:?}", Config::path()?);
        } else {
            let out = output::success(
                "init",
                json!({ "config": Config::path()?.display().to_string(), "profile": null }),
            );
            println!("{}", serde_json::to_string(&out)?);
        }
        return Ok(());
    }

    // Flags drive a non-interactive intake; anything missing is prompted for.
    let interactive = args.age.is_none() || args.weight.is_none() || args.height.is_none();
    if interactive {
        println!("nutrilog: Profile Setup\n");
    }

    let age = match args.age {
        Some(a) => a,
        None => prompt_parse("Age (years)")?,
    };
    let weight = match args.weight {
        Some(w) => w,
        None => prompt_parse("Weight (kg)")?,
    };
    let height = match args.height {
        Some(h) => h,
        None => prompt_parse("Height (cm)")?,
    };
    let goal: Goal = match args.goal {
        Some(g) => g.parse()?,
        None if interactive => prompt_parse("Goal (reduce_weight/build_muscle/maintain)")?,
        None => Goal::Maintain,
    };
    let diet = match args.diet {
        Some(d) => d.to_string(),
        None if interactive => prompt_string("Dietary preference (or empty)")?,
        None => String::new(),
    };
    let allergies = match args.allergies {
        Some(a) => a.to_string(),
        None if interactive => prompt_string("Allergies (comma separated, or empty)")?,
        None => String::new(),
    };

    let mut db = Database::open(&Config::db_path()?)?;
    let p = profile::save_intake(
        &mut db,
        ProfileInput {
            age,
            weight,
            height,
            goal,
            dietary_preference: Some(&diet),
            allergies: Some(&allergies),
        },
    )?;

    if args.human {
        println!("Profile saved. Data stored in {:?}\n", Config::data_dir()?);
        println!("{}", human::format_profile(&p));
    } else {
        let out = output::success("init", json!({ "profile": p }));
        println!("{}", serde_json::to_string(&out)?);
    }
    Ok(())
}

fn prompt_string(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        anyhow::bail!("unexpected end of input while reading {}", label);
    }
    Ok(buf.trim().to_string())
}

fn prompt_parse<T: std::str::FromStr>(label: &str) -> Result<T> {
    loop {
        let s = prompt_string(label)?;
        match s.parse::<T>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("Please enter a valid value."),
        }
    }
}
