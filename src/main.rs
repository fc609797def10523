mod cli;
mod cmd;

use chrono::Local;
use clap::Parser;
use cli::{Cli, Commands, ConfigAction, MealAction, ProfileAction};
use std::process;
use tracing_subscriber::EnvFilter;

use nutrilog::models::config::Config;
use nutrilog::output;

fn init_tracing() {
    // NUTRILOG_LOG wins over the config file; stdout stays reserved for JSON.
    let filter = EnvFilter::try_from_env("NUTRILOG_LOG").unwrap_or_else(|_| {
        let level = Config::load()
            .map(|c| c.logging.level)
            .unwrap_or_else(|_| "warn".to_string());
        EnvFilter::new(format!("nutrilog={}", level))
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn command_name(c: &Commands) -> &'static str {
    match c {
        Commands::Init { .. } => "init",
        Commands::Profile { .. } => "profile",
        Commands::Meal { .. } => "meal",
        Commands::Show { .. } => "show",
        Commands::Analytics { .. } => "analytics",
        Commands::Recommend { .. } => "recommend",
        Commands::Config { .. } => "config",
        Commands::Clear { .. } => "clear",
        Commands::Completions { .. } => "completions",
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing();

    let today = cli.date.unwrap_or_else(|| Local::now().date_naive());
    let human = cli.human;
    let name = command_name(&cli.command);
    tracing::debug!(command = name, %today, "starting");

    let result = match cli.command {
        Commands::Init {
            skip,
            age,
            weight,
            height,
            goal,
            diet,
            allergies,
        } => cmd::init::run(cmd::init::InitArgs {
            skip,
            age,
            weight,
            height,
            goal: goal.as_deref(),
            diet: diet.as_deref(),
            allergies: allergies.as_deref(),
            human,
        }),
        Commands::Profile { action } => match action {
            ProfileAction::Show => cmd::profile::run_show(human),
            ProfileAction::Targets => cmd::profile::run_targets(human),
        },
        Commands::Meal { action } => match action {
            MealAction::Add {
                meal_type,
                name,
                calories,
                protein,
                carbs,
                fat,
                note,
            } => cmd::meal::run_add(
                &meal_type,
                &name,
                [calories, protein, carbs, fat],
                note.as_deref(),
                today,
                human,
            ),
            MealAction::Edit {
                id,
                day,
                meal_type,
                name,
                calories,
                protein,
                carbs,
                fat,
                note,
            } => cmd::meal::run_edit(
                &id,
                day,
                meal_type.as_deref(),
                name.as_deref(),
                [calories, protein, carbs, fat],
                note.as_deref(),
                human,
            ),
            MealAction::Delete { id } => cmd::meal::run_delete(&id, human),
        },
        Commands::Show { day } => cmd::show::run(day.unwrap_or(today), human),
        Commands::Analytics { period } => cmd::analytics::run(period.as_deref(), today, human),
        Commands::Recommend { period } => cmd::recommend::run(period.as_deref(), today, human),
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd::config::run_show(human),
            ConfigAction::Set { key, value } => cmd::config::run_set(&key, &value),
        },
        Commands::Clear { yes } => cmd::clear::run(yes, human),
        Commands::Completions { shell } => cmd::completions::run(shell),
    };

    if let Err(e) = result {
        tracing::debug!(command = name, error = %e, "command failed");
        let err = output::error(name, "general_error", &e.to_string());
        eprintln!("{}", err);
        process::exit(1);
    }
}
