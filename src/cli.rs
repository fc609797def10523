use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser)]
#[command(name = "nutrilog", version, about = "Agent-native nutrition tracking CLI")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable text instead of JSON
    #[arg(long = "human", short = 'H', global = true)]
    pub human: bool,

    /// Override today's date (YYYY-MM-DD)
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize config and set up your profile
    Init {
        /// Only write default config, skip the profile intake
        #[arg(long)]
        skip: bool,

        /// Age in years
        #[arg(long)]
        age: Option<u32>,

        /// Weight in kg
        #[arg(long)]
        weight: Option<f64>,

        /// Height in cm
        #[arg(long)]
        height: Option<f64>,

        /// reduce_weight, build_muscle or maintain
        #[arg(long)]
        goal: Option<String>,

        /// Dietary preference (e.g. vegetarian)
        #[arg(long)]
        diet: Option<String>,

        /// Comma-separated allergies
        #[arg(long)]
        allergies: Option<String>,
    },

    /// Show or recompute the profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Add, edit or delete meals
    Meal {
        #[command(subcommand)]
        action: MealAction,
    },

    /// Show meals and totals for a day
    Show {
        /// Day to show (default: today)
        day: Option<NaiveDate>,
    },

    /// Averages and trend over a period
    Analytics {
        /// last_7_days, last_1_month, last_6_months or last_1_year
        #[arg(long)]
        period: Option<String>,
    },

    /// Personalized recommendations
    Recommend {
        /// Period the recommendations are based on (default: last_7_days)
        #[arg(long)]
        period: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Delete the profile and all meals
    Clear {
        /// Confirm deletion
        #[arg(long)]
        yes: bool,
    },

    /// Generate shell completions
    Completions {
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the stored profile
    Show,
    /// Recompute targets from the stored profile without saving
    Targets,
}

#[derive(Subcommand)]
pub enum MealAction {
    /// Log a meal (uses --date for the day, default today)
    Add {
        /// breakfast, lunch, dinner or snack
        meal_type: String,

        /// Meal name
        name: String,

        /// Calories (kcal)
        #[arg(long)]
        calories: f64,

        /// Protein (g)
        #[arg(long, default_value_t = 0.0)]
        protein: f64,

        /// Carbohydrates (g)
        #[arg(long, default_value_t = 0.0)]
        carbs: f64,

        /// Fat (g)
        #[arg(long, default_value_t = 0.0)]
        fat: f64,

        /// Free-text note
        #[arg(long)]
        note: Option<String>,
    },

    /// Replace fields of an existing meal
    Edit {
        /// Meal ID
        id: String,

        /// Move the meal to this day
        #[arg(long = "day")]
        day: Option<NaiveDate>,

        #[arg(long = "type")]
        meal_type: Option<String>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        calories: Option<f64>,

        #[arg(long)]
        protein: Option<f64>,

        #[arg(long)]
        carbs: Option<f64>,

        #[arg(long)]
        fat: Option<f64>,

        /// Replace the note (empty string clears it)
        #[arg(long)]
        note: Option<String>,
    },

    /// Delete a meal
    Delete {
        /// Meal ID
        id: String,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a config value
    Set {
        /// Config key (default_period, log_level)
        key: String,
        /// Config value
        value: String,
    },
}
