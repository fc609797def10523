use colored::{ColoredString, Colorize};
use comfy_table::Table;

use crate::core::meals::DayView;
use crate::core::profile::{DailyProgress, MacroProgress};
use crate::models::analytics::{PeriodAnalytics, Trend};
use crate::models::meal::MealEntry;
use crate::models::profile::{Targets, UserProfile};
use crate::models::recommendation::{Priority, Recommendation};

/// Pretty-print a single meal entry.
pub fn format_meal(m: &MealEntry) -> String {
    let mut line = format!(
        "{} | {:9} | {} = {} kcal (P {}g  C {}g  F {}g)",
        m.date,
        m.meal_type.to_string(),
        m.name,
        m.calories,
        m.protein,
        m.carbs,
        m.fat
    );
    if let Some(ref note) = m.notes {
        line.push_str(&format!("  # {}", note));
    }
    line.push_str(&format!("  [{}]", m.id));
    line
}

pub fn format_targets(t: &Targets) -> String {
    format!(
        "{} kcal | protein {}g | carbs {}g | fat {}g",
        t.calories, t.protein, t.carbs, t.fat
    )
}

pub fn format_profile(p: &UserProfile) -> String {
    let mut out = format!(
        "Age: {} | Weight: {} kg | Height: {} cm\nGoal: {} | Diet: {}",
        p.age, p.weight, p.height, p.goal, p.dietary_preference
    );
    if !p.allergies.is_empty() {
        out.push_str(&format!("\nAllergies: {}", p.allergies.join(", ")));
    }
    match p.targets {
        Some(ref t) => out.push_str(&format!("\nDaily targets: {}", format_targets(t))),
        None => out.push_str("\nDaily targets: not set"),
    }
    out
}

fn format_macro(label: &str, p: &MacroProgress, unit: &str) -> String {
    format!(
        "  {:8} {:>7.0} / {}{} ({:.1}%)",
        label, p.consumed, p.target, unit, p.percent
    )
}

/// The meals logged on one day plus totals and target progress.
pub fn format_day(view: &DayView, progress: Option<&DailyProgress>) -> String {
    let mut out = format!("--- {} ---\n", view.date);
    if view.entries.is_empty() {
        out.push_str("No meals logged.");
        return out;
    }
    for m in &view.entries {
        out.push_str(&format_meal(m));
        out.push('\n');
    }
    let t = &view.totals;
    out.push_str(&format!(
        "\nTotal: {} kcal | protein {}g | carbs {}g | fat {}g",
        t.total_calories, t.total_protein, t.total_carbs, t.total_fat
    ));
    if let Some(p) = progress {
        out.push_str("\n\nProgress:\n");
        out.push_str(&format_macro("calories", &p.calories, " kcal"));
        out.push('\n');
        out.push_str(&format_macro("protein", &p.protein, "g"));
        out.push('\n');
        out.push_str(&format_macro("carbs", &p.carbs, "g"));
        out.push('\n');
        out.push_str(&format_macro("fat", &p.fat, "g"));
    }
    out
}

pub fn format_trend(trend: Trend) -> ColoredString {
    match trend {
        Trend::Above => "above target".red(),
        Trend::Below => "below target".yellow(),
        Trend::OnTarget => "on target".green(),
    }
}

/// Averages, trend and a table of the days that have entries.
pub fn format_analytics(a: &PeriodAnalytics, targets: Option<&Targets>) -> String {
    let mut out = format!("=== Nutrition Analytics: {} to {} ===\n\n", a.from, a.to);

    let target_suffix = |v: Option<u32>, unit: &str| match v {
        Some(v) => format!("  (target {}{})", v, unit),
        None => String::new(),
    };
    out.push_str(&format!(
        "  Avg calories: {}{}\n",
        a.average_calories,
        target_suffix(targets.map(|t| t.calories), " kcal")
    ));
    out.push_str(&format!(
        "  Avg protein:  {}g{}\n",
        a.average_protein,
        target_suffix(targets.map(|t| t.protein), "g")
    ));
    out.push_str(&format!(
        "  Avg carbs:    {}g{}\n",
        a.average_carbs,
        target_suffix(targets.map(|t| t.carbs), "g")
    ));
    out.push_str(&format!(
        "  Avg fat:      {}g{}\n",
        a.average_fat,
        target_suffix(targets.map(|t| t.fat), "g")
    ));
    if targets.is_some() {
        out.push_str(&format!("  Trend: {}\n", format_trend(a.trend)));
    }

    let logged: Vec<_> = a.logged_days().collect();
    if logged.is_empty() {
        out.push_str("\n  No meals logged in this period.");
        return out;
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Calories", "Protein (g)", "Carbs (g)", "Fat (g)"]);
    for d in logged {
        table.add_row(vec![
            d.date.clone(),
            format!("{:.0}", d.total_calories),
            format!("{:.0}", d.total_protein),
            format!("{:.0}", d.total_carbs),
            format!("{:.0}", d.total_fat),
        ]);
    }
    out.push('\n');
    out.push_str(&table.to_string());
    out
}

fn format_priority(p: Priority) -> ColoredString {
    match p {
        Priority::High => "HIGH".red().bold(),
        Priority::Medium => "MEDIUM".yellow(),
        Priority::Low => "LOW".normal(),
    }
}

pub fn format_recommendations(recs: &[Recommendation]) -> String {
    if recs.is_empty() {
        return "No recommendations yet. Run `nutrilog init` to set up your profile.".to_string();
    }
    recs.iter()
        .enumerate()
        .map(|(i, r)| {
            format!(
                "{}. [{}] {} ({})\n   {}",
                i + 1,
                format_priority(r.priority),
                r.title,
                r.category,
                r.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
