use std::path::Path;

use ingredient_knowledge::{
    PREDEFINED_GOALS, find_entry, ingredient_goals, lookup_benefit, recommended_ingredients,
};
use serde_json::{Value, json};
use skin_analysis::{
    AnalysisConfig, AnalysisError, AnalysisResult, Analyzer, UserContext, UserProfile,
    determine_climate, determine_season, extract_ingredient_section,
};
use tracing::debug;

use crate::cli::{Commands, Location};

pub const EXIT_INPUT: i32 = 1;
pub const EXIT_IO: i32 = 2;
pub const EXIT_NOT_FOUND: i32 = 3;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub command: String,
    pub kind: String,
    pub message: String,
}

impl CliError {
    pub fn analysis(cmd: &str, err: AnalysisError) -> Self {
        let (code, kind) = match &err {
            AnalysisError::ConfigRead { .. } | AnalysisError::Io(_) => (EXIT_IO, "IoError"),
            AnalysisError::ConfigParse { .. } => (EXIT_INPUT, "ConfigError"),
            AnalysisError::ContextParse(_) | AnalysisError::InvalidPriority(_) => {
                (EXIT_INPUT, "InputError")
            }
        };
        Self {
            code,
            command: cmd.to_string(),
            kind: kind.to_string(),
            message: err.to_string(),
        }
    }

    fn not_found(cmd: &str, message: String) -> Self {
        Self {
            code: EXIT_NOT_FOUND,
            command: cmd.to_string(),
            kind: "NotFound".to_string(),
            message,
        }
    }
}

/// Command output: structured data for `--json`, plain text otherwise.
pub struct Output {
    pub data: Value,
    pub text: String,
}

pub fn dispatch(command: Commands, config: AnalysisConfig) -> Result<Output, CliError> {
    let name = command.name();
    match command {
        Commands::Analyze {
            context,
            ingredients,
            label,
            location,
        } => {
            let mut ctx = UserContext::load(&context)
                .map_err(|e| CliError::analysis(name, e))?;
            fill_environment(&mut ctx.profile, &location);
            let text = match (ingredients, label) {
                (Some(text), _) => text,
                (None, Some(path)) => read_label(&path).map_err(|e| CliError::analysis(name, e))?,
                (None, None) => String::new(),
            };
            debug!(chars = text.len(), "ingredient text ready");
            let result = Analyzer::new(config).analyze(&text, &ctx);
            let mut data = serde_json::to_value(&result).unwrap_or(Value::Null);
            if let Value::Object(fields) = &mut data {
                fields.insert("profile".to_string(), json!(ctx.profile));
            }
            Ok(Output {
                data,
                text: render_analysis(&result),
            })
        }
        Commands::Lookup {
            ingredient,
            goal,
            skin_type,
        } => {
            let Some(entry) = find_entry(&ingredient) else {
                return Err(CliError::not_found(
                    name,
                    format!("unknown ingredient: {ingredient}"),
                ));
            };
            let goals = ingredient_goals(entry.name);
            let Some(benefit) = lookup_benefit(entry.name, &goal, skin_type) else {
                return Err(CliError::not_found(
                    name,
                    format!(
                        "{} has no listed benefit for {goal}; it is listed for: {}",
                        entry.name,
                        goals.join(", ")
                    ),
                ));
            };
            let skin_note = skin_type.map(|s| format!(" ({s} skin)")).unwrap_or_default();
            Ok(Output {
                data: json!({
                    "ingredient": entry.name,
                    "goal": goal,
                    "skin_type": skin_type,
                    "effectiveness": benefit.effectiveness,
                    "reason": benefit.reason,
                    "goals": goals,
                }),
                text: format!(
                    "{} for {goal}{skin_note}: {} ({})\nListed for: {}",
                    entry.name,
                    benefit.effectiveness,
                    benefit.reason,
                    goals.join(", ")
                ),
            })
        }
        Commands::Suggest { goal, exclude, limit } => {
            let picks = recommended_ingredients(&goal, &exclude)
                .into_iter()
                .take(limit)
                .collect::<Vec<_>>();
            let mut text = format!("[Suggestions for {goal}]");
            if picks.is_empty() {
                text.push_str("\nNo ingredients on file for this goal. Known goals: ");
                text.push_str(&PREDEFINED_GOALS.join(", "));
            }
            for (idx, pick) in picks.iter().enumerate() {
                text.push_str(&format!(
                    "\n{}. {} ({}) - {}",
                    idx + 1,
                    pick.ingredient,
                    pick.benefit.effectiveness,
                    pick.benefit.reason
                ));
            }
            Ok(Output {
                data: json!({ "goal": goal, "ingredients": picks }),
                text,
            })
        }
    }
}

fn read_label(path: &Path) -> skin_analysis::Result<String> {
    let raw = std::fs::read_to_string(path)?;
    Ok(extract_ingredient_section(&raw))
}

/// Derives season and climate from `location` for whichever of the two the
/// profile does not already state.
fn fill_environment(profile: &mut UserProfile, location: &Location) {
    let Some(latitude) = location.latitude else {
        return;
    };
    if let (None, Some(month)) = (profile.current_season, location.month) {
        profile.current_season = Some(determine_season(latitude, month.saturating_sub(1)));
    }
    if let (None, Some(temp), Some(code)) =
        (profile.climate_type, location.temp, location.weather_code)
    {
        profile.climate_type = Some(determine_climate(latitude, temp, code));
    }
}

fn render_analysis(result: &AnalysisResult) -> String {
    let mut out = format!(
        "Suitability: {}\nGoal score: {}\n{}\n{}",
        result.suitability_score,
        result.goal_score,
        result.explanation,
        result.suitability_explanation
    );
    for warning in &result.warnings {
        out.push_str(&format!("\n! {warning}"));
    }
    for highlight in &result.highlights {
        out.push_str(&format!("\n+ {highlight}"));
    }
    for category in &result.categories {
        out.push_str(&format!(
            "\n[{}] {}",
            category.name,
            category.ingredients.join(", ")
        ));
    }
    for ge in &result.goal_effectiveness {
        out.push_str(&format!("\n{} {}: {}", ge.priority, ge.goal, ge.score));
        if let Some(weight) = ge.weight {
            out.push_str(&format!(" (weight {:.0}%)", weight * 100.0));
        }
    }
    for rec in &result.recommendations {
        out.push_str(&format!("\n* {}: {}", rec.title, rec.description));
    }
    out
}
