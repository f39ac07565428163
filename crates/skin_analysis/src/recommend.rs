use ingredient_knowledge::recommended_ingredients;
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::context::{Priority, UserGoal};
use crate::goals::GoalEffectiveness;
use crate::ingredients::IngredientList;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Great,
    Consider,
    Missing,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
    pub ingredients: Vec<String>,
}

/// Suggestions derived from the goal breakdown. Each rule fires on its own;
/// nothing is produced without declared goals.
pub fn recommend(
    list: &IngredientList,
    goals: &[UserGoal],
    effectiveness: &[GoalEffectiveness],
    config: &AnalysisConfig,
) -> Vec<Recommendation> {
    let Some(first_goal) = goals.first() else {
        return Vec::new();
    };

    let mut out = Vec::new();
    out.extend(great_ingredients(first_goal, effectiveness, config));
    out.extend(consider_pairing(first_goal, list, config));
    out.extend(missing_for_primary(effectiveness, list, config));
    out
}

fn great_ingredients(
    first_goal: &UserGoal,
    effectiveness: &[GoalEffectiveness],
    config: &AnalysisConfig,
) -> Option<Recommendation> {
    let names = effectiveness
        .iter()
        .flat_map(|ge| ge.matching_ingredients.iter())
        .filter(|m| m.effectiveness >= config.great_threshold)
        .take(config.max_great)
        .map(|m| m.name.clone())
        .collect::<Vec<_>>();
    if names.is_empty() {
        return None;
    }

    Some(Recommendation {
        kind: RecommendationKind::Great,
        title: "Excellent Ingredients Found".to_string(),
        description: format!(
            "Your product contains {} - highly effective for {}!",
            names.join(", "),
            first_goal.goal_name
        ),
        ingredients: names,
    })
}

fn consider_pairing(
    first_goal: &UserGoal,
    list: &IngredientList,
    config: &AnalysisConfig,
) -> Option<Recommendation> {
    let picks = recommended_ingredients(&first_goal.goal_name, list.tokens())
        .into_iter()
        .take(config.max_consider)
        .collect::<Vec<_>>();
    if picks.is_empty() {
        return None;
    }

    let listed = picks
        .iter()
        .map(|r| format!("{} ({})", r.ingredient, r.benefit.reason))
        .collect::<Vec<_>>()
        .join("; ");
    Some(Recommendation {
        kind: RecommendationKind::Consider,
        title: "Consider Pairing With".to_string(),
        description: format!(
            "For maximum {} results, look for products with: {listed}",
            first_goal.goal_name.to_lowercase()
        ),
        ingredients: picks.iter().map(|r| r.ingredient.to_string()).collect(),
    })
}

fn missing_for_primary(
    effectiveness: &[GoalEffectiveness],
    list: &IngredientList,
    config: &AnalysisConfig,
) -> Option<Recommendation> {
    let primary = effectiveness.iter().find(|ge| ge.priority == Priority::PRIMARY)?;
    if primary.score >= config.missing_threshold {
        return None;
    }

    let names = recommended_ingredients(&primary.goal, list.tokens())
        .into_iter()
        .take(config.max_missing)
        .map(|r| r.ingredient.to_string())
        .collect::<Vec<_>>();
    if names.is_empty() {
        return None;
    }

    Some(Recommendation {
        kind: RecommendationKind::Missing,
        title: "Missing Key Ingredients".to_string(),
        description: format!(
            "For better {} results, this product would benefit from: {}",
            primary.goal.to_lowercase(),
            names.join(" or ")
        ),
        ingredients: names,
    })
}
