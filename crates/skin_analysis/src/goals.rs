use ingredient_knowledge::{SkinType, lookup_benefit};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::context::{Priority, UserGoal};
use crate::ingredients::IngredientList;
use crate::score::{mean, round_score};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingIngredient {
    pub name: String,
    pub effectiveness: u8,
    pub reason: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GoalEffectiveness {
    pub goal: String,
    pub priority: Priority,
    pub score: u8,
    /// Share of the holistic score this goal's tier carries; `None` outside
    /// priority mode.
    pub weight: Option<f64>,
    pub matching_ingredients: Vec<MatchingIngredient>,
}

/// Mean skin-adjusted effectiveness of the label's known ingredients for one
/// goal; 0 when nothing on the label is known to serve it.
pub fn effectiveness_for(
    goal: &UserGoal,
    list: &IngredientList,
    skin: Option<SkinType>,
) -> GoalEffectiveness {
    let matching_ingredients = list
        .iter()
        .filter_map(|token| {
            lookup_benefit(token, &goal.goal_name, skin).map(|b| MatchingIngredient {
                name: token.to_string(),
                effectiveness: b.effectiveness,
                reason: b.reason.to_string(),
            })
        })
        .collect::<Vec<_>>();

    let score = mean(matching_ingredients.iter().map(|m| m.effectiveness))
        .map(round_score)
        .unwrap_or(0);
    debug!(
        goal = %goal.goal_name,
        score,
        matches = matching_ingredients.len(),
        "goal effectiveness"
    );

    GoalEffectiveness {
        goal: goal.goal_name.clone(),
        priority: goal.priority,
        score,
        weight: None,
        matching_ingredients,
    }
}

pub fn effectiveness_for_all(
    goals: &[UserGoal],
    list: &IngredientList,
    skin: Option<SkinType>,
) -> Vec<GoalEffectiveness> {
    goals
        .iter()
        .map(|goal| effectiveness_for(goal, list, skin))
        .collect()
}
