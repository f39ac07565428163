use serde::{Deserialize, Serialize};
use tracing::{info, info_span};

use crate::config::{AnalysisConfig, ScoreMode};
use crate::context::UserContext;
use crate::goals::{GoalEffectiveness, effectiveness_for_all};
use crate::ingredients::IngredientList;
use crate::insights::{PersonalizedInsight, personalized_insights};
use crate::priority::{aggregate, apply_tier_weights, simple_mean};
use crate::recommend::{Recommendation, recommend};
use crate::score::round_score;
use crate::suitability::{Category, score_suitability};

const BLEND_GOAL_WEIGHT: f64 = 0.8;
const BLEND_SUITABILITY_WEIGHT: f64 = 0.2;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub suitability_score: u8,
    pub goal_score: u8,
    pub score_mode: ScoreMode,
    pub explanation: String,
    pub suitability_explanation: String,
    pub warnings: Vec<String>,
    pub highlights: Vec<String>,
    pub categories: Vec<Category>,
    pub extracted_ingredients: Vec<String>,
    pub personalized_insights: Vec<PersonalizedInsight>,
    pub goal_effectiveness: Vec<GoalEffectiveness>,
    pub recommendations: Vec<Recommendation>,
}

/// Runs the full scoring pipeline for one label. Holds no per-call state, so
/// one instance can serve any number of callers.
#[derive(Clone, Debug, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
}

impl Analyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn analyze(&self, ingredients: &str, ctx: &UserContext) -> AnalysisResult {
        let span = info_span!(
            "analyze",
            goals = ctx.goals.len(),
            priority_mode = ctx.priority_mode
        );
        let _guard = span.enter();

        let list = IngredientList::parse(ingredients);
        let skin = ctx.skin_type();

        let base = score_suitability(&list, &ctx.profile, &ctx.allergies, &ctx.reaction_history);
        let insights = personalized_insights(&list, skin);
        let mut goal_effectiveness = effectiveness_for_all(&ctx.goals, &list, skin);

        let raw_goal_score = if ctx.priority_mode {
            apply_tier_weights(&mut goal_effectiveness);
            aggregate(&goal_effectiveness)
        } else {
            simple_mean(&goal_effectiveness)
        };
        let goal_score = match self.config.score_mode {
            ScoreMode::Blended if !goal_effectiveness.is_empty() => {
                blend(raw_goal_score, base.score)
            }
            _ => raw_goal_score,
        };

        let recommendations = recommend(&list, &ctx.goals, &goal_effectiveness, &self.config);
        info!(
            suitability = base.score,
            goal_score,
            recommendations = recommendations.len(),
            "analysis complete"
        );

        AnalysisResult {
            suitability_score: base.score,
            goal_score,
            score_mode: self.config.score_mode,
            explanation: holistic_explanation(base.score, goal_score),
            suitability_explanation: base.explanation,
            warnings: base.warnings,
            highlights: base.highlights,
            categories: base.categories,
            extracted_ingredients: list.tokens().to_vec(),
            personalized_insights: insights,
            goal_effectiveness,
            recommendations,
        }
    }
}

fn blend(goal_score: u8, suitability: u8) -> u8 {
    round_score(
        f64::from(goal_score) * BLEND_GOAL_WEIGHT
            + f64::from(suitability) * BLEND_SUITABILITY_WEIGHT,
    )
}

pub fn holistic_explanation(suitability: u8, goal_score: u8) -> String {
    format!(
        "Your product suitability score is {suitability} ({}) and your overall \
         goal-based score is {goal_score} ({}).",
        suitability_verdict(suitability),
        goal_verdict(goal_score)
    )
}

fn suitability_verdict(score: u8) -> &'static str {
    match score {
        80.. => "perfect for your skin",
        60..=79 => "safe for your skin",
        40..=59 => "tolerable for your skin",
        _ => "risky for your skin",
    }
}

fn goal_verdict(score: u8) -> &'static str {
    match score {
        80.. => "excellent for your goals",
        60..=79 => "good for your goals",
        40..=59 => "okay for your goals",
        _ => "not very effective for your goals",
    }
}
