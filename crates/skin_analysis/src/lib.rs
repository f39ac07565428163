//! Scores a skincare label against a user's skin profile, allergies,
//! reaction history and goals.

mod analyzer;
mod config;
mod context;
mod environment;
mod error;
mod goals;
mod ingredients;
mod insights;
mod label;
mod priority;
mod recommend;
mod score;
mod suitability;

pub use analyzer::{AnalysisResult, Analyzer, holistic_explanation};
pub use config::{AnalysisConfig, ScoreMode};
pub use context::{
    Climate, Priority, Reaction, ReactionRecord, Season, UserContext, UserGoal, UserProfile,
};
pub use environment::{determine_climate, determine_season};
pub use error::{AnalysisError, Result};
pub use goals::{GoalEffectiveness, MatchingIngredient, effectiveness_for, effectiveness_for_all};
pub use ingredients::IngredientList;
pub use insights::{PersonalizedInsight, personalized_insights};
pub use label::extract_ingredient_section;
pub use priority::{
    aggregate, apply_tier_weights, simple_mean, tier_weight, tier_weights, tiers_present,
};
pub use recommend::{Recommendation, RecommendationKind, recommend};
pub use suitability::{
    Category, NO_FUNCTIONAL_WARNING, SuitabilityReport, categorize, score_suitability,
    suitability_explanation,
};

pub use ingredient_knowledge::SkinType;
