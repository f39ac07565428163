use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::context::{Climate, Reaction, ReactionRecord, Season, UserProfile};
use crate::ingredients::IngredientList;
use crate::score::clamp_score;
use ingredient_knowledge::SkinType;

const BASE_SCORE: i32 = 85;
const ALLERGY_PENALTY: i32 = 30;
const DRYING_ALCOHOL_PENALTY: i32 = 15;
const CONGESTING_OIL_PENALTY: i32 = 5;
const IRRITATION_PENALTY: i32 = 40;
const WORKED_WELL_BONUS: i32 = 5;
const WINTER_HUMECTANT_PENALTY: i32 = 10;
const NO_FUNCTIONAL_PENALTY: i32 = 60;

pub const NO_FUNCTIONAL_WARNING: &str = "No key functional skincare ingredients identified.";

struct CategoryRule {
    name: &'static str,
    keywords: &'static [&'static str],
    color_tag: &'static str,
}

const CATEGORY_RULES: [CategoryRule; 4] = [
    CategoryRule {
        name: "Humectants",
        keywords: &["glycerin", "hyaluronic", "propanediol", "panthenol"],
        color_tag: "cyan",
    },
    CategoryRule {
        name: "Soothing",
        keywords: &["centella", "aloe", "allantoin", "bisabolol"],
        color_tag: "green",
    },
    CategoryRule {
        name: "Actives",
        keywords: &["niacinamide", "retinol", "vitamin c", "salicylic"],
        color_tag: "teal",
    },
    CategoryRule {
        name: "Barrier",
        keywords: &["ceramide", "cholesterol", "fatty acid", "squalane"],
        color_tag: "orange",
    },
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub ingredients: Vec<String>,
    pub color_tag: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitabilityReport {
    pub score: u8,
    pub explanation: String,
    pub warnings: Vec<String>,
    pub highlights: Vec<String>,
    pub categories: Vec<Category>,
}

/// Goal-independent safety score of a label for one user.
///
/// Deductions and bonuses are summed from a base of 85 and clamped once at
/// the end.
pub fn score_suitability(
    list: &IngredientList,
    profile: &UserProfile,
    allergies: &[String],
    history: &[ReactionRecord],
) -> SuitabilityReport {
    let mut score = BASE_SCORE;
    let mut warnings = Vec::new();
    let mut highlights = Vec::new();

    for allergy in allergies.iter().map(|a| a.trim()).filter(|a| !a.is_empty()) {
        if list.any_contains(allergy) {
            score -= ALLERGY_PENALTY;
            warnings.push(format!("Contains {allergy}, which you are allergic to."));
        }
    }

    match profile.skin_type {
        Some(SkinType::Dry) if list.any_contains("alcohol") => {
            score -= DRYING_ALCOHOL_PENALTY;
            warnings.push("Contains drying alcohols which may worsen your dry skin.".to_string());
        }
        Some(SkinType::Oily) if list.any_contains("oil") => {
            score -= CONGESTING_OIL_PENALTY;
            warnings.push("Contains oils that may contribute to congestion.".to_string());
        }
        _ => {}
    }

    for record in history {
        if !list.contains_exact(&record.ingredient_name) {
            continue;
        }
        match record.reaction {
            Reaction::Irritation => {
                score -= IRRITATION_PENALTY;
                warnings.push(format!(
                    "Contains {}, which you previously reported as irritating.",
                    record.ingredient_name
                ));
            }
            Reaction::WorkedWell => {
                score += WORKED_WELL_BONUS;
                highlights.push(format!(
                    "Includes {}, which worked well for you before.",
                    record.ingredient_name
                ));
            }
        }
    }

    // No message for this one; kept silent pending product review.
    if profile.current_season == Some(Season::Winter)
        && profile.climate_type == Some(Climate::Continental)
        && !(list.any_contains("glycerin") || list.any_contains("hyaluronic"))
    {
        score -= WINTER_HUMECTANT_PENALTY;
    }

    let categories = categorize(list);
    if categories.is_empty() {
        score -= NO_FUNCTIONAL_PENALTY;
        warn!(tokens = list.tokens().len(), "no functional ingredient category matched");
        warnings.push(NO_FUNCTIONAL_WARNING.to_string());
    }

    let score = clamp_score(score);
    debug!(score, warnings = warnings.len(), "suitability scored");

    SuitabilityReport {
        score,
        explanation: suitability_explanation(score).to_string(),
        warnings,
        highlights,
        categories,
    }
}

pub fn categorize(list: &IngredientList) -> Vec<Category> {
    CATEGORY_RULES
        .iter()
        .filter_map(|rule| {
            let ingredients = list.matching_any(rule.keywords);
            (!ingredients.is_empty()).then(|| Category {
                name: rule.name.to_string(),
                ingredients,
                color_tag: rule.color_tag.to_string(),
            })
        })
        .collect()
}

pub fn suitability_explanation(score: u8) -> &'static str {
    if score >= 80 {
        "Excellent match! This product aligns very well with your skin profile."
    } else if score >= 60 {
        "Good choice. This product should work well for you with minor considerations."
    } else if score >= 40 {
        "Acceptable. This product has some ingredients you might want to monitor."
    } else if score >= 20 {
        "Caution: This product has several conflicts with your skin profile or history."
    } else {
        "Not recommended. This product contains multiple problematic ingredients for your skin."
    }
}
