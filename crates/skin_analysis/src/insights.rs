use ingredient_knowledge::{SkinType, canonical_for_token};
use serde::{Deserialize, Serialize};

use crate::ingredients::IngredientList;

const POOR_COMPATIBILITY: u8 = 60;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalizedInsight {
    pub ingredient: String,
    pub benefit: String,
    pub is_positive: bool,
}

/// One note per recognised token, built from the ingredient's first listed
/// benefit. Flagged negative when that benefit suits the user's skin poorly.
pub fn personalized_insights(
    list: &IngredientList,
    skin: Option<SkinType>,
) -> Vec<PersonalizedInsight> {
    let skin = skin.unwrap_or(SkinType::Normal);

    list.iter()
        .filter_map(canonical_for_token)
        .filter_map(|entry| entry.benefits.first().map(|b| (entry.name, b)))
        .map(|(name, benefit)| {
            let text = format!("{name} {}", benefit.reason.to_lowercase());
            match benefit.compatibility.map(|c| c.for_skin(skin)) {
                Some(compat) if compat > 0 && compat < POOR_COMPATIBILITY => PersonalizedInsight {
                    ingredient: name.to_string(),
                    benefit: format!("{text} (may not be ideal for {skin} skin)"),
                    is_positive: false,
                },
                _ => PersonalizedInsight {
                    ingredient: name.to_string(),
                    benefit: text,
                    is_positive: true,
                },
            }
        })
        .collect()
}
