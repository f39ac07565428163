//! Hand-authored ingredient knowledge: which skincare goals an ingredient
//! serves, how well, and how that changes per skin type.
//!
//! The table is immutable process-wide data; every query is a pure lookup.

mod skin;
mod table;

use serde::Serialize;

pub use skin::{Compatibility, SkinType, UnknownSkinType};
pub use table::{
    ANTI_AGING, GoalBenefit, HYDRATION, INGREDIENT_KNOWLEDGE, IngredientEntry, OIL_CONTROL,
    PREDEFINED_GOALS, REDUCE_ACNE, REDUCE_SCARS, SKIN_BRIGHTENING,
};

/// A goal benefit as seen by one caller: effectiveness already rescaled by
/// skin type compatibility when it applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct IngredientBenefit {
    pub effectiveness: u8,
    pub reason: &'static str,
    pub compatibility: Option<Compatibility>,
}

impl IngredientBenefit {
    fn from_table(benefit: &'static GoalBenefit) -> Self {
        Self {
            effectiveness: benefit.effectiveness,
            reason: benefit.reason,
            compatibility: benefit.compatibility,
        }
    }

    fn adjusted_for(self, skin: Option<SkinType>) -> Self {
        match (skin, self.compatibility) {
            (Some(skin), Some(table)) => Self {
                effectiveness: scale(self.effectiveness, table.for_skin(skin)),
                ..self
            },
            _ => self,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RecommendedIngredient {
    pub ingredient: &'static str,
    pub benefit: IngredientBenefit,
}

/// Canonical entry whose name equals `ingredient`, ignoring case.
pub fn find_entry(ingredient: &str) -> Option<&'static IngredientEntry> {
    let needle = ingredient.trim();
    INGREDIENT_KNOWLEDGE
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(needle))
}

/// First canonical entry whose lower-cased name occurs inside a label token.
///
/// Label text rarely spells an ingredient exactly, so free-text tokens are
/// associated with canonical keys by containment.
pub fn canonical_for_token(token: &str) -> Option<&'static IngredientEntry> {
    let token = token.to_lowercase();
    INGREDIENT_KNOWLEDGE
        .iter()
        .find(|entry| token.contains(&entry.name.to_lowercase()))
}

/// Benefit of `ingredient` for `goal`, rescaled by `skin` when the entry
/// carries a compatibility table.
///
/// The ingredient must match a canonical key exactly (ignoring case); the
/// goal name must match exactly.
pub fn lookup_benefit(
    ingredient: &str,
    goal: &str,
    skin: Option<SkinType>,
) -> Option<IngredientBenefit> {
    let entry = find_entry(ingredient)?;
    let benefit = entry.benefit_for(goal)?;
    Some(IngredientBenefit::from_table(benefit).adjusted_for(skin))
}

/// Goals the ingredient has a listed benefit for, in table order.
pub fn ingredient_goals(ingredient: &str) -> Vec<&'static str> {
    find_entry(ingredient)
        .map(|entry| entry.benefits.iter().map(|b| b.goal).collect())
        .unwrap_or_default()
}

/// Every ingredient offering a benefit for `goal` that is not already in
/// `exclude`, strongest first. Ties keep table order.
pub fn recommended_ingredients<S: AsRef<str>>(
    goal: &str,
    exclude: &[S],
) -> Vec<RecommendedIngredient> {
    let excluded = exclude
        .iter()
        .map(|s| s.as_ref().to_lowercase())
        .collect::<Vec<_>>();

    let mut out = INGREDIENT_KNOWLEDGE
        .iter()
        .filter(|entry| !excluded.contains(&entry.name.to_lowercase()))
        .filter_map(|entry| {
            entry.benefit_for(goal).map(|b| RecommendedIngredient {
                ingredient: entry.name,
                benefit: IngredientBenefit::from_table(b),
            })
        })
        .collect::<Vec<_>>();
    out.sort_by(|l, r| r.benefit.effectiveness.cmp(&l.benefit.effectiveness));
    out
}

fn scale(effectiveness: u8, compatibility: u8) -> u8 {
    let product = u32::from(effectiveness) * u32::from(compatibility);
    ((product + 50) / 100).min(100) as u8
}
