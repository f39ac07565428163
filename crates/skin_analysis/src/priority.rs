use std::collections::BTreeSet;

use tracing::debug;

use crate::context::Priority;
use crate::goals::GoalEffectiveness;
use crate::score::{mean, round_score};

const THREE_TIER_WEIGHTS: [f64; 3] = [0.50, 0.37, 0.13];
const TWO_TIER_WEIGHTS: [f64; 2] = [0.60, 0.40];
const ONE_TIER_WEIGHTS: [f64; 1] = [1.00];

/// Weights for `tier_count` distinct tiers, highest priority first.
pub fn tier_weights(tier_count: usize) -> &'static [f64] {
    match tier_count {
        0 => &[],
        1 => &ONE_TIER_WEIGHTS,
        2 => &TWO_TIER_WEIGHTS,
        _ => &THREE_TIER_WEIGHTS,
    }
}

pub fn tiers_present(goals: &[GoalEffectiveness]) -> Vec<Priority> {
    goals
        .iter()
        .map(|g| g.priority)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Weight a goal at `priority` carries given the tiers present; 0 if the
/// tier is absent.
pub fn tier_weight(priority: Priority, tiers: &[Priority]) -> f64 {
    tiers
        .iter()
        .position(|t| *t == priority)
        .and_then(|idx| tier_weights(tiers.len()).get(idx).copied())
        .unwrap_or(0.0)
}

/// Records on each goal the weight its tier carries in `aggregate`.
pub fn apply_tier_weights(goals: &mut [GoalEffectiveness]) {
    let tiers = tiers_present(goals);
    for goal in goals.iter_mut() {
        goal.weight = Some(tier_weight(goal.priority, &tiers));
    }
}

/// Holistic goal score: each tier contributes its mean score times its
/// weight.
pub fn aggregate(goals: &[GoalEffectiveness]) -> u8 {
    let tiers = tiers_present(goals);
    let weights = tier_weights(tiers.len());

    let weighted = tiers
        .iter()
        .zip(weights)
        .map(|(tier, weight)| {
            let in_tier = goals.iter().filter(|g| g.priority == *tier);
            mean(in_tier.map(|g| g.score)).unwrap_or(0.0) * weight
        })
        .sum::<f64>();

    let score = round_score(weighted);
    debug!(tiers = tiers.len(), score, "priority-weighted goal score");
    score
}

/// Plain mean across goals, used when priority mode is off.
pub fn simple_mean(goals: &[GoalEffectiveness]) -> u8 {
    mean(goals.iter().map(|g| g.score)).map(round_score).unwrap_or(0)
}
