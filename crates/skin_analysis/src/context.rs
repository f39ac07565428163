use std::fmt;
use std::path::Path;

use ingredient_knowledge::SkinType;
use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Climate {
    Tropical,
    Cold,
    Dry,
    Temperate,
    Continental,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub skin_type: Option<SkinType>,
    pub climate_type: Option<Climate>,
    pub current_season: Option<Season>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reaction {
    Irritation,
    WorkedWell,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionRecord {
    pub ingredient_name: String,
    pub reaction: Reaction,
}

/// Goal rank: 1 is primary, 3 is nice-to-have.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Priority(u8);

impl Priority {
    pub const PRIMARY: Priority = Priority(1);
    pub const SECONDARY: Priority = Priority(2);
    pub const NICE_TO_HAVE: Priority = Priority(3);

    pub fn new(rank: u8) -> Result<Self> {
        match rank {
            1..=3 => Ok(Self(rank)),
            other => Err(AnalysisError::InvalidPriority(other)),
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = AnalysisError;

    fn try_from(rank: u8) -> Result<Self> {
        Self::new(rank)
    }
}

impl From<Priority> for u8 {
    fn from(p: Priority) -> u8 {
        p.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserGoal {
    pub goal_name: String,
    pub priority: Priority,
}

impl UserGoal {
    pub fn new(goal_name: impl Into<String>, priority: Priority) -> Self {
        Self {
            goal_name: goal_name.into(),
            priority,
        }
    }
}

/// Everything known about the user for one analysis call. Read-only to the
/// scorer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserContext {
    pub profile: UserProfile,
    pub allergies: Vec<String>,
    pub reaction_history: Vec<ReactionRecord>,
    pub goals: Vec<UserGoal>,
    pub priority_mode: bool,
}

impl Default for UserContext {
    fn default() -> Self {
        Self {
            profile: UserProfile::default(),
            allergies: Vec::new(),
            reaction_history: Vec::new(),
            goals: Vec::new(),
            priority_mode: true,
        }
    }
}

impl UserContext {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn skin_type(&self) -> Option<SkinType> {
        self.profile.skin_type
    }
}
