use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinType {
    Oily,
    Dry,
    Combination,
    Sensitive,
    Normal,
}

impl SkinType {
    pub const ALL: [SkinType; 5] = [
        SkinType::Oily,
        SkinType::Dry,
        SkinType::Combination,
        SkinType::Sensitive,
        SkinType::Normal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SkinType::Oily => "oily",
            SkinType::Dry => "dry",
            SkinType::Combination => "combination",
            SkinType::Sensitive => "sensitive",
            SkinType::Normal => "normal",
        }
    }
}

impl fmt::Display for SkinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown skin type: {0}")]
pub struct UnknownSkinType(pub String);

impl FromStr for SkinType {
    type Err = UnknownSkinType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        SkinType::ALL
            .into_iter()
            .find(|t| t.as_str() == needle)
            .ok_or_else(|| UnknownSkinType(s.to_string()))
    }
}

/// Per skin type suitability multiplier (0-100) for one ingredient/goal pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Compatibility {
    pub oily: u8,
    pub dry: u8,
    pub combination: u8,
    pub sensitive: u8,
    pub normal: u8,
}

impl Compatibility {
    pub fn for_skin(&self, skin: SkinType) -> u8 {
        match skin {
            SkinType::Oily => self.oily,
            SkinType::Dry => self.dry,
            SkinType::Combination => self.combination,
            SkinType::Sensitive => self.sensitive,
            SkinType::Normal => self.normal,
        }
    }
}
