/// Ingredient tokens of one label: lower-cased, trimmed, split on commas.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IngredientList {
    tokens: Vec<String>,
}

impl IngredientList {
    pub fn parse(raw: &str) -> Self {
        let tokens = raw
            .to_lowercase()
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// True if any token contains `needle`, ignoring case.
    pub fn any_contains(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.tokens.iter().any(|t| t.contains(&needle))
    }

    /// True if `name` is one of the tokens, ignoring case.
    pub fn contains_exact(&self, name: &str) -> bool {
        let name = name.trim().to_lowercase();
        self.tokens.iter().any(|t| *t == name)
    }

    /// Tokens matching at least one of `keywords` by containment.
    pub fn matching_any(&self, keywords: &[&str]) -> Vec<String> {
        self.tokens
            .iter()
            .filter(|t| keywords.iter().any(|k| t.contains(k)))
            .cloned()
            .collect()
    }
}
