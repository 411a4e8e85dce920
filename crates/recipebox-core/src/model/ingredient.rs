use serde::{Deserialize, Serialize};

/// Ingredient - a named item shared by any number of recipes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ingredient {
    /// Store-assigned identifier (0 until inserted)
    pub ingredient_id: i64,

    /// Display name; compared case-insensitively for deduplication
    pub name: String,
}

impl Ingredient {
    /// Create an unsaved ingredient
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            ingredient_id: 0,
            name: name.into(),
        }
    }

    pub fn with_id(ingredient_id: i64, name: impl Into<String>) -> Self {
        Self {
            ingredient_id,
            name: name.into(),
        }
    }

    /// Case-insensitive name comparison (full Unicode lowercase folding)
    pub fn name_matches(&self, other: &str) -> bool {
        names_equal_ignore_case(&self.name, other)
    }
}

/// Compare two ingredient names ignoring case
///
/// Uses Unicode lowercase mapping so "ŘAPÍKATÝ CELER" matches "řapíkatý celer".
pub fn names_equal_ignore_case(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
