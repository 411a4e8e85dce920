//! Seed Format v0 schema
//!
//! Defines the YAML structure for recipe catalogs

use serde::{Deserialize, Serialize};

/// Schema version understood by this build
pub const SEED_SCHEMA_VERSION: u32 = 0;

/// Top-level seed file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedV0 {
    /// Schema version (must be 0 for this format)
    pub schema_version: u32,

    /// Catalog metadata
    pub catalog: SeedCatalog,

    /// Recipes to import, in file order
    #[serde(default)]
    pub recipes: Vec<SeedRecipe>,
}

/// Catalog metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedCatalog {
    pub name: String,
}

/// Recipe definition in seed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedRecipe {
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Ingredient names; each entry is a string or a map with a `name` field
    #[serde(default, deserialize_with = "deserialize_ingredients")]
    pub ingredients: Vec<String>,
}

/// Normalize ingredient entries written either as `- Mouka` or `- { name: Mouka, note: .. }`
fn deserialize_ingredients<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Entry(#[serde(deserialize_with = "deserialize_ingredient_name")] String);

    let entries = Vec::<Entry>::deserialize(deserializer)?;
    Ok(entries.into_iter().map(|e| e.0).collect())
}

fn deserialize_ingredient_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct NameVisitor;

    impl<'de> Visitor<'de> for NameVisitor {
        type Value = String;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a string or a map with 'name' field")
        }

        fn visit_str<E>(self, value: &str) -> Result<String, E>
        where
            E: de::Error,
        {
            Ok(value.to_string())
        }

        fn visit_map<M>(self, mut map: M) -> Result<String, M::Error>
        where
            M: de::MapAccess<'de>,
        {
            let mut name = None;
            while let Some(key) = map.next_key::<String>()? {
                if key == "name" {
                    name = Some(map.next_value()?);
                } else {
                    // Quantities and notes are not stored
                    map.next_value::<serde::de::IgnoredAny>()?;
                }
            }
            name.ok_or_else(|| de::Error::missing_field("name"))
        }
    }

    deserializer.deserialize_any(NameVisitor)
}
