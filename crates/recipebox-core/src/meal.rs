//! Random-meal record from the public meal API
//!
//! The API flattens up to twenty ingredient/measure pairs into numbered
//! fields (`strIngredient1` .. `strIngredient20`, `strMeasure1` ..). They are
//! folded into a fixed array while deserializing, so callers never look
//! fields up by name.

use std::collections::HashMap;

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::{RbError, RecipeBoxError};

/// Number of numbered ingredient slots in a meal record
pub const MAX_MEAL_INGREDIENTS: usize = 20;

/// One ingredient slot of a meal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealIngredient {
    pub name: String,
    /// Free-text quantity ("3/4 cup"); empty when the API sends none
    pub measure: String,
}

/// A single meal record
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawMeal")]
pub struct Meal {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Regional cuisine ("strArea")
    pub area: String,
    pub instructions: String,
    /// Image URL
    pub thumbnail: String,
    pub drink_alternate: Option<String>,
    pub tags: Vec<String>,
    pub youtube: Option<String>,
    /// Slot `n` holds `strIngredient{n+1}`; blank slots are `None`
    pub ingredients: [Option<MealIngredient>; MAX_MEAL_INGREDIENTS],
}

impl Meal {
    /// Filled ingredient slots in slot order
    pub fn ingredients(&self) -> impl Iterator<Item = &MealIngredient> {
        self.ingredients.iter().flatten()
    }

    pub fn ingredient_names(&self) -> Vec<String> {
        self.ingredients().map(|i| i.name.trim().to_string()).collect()
    }

    /// `"<measure> <ingredient>"` per filled slot, trimmed
    pub fn ingredient_lines(&self) -> Vec<String> {
        self.ingredients()
            .map(|i| format!("{} {}", i.measure.trim(), i.name.trim()).trim().to_string())
            .collect()
    }
}

/// Envelope returned by the random-meal endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MealResponse {
    /// The API sends `null` rather than `[]` when nothing matched
    #[serde(default, deserialize_with = "null_as_empty")]
    pub meals: Vec<Meal>,
}

impl MealResponse {
    pub fn first(&self) -> Option<&Meal> {
        self.meals.first()
    }
}

/// Parse a random-meal API response body
pub fn parse_meal_response(json: &str) -> Result<MealResponse, RbError> {
    serde_json::from_str(json).map_err(|e| {
        RecipeBoxError::InvalidMealPayload {
            reason: e.to_string(),
        }
        .into()
    })
}

#[derive(Deserialize)]
struct RawMeal {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: String,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    thumbnail: Option<String>,
    #[serde(rename = "strDrinkAlternate", default)]
    drink_alternate: Option<String>,
    #[serde(rename = "strTags", default)]
    tags: Option<String>,
    #[serde(rename = "strYoutube", default)]
    youtube: Option<String>,
    #[serde(flatten)]
    rest: HashMap<String, serde_json::Value>,
}

impl TryFrom<RawMeal> for Meal {
    type Error = RecipeBoxError;

    fn try_from(raw: RawMeal) -> Result<Self, Self::Error> {
        let mut ingredients: [Option<MealIngredient>; MAX_MEAL_INGREDIENTS] =
            std::array::from_fn(|_| None);

        for (slot, entry) in ingredients.iter_mut().enumerate() {
            let n = slot + 1;
            let name = optional_text(&raw.rest, &format!("strIngredient{n}"))?;
            let measure = optional_text(&raw.rest, &format!("strMeasure{n}"))?;

            *entry = name
                .filter(|name| !name.trim().is_empty())
                .map(|name| MealIngredient {
                    name,
                    measure: measure.unwrap_or_default(),
                });
        }

        let tags = raw
            .tags
            .map(|t| {
                t.split(',')
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Meal {
            id: raw.id,
            name: raw.name,
            category: raw.category.unwrap_or_default(),
            area: raw.area.unwrap_or_default(),
            instructions: raw.instructions.unwrap_or_default(),
            thumbnail: raw.thumbnail.unwrap_or_default(),
            drink_alternate: raw.drink_alternate,
            tags,
            youtube: raw.youtube.filter(|y| !y.is_empty()),
            ingredients,
        })
    }
}

fn optional_text(
    fields: &HashMap<String, serde_json::Value>,
    key: &str,
) -> Result<Option<String>, RecipeBoxError> {
    match fields.get(key) {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(RecipeBoxError::InvalidMealPayload {
            reason: format!("{key} must be a string or null, got {other}"),
        }),
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Meal>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Meal>>::deserialize(deserializer)?.unwrap_or_default())
}
