//! JSON decoding for the list and lookup endpoints.
//!
//! Both endpoints wrap their records in `{"meals": [...]}`. The API answers
//! `{"meals": null}` for unknown ids and categories. A lookup decodes that to
//! an empty sequence; a listing treats it as a decode failure.

use log::{debug, warn};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::FetchError;
use crate::model::{MealDetail, MealSummary};
use crate::normalize::{
    build_ingredient_lines, build_ingredient_lists, or_default, DEFAULT_INSTRUCTIONS,
    DEFAULT_MEAL_NAME, DEFAULT_THUMBNAIL, NUMBERED_FIELDS,
};

pub const INGREDIENT_KEYS: [&str; NUMBERED_FIELDS] = [
    "strIngredient1",
    "strIngredient2",
    "strIngredient3",
    "strIngredient4",
    "strIngredient5",
    "strIngredient6",
    "strIngredient7",
    "strIngredient8",
    "strIngredient9",
    "strIngredient10",
    "strIngredient11",
    "strIngredient12",
    "strIngredient13",
    "strIngredient14",
    "strIngredient15",
    "strIngredient16",
    "strIngredient17",
    "strIngredient18",
    "strIngredient19",
    "strIngredient20",
];

pub const MEASURE_KEYS: [&str; NUMBERED_FIELDS] = [
    "strMeasure1",
    "strMeasure2",
    "strMeasure3",
    "strMeasure4",
    "strMeasure5",
    "strMeasure6",
    "strMeasure7",
    "strMeasure8",
    "strMeasure9",
    "strMeasure10",
    "strMeasure11",
    "strMeasure12",
    "strMeasure13",
    "strMeasure14",
    "strMeasure15",
    "strMeasure16",
    "strMeasure17",
    "strMeasure18",
    "strMeasure19",
    "strMeasure20",
];

// filter.php: `meals` must be an array
#[derive(Deserialize)]
struct ListEnvelope<T> {
    meals: Vec<T>,
}

// lookup.php: `null` means no such meal
#[derive(Deserialize)]
struct LookupEnvelope<T> {
    meals: Option<Vec<T>>,
}

#[derive(Deserialize)]
struct RawMealSummary {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal", default, deserialize_with = "trimmed")]
    name: Option<String>,
    #[serde(rename = "strMealThumb", default, deserialize_with = "trimmed")]
    thumbnail_url: Option<String>,
}

#[derive(Deserialize)]
struct RawMealDetail {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal", default, deserialize_with = "trimmed")]
    name: Option<String>,
    #[serde(rename = "strInstructions", default, deserialize_with = "trimmed")]
    instructions: Option<String>,
    #[serde(rename = "strMealThumb", default, deserialize_with = "trimmed")]
    thumbnail_url: Option<String>,
    // Numbered fields are read one by one so a bad value only loses itself
    #[serde(flatten)]
    rest: Map<String, Value>,
}

fn trimmed<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.map(|s| s.trim().to_string()))
}

fn numbered_field(rest: &Map<String, Value>, key: &str) -> Option<String> {
    match rest.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.trim().to_string()),
        Some(other) => {
            warn!("Skipping {}: expected a string, got {}", key, other);
            None
        }
    }
}

impl From<RawMealSummary> for MealSummary {
    fn from(raw: RawMealSummary) -> Self {
        MealSummary {
            id: raw.id,
            name: raw.name,
            thumbnail_url: raw.thumbnail_url,
        }
    }
}

impl From<RawMealDetail> for MealDetail {
    fn from(raw: RawMealDetail) -> Self {
        let ingredients = INGREDIENT_KEYS.map(|key| numbered_field(&raw.rest, key));
        let measures = MEASURE_KEYS.map(|key| numbered_field(&raw.rest, key));
        let lines = build_ingredient_lines(&ingredients, &measures);
        let (ingredients, measures) = build_ingredient_lists(&ingredients, &measures);

        MealDetail {
            id: raw.id,
            name: or_default(raw.name, DEFAULT_MEAL_NAME),
            instructions: or_default(raw.instructions, DEFAULT_INSTRUCTIONS),
            thumbnail_url: or_default(raw.thumbnail_url, DEFAULT_THUMBNAIL),
            ingredients,
            measures,
            lines,
        }
    }
}

/// Decode a `filter.php` body. No filtering is applied here.
///
/// A missing or `null` `meals` array is a `Decode` error.
pub fn decode_list(body: &[u8]) -> Result<Vec<MealSummary>, FetchError> {
    let envelope: ListEnvelope<RawMealSummary> = serde_json::from_slice(body)?;
    let meals: Vec<MealSummary> = envelope.meals.into_iter().map(Into::into).collect();
    debug!("Decoded {} meal summaries", meals.len());
    Ok(meals)
}

/// Decode a `lookup.php` body. An empty result is `Ok(vec![])`, not an error.
pub fn decode_detail(body: &[u8]) -> Result<Vec<MealDetail>, FetchError> {
    let envelope: LookupEnvelope<RawMealDetail> = serde_json::from_slice(body)?;
    let meals: Vec<MealDetail> = envelope
        .meals
        .unwrap_or_default()
        .into_iter()
        .map(Into::into)
        .collect();
    debug!("Decoded {} meal details", meals.len());
    Ok(meals)
}

/// Write a detail back in the lookup wire shape, numbering ingredients and
/// measures from 1 in sequence order.
///
/// Only `ingredients` and `measures` survive a re-decode; `lines` is rebuilt
/// from the renumbered fields and may pair different measures than before.
pub fn encode_detail(detail: &MealDetail) -> Value {
    let mut meal = Map::new();
    meal.insert("idMeal".to_string(), Value::from(detail.id.as_str()));
    meal.insert("strMeal".to_string(), Value::from(detail.name.as_str()));
    meal.insert(
        "strInstructions".to_string(),
        Value::from(detail.instructions.as_str()),
    );
    meal.insert(
        "strMealThumb".to_string(),
        Value::from(detail.thumbnail_url.as_str()),
    );
    for (key, ingredient) in INGREDIENT_KEYS.iter().zip(&detail.ingredients) {
        meal.insert(key.to_string(), Value::from(ingredient.as_str()));
    }
    for (key, measure) in MEASURE_KEYS.iter().zip(&detail.measures) {
        meal.insert(key.to_string(), Value::from(measure.as_str()));
    }

    serde_json::json!({ "meals": [Value::Object(meal)] })
}
