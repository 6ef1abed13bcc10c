use serde::Serialize;

/// One entry of a category listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealSummary {
    pub id: String,
    pub name: Option<String>,
    pub thumbnail_url: Option<String>,
}

impl MealSummary {
    /// Name to show in a list row
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }
}

/// A full recipe as returned by the lookup endpoint, with defaults applied
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealDetail {
    pub id: String,
    pub name: String,
    pub instructions: String,
    pub thumbnail_url: String,
    /// Non-empty `strIngredientN` values in field order
    pub ingredients: Vec<String>,
    /// Non-empty `strMeasureN` values in field order, filtered independently of
    /// `ingredients`; the two may differ in length
    pub measures: Vec<String>,
    /// Position-aligned ingredient/measure rows, one per non-empty ingredient
    pub lines: Vec<IngredientLine>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientLine {
    pub ingredient: String,
    /// Empty when the matching `strMeasureN` was blank
    pub measure: String,
}
