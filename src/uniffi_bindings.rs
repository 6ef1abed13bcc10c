//! UniFFI bindings for mealdb-desserts
//!
//! This module provides FFI-compatible types and functions for use with iOS and Android.
//! It wraps the async Rust API with synchronous functions that manage their own tokio runtime.
//! Every entry point returns a state record; failures arrive as `Error` states, never as
//! foreign exceptions.

use crate::{CatalogConfig, FetchError, FetchState, IngredientLine, MealCatalog, MealDetail, MealSummary};

// Re-export UniFFI macro
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();

/// FFI-compatible list entry
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiMealSummary {
    pub id: String,
    /// Empty string if none
    pub name: String,
    /// Empty string if none
    pub thumbnail_url: String,
}

/// One row of the ingredient table
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiIngredientLine {
    pub ingredient: String,
    pub measure: String,
}

/// FFI-compatible meal detail
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiMealDetail {
    pub id: String,
    pub name: String,
    pub instructions: String,
    pub thumbnail_url: String,
    pub ingredients: Vec<String>,
    pub measures: Vec<String>,
    pub lines: Vec<FfiIngredientLine>,
}

impl From<MealSummary> for FfiMealSummary {
    fn from(meal: MealSummary) -> Self {
        FfiMealSummary {
            id: meal.id,
            name: meal.name.unwrap_or_default(),
            thumbnail_url: meal.thumbnail_url.unwrap_or_default(),
        }
    }
}

impl From<IngredientLine> for FfiIngredientLine {
    fn from(line: IngredientLine) -> Self {
        FfiIngredientLine {
            ingredient: line.ingredient,
            measure: line.measure,
        }
    }
}

impl From<MealDetail> for FfiMealDetail {
    fn from(meal: MealDetail) -> Self {
        FfiMealDetail {
            id: meal.id,
            name: meal.name,
            instructions: meal.instructions,
            thumbnail_url: meal.thumbnail_url,
            ingredients: meal.ingredients,
            measures: meal.measures,
            lines: meal.lines.into_iter().map(Into::into).collect(),
        }
    }
}

/// FFI-compatible state of the dessert list
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiListState {
    Idle,
    Loading,
    Success { meals: Vec<FfiMealSummary> },
    Error { message: String },
}

/// FFI-compatible state of a detail lookup
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum FfiDetailState {
    Idle,
    Loading,
    Success { meal: FfiMealDetail },
    Error { message: String },
}

impl From<FetchState<Vec<MealSummary>>> for FfiListState {
    fn from(state: FetchState<Vec<MealSummary>>) -> Self {
        match state {
            FetchState::Idle => FfiListState::Idle,
            FetchState::Loading => FfiListState::Loading,
            FetchState::Success(meals) => FfiListState::Success {
                meals: meals.into_iter().map(Into::into).collect(),
            },
            FetchState::Error(message) => FfiListState::Error { message },
        }
    }
}

impl From<FetchState<MealDetail>> for FfiDetailState {
    fn from(state: FetchState<MealDetail>) -> Self {
        match state {
            FetchState::Idle => FfiDetailState::Idle,
            FetchState::Loading => FfiDetailState::Loading,
            FetchState::Success(meal) => FfiDetailState::Success { meal: meal.into() },
            FetchState::Error(message) => FfiDetailState::Error { message },
        }
    }
}

/// Configuration for catalog calls
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct FfiCatalogConfig {
    /// Optional API host (uses https://themealdb.com if not specified)
    pub base_url: Option<String>,
    /// Optional timeout in seconds (uses the transport default if not specified)
    pub timeout_seconds: Option<u64>,
}

impl From<FfiCatalogConfig> for CatalogConfig {
    fn from(ffi: FfiCatalogConfig) -> Self {
        let mut config = CatalogConfig::default();
        if let Some(base_url) = ffi.base_url {
            config.base_url = base_url;
        }
        config.timeout_secs = ffi.timeout_seconds;
        config
    }
}

/// Create a new tokio runtime for FFI calls
fn create_runtime() -> Result<tokio::runtime::Runtime, FetchError> {
    tokio::runtime::Runtime::new()
        .map_err(|e| FetchError::Runtime(format!("Failed to create async runtime: {}", e)))
}

fn catalog_and_runtime(
    config: Option<FfiCatalogConfig>,
) -> Result<(MealCatalog, tokio::runtime::Runtime), FetchError> {
    let config: CatalogConfig = config.unwrap_or_default().into();
    let catalog = MealCatalog::new(&config)?;
    Ok((catalog, create_runtime()?))
}

/// Fetch the dessert list, filtered and sorted by name
///
/// # Arguments
/// * `config` - Optional configuration for the call
///
/// # Returns
/// `Success` with the meals, or `Error` with a displayable message
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn list_desserts(config: Option<FfiCatalogConfig>) -> FfiListState {
    let state = match catalog_and_runtime(config) {
        Ok((catalog, rt)) => rt.block_on(async { catalog.list_desserts().await }),
        Err(e) => FetchState::Error(e.to_string()),
    };
    state.into()
}

/// Fetch the detail of one meal
///
/// # Arguments
/// * `id` - The `idMeal` of a list entry
/// * `config` - Optional configuration for the call
///
/// # Returns
/// `Success` with the meal, or `Error` with a displayable message
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_meal_detail(id: String, config: Option<FfiCatalogConfig>) -> FfiDetailState {
    let state = match catalog_and_runtime(config) {
        Ok((catalog, rt)) => rt.block_on(async { catalog.get_meal_detail(&id).await }),
        Err(e) => FetchState::Error(e.to_string()),
    };
    state.into()
}

/// Get the library version
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
