pub mod catalog;
pub mod config;
pub mod decode;
pub mod endpoints;
pub mod error;
pub mod http;
pub mod model;
pub mod normalize;
pub mod screen;
pub mod state;
pub mod uniffi_bindings;

pub use catalog::MealCatalog;
pub use config::{load_config, CatalogConfig};
pub use error::FetchError;
pub use http::{HttpClient, HttpResponse, ReqwestClient};
pub use model::{IngredientLine, MealDetail, MealSummary};
pub use screen::{DessertListScreen, MealDetailScreen};
pub use state::{FetchState, StateSlot};

/// Sorted desserts from the default host
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() {
/// let state = mealdb_desserts::list_desserts().await;
/// if let Some(meals) = state.data() {
///     for meal in meals {
///         println!("{}", meal.display_name());
///     }
/// }
/// # }
/// ```
pub async fn list_desserts() -> FetchState<Vec<MealSummary>> {
    match MealCatalog::new(&CatalogConfig::default()) {
        Ok(catalog) => catalog.list_desserts().await,
        Err(e) => FetchState::Error(e.to_string()),
    }
}

/// Detail for one meal from the default host
pub async fn get_meal_detail(id: &str) -> FetchState<MealDetail> {
    match MealCatalog::new(&CatalogConfig::default()) {
        Ok(catalog) => catalog.get_meal_detail(id).await,
        Err(e) => FetchState::Error(e.to_string()),
    }
}
