//! Per-screen state owners for a presentation layer.
//!
//! Each screen is constructed when it is shown and dropped with it. It owns
//! the catalog handle and a [`StateSlot`], so two screens never share state
//! and a slow, superseded request cannot overwrite a newer one.

use std::sync::Arc;

use log::debug;
use tokio::sync::watch;

use crate::catalog::MealCatalog;
use crate::http::{HttpClient, ReqwestClient};
use crate::model::{MealDetail, MealSummary};
use crate::state::{FetchState, StateSlot};

/// The dessert list
pub struct DessertListScreen<C = ReqwestClient> {
    catalog: Arc<MealCatalog<C>>,
    state: StateSlot<Vec<MealSummary>>,
}

impl<C: HttpClient> DessertListScreen<C> {
    pub fn new(catalog: Arc<MealCatalog<C>>) -> Self {
        Self {
            catalog,
            state: StateSlot::new(),
        }
    }

    /// Fetch the list and return the state this call ended in
    pub async fn load(&self) -> FetchState<Vec<MealSummary>> {
        let ticket = self.state.begin();
        let outcome = self.catalog.list_desserts().await;
        if !self.state.finish(ticket, outcome.clone()) {
            debug!("Dessert list result superseded");
        }
        outcome
    }

    pub fn state(&self) -> FetchState<Vec<MealSummary>> {
        self.state.current()
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchState<Vec<MealSummary>>> {
        self.state.subscribe()
    }
}

/// The detail view for one meal
pub struct MealDetailScreen<C = ReqwestClient> {
    catalog: Arc<MealCatalog<C>>,
    state: StateSlot<MealDetail>,
}

impl<C: HttpClient> MealDetailScreen<C> {
    pub fn new(catalog: Arc<MealCatalog<C>>) -> Self {
        Self {
            catalog,
            state: StateSlot::new(),
        }
    }

    /// Fetch the detail for `id` and return the state this call ended in
    pub async fn load(&self, id: &str) -> FetchState<MealDetail> {
        let ticket = self.state.begin();
        let outcome = self.catalog.get_meal_detail(id).await;
        if !self.state.finish(ticket, outcome.clone()) {
            debug!("Detail result for {} superseded", id);
        }
        outcome
    }

    pub fn state(&self) -> FetchState<MealDetail> {
        self.state.current()
    }

    pub fn subscribe(&self) -> watch::Receiver<FetchState<MealDetail>> {
        self.state.subscribe()
    }
}
