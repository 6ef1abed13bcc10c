use log::{debug, error};
use reqwest::Url;

use crate::config::CatalogConfig;
use crate::decode::{decode_detail, decode_list};
use crate::endpoints::{Endpoints, DESSERT_CATEGORY};
use crate::error::FetchError;
use crate::http::{HttpClient, ReqwestClient};
use crate::model::{MealDetail, MealSummary};
use crate::normalize::filter_and_sort_summaries;
use crate::state::FetchState;

/// Fetches and normalizes meals. Every call goes to the network; nothing is cached.
#[derive(Debug, Clone)]
pub struct MealCatalog<C = ReqwestClient> {
    client: C,
    endpoints: Result<Endpoints, String>,
}

impl MealCatalog<ReqwestClient> {
    /// Catalog talking to the configured host over reqwest.
    ///
    /// A bad `base_url` is not reported here; each operation fails with
    /// `InvalidUrl` instead, so callers always get a state to render.
    pub fn new(config: &CatalogConfig) -> Result<Self, FetchError> {
        Ok(Self::with_client(ReqwestClient::new(config)?, &config.base_url))
    }
}

impl<C: HttpClient> MealCatalog<C> {
    pub fn with_client(client: C, base_url: &str) -> Self {
        let endpoints = Endpoints::new(base_url).map_err(|e| match e {
            FetchError::InvalidUrl(message) => message,
            other => other.to_string(),
        });
        Self { client, endpoints }
    }

    fn endpoints(&self) -> Result<&Endpoints, FetchError> {
        self.endpoints
            .as_ref()
            .map_err(|message| FetchError::InvalidUrl(message.clone()))
    }

    async fn get_ok(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).await?;
        if !response.is_ok() {
            return Err(FetchError::BadStatus(response.status));
        }
        Ok(response.body)
    }

    /// Summaries of one category, filtered and sorted by name
    pub async fn fetch_category(&self, category: &str) -> Result<Vec<MealSummary>, FetchError> {
        let url = self.endpoints()?.filter_by_category(category)?;
        let body = self.get_ok(&url).await?;
        let meals = filter_and_sort_summaries(decode_list(&body)?);
        debug!("{} displayable meals in {}", meals.len(), category);
        Ok(meals)
    }

    pub async fn fetch_desserts(&self) -> Result<Vec<MealSummary>, FetchError> {
        self.fetch_category(DESSERT_CATEGORY).await
    }

    /// First meal returned by the lookup endpoint; `NotFound` if there is none
    pub async fn fetch_meal_detail(&self, id: &str) -> Result<MealDetail, FetchError> {
        let url = self.endpoints()?.lookup(id)?;
        let body = self.get_ok(&url).await?;
        decode_detail(&body)?
            .into_iter()
            .next()
            .ok_or(FetchError::NotFound)
    }

    /// [`Self::fetch_desserts`] with every failure folded into `FetchState::Error`
    pub async fn list_desserts(&self) -> FetchState<Vec<MealSummary>> {
        into_state(self.fetch_desserts().await)
    }

    /// [`Self::fetch_meal_detail`] with every failure folded into `FetchState::Error`
    pub async fn get_meal_detail(&self, id: &str) -> FetchState<MealDetail> {
        into_state(self.fetch_meal_detail(id).await)
    }
}

fn into_state<T>(result: Result<T, FetchError>) -> FetchState<T> {
    if let Err(e) = &result {
        error!("Fetch failed: {}", e);
    }
    result.into()
}
