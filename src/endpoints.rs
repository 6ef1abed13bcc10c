//! URL construction for the two catalog endpoints.

use reqwest::Url;

use crate::error::FetchError;

const API_PATH: [&str; 4] = ["api", "json", "v1", "1"];

/// Category listed by [`crate::MealCatalog::fetch_desserts`]
pub const DESSERT_CATEGORY: &str = "Dessert";

#[derive(Debug, Clone)]
pub struct Endpoints {
    base: Url,
}

impl Endpoints {
    /// Fails with `InvalidUrl` if `base_url` does not parse or cannot carry a path
    pub fn new(base_url: &str) -> Result<Self, FetchError> {
        let base = Url::parse(base_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(FetchError::InvalidUrl(format!(
                "{}: cannot be used as a base URL",
                base_url
            )));
        }

        Ok(Self { base })
    }

    /// `{base}/api/json/v1/1/filter.php?c={category}`
    pub fn filter_by_category(&self, category: &str) -> Result<Url, FetchError> {
        let mut url = self.api_url("filter.php")?;
        url.query_pairs_mut().append_pair("c", category);
        Ok(url)
    }

    /// `{base}/api/json/v1/1/lookup.php?i={id}`
    pub fn lookup(&self, id: &str) -> Result<Url, FetchError> {
        let mut url = self.api_url("lookup.php")?;
        url.query_pairs_mut().append_pair("i", id);
        Ok(url)
    }

    fn api_url(&self, script: &str) -> Result<Url, FetchError> {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(API_PATH)
            .push(script);
        Ok(url)
    }
}
