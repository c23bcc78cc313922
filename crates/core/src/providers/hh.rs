use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use tracing::info;

use crate::errors::CoreError;
use crate::models::settings::Settings;
use super::traits::VacancyProvider;

const PROVIDER_NAME: &str = "hh.ru";

/// hh.ru vacancy search provider.
///
/// - **Free**: no API key for public search.
/// - **Endpoint**: `GET /vacancies?text=..&per_page=..&only_with_salary=..`
/// - **Limits**: at most 100 listings per page; only the first page is read.
///
/// hh.ru answers `400`/`403` to requests without a `User-Agent`, so one is
/// always sent.
pub struct HhProvider {
    client: Client,
    api_url: String,
    per_page: u32,
    only_with_salary: bool,
}

impl HhProvider {
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }

    /// Build a provider from explicit settings (endpoint, page size, user agent).
    pub fn with_settings(settings: &Settings) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(settings.user_agent.clone())
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            api_url: settings.api_url.clone(),
            per_page: settings.per_page,
            only_with_salary: settings.only_with_salary,
        }
    }

    /// Endpoint this provider queries.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Query parameters sent with a search for `query`.
    pub fn query_params(&self, query: &str) -> Vec<(&'static str, String)> {
        vec![
            ("text", query.to_string()),
            ("per_page", self.per_page.to_string()),
            ("only_with_salary", self.only_with_salary.to_string()),
        ]
    }

    /// Extract the listing records from a search response body.
    pub fn parse_items(body: Value) -> Result<Vec<Value>, CoreError> {
        let resp: SearchResponse = serde_json::from_value(body).map_err(|e| CoreError::Api {
            provider: PROVIDER_NAME.into(),
            message: format!("Unexpected search response: {e}"),
        })?;
        Ok(resp.items)
    }
}

impl Default for HhProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ── hh.ru API response types ────────────────────────────────────────

#[derive(Deserialize)]
struct SearchResponse {
    items: Vec<Value>,
}

#[async_trait]
impl VacancyProvider for HhProvider {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    async fn search(&self, query: &str) -> Result<Vec<Value>, CoreError> {
        let resp = self
            .client
            .get(&self.api_url)
            .query(&self.query_params(query))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CoreError::Api {
                provider: PROVIDER_NAME.into(),
                message: format!("Search request failed with status {status}"),
            });
        }

        let body: Value = resp.json().await.map_err(|e| CoreError::Api {
            provider: PROVIDER_NAME.into(),
            message: format!("Failed to parse search response: {e}"),
        })?;

        let items = Self::parse_items(body)?;
        info!(provider = PROVIDER_NAME, count = items.len(), "search returned listings");
        Ok(items)
    }
}
