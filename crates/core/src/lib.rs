pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use models::{settings::Settings, vacancy::Vacancy};
use providers::traits::VacancyProvider;
use services::query_service;
use storage::traits::VacancyStorage;
use tracing::info;

use errors::CoreError;

/// Main entry point for the Vacancy Tracker core library.
///
/// Holds the storage handle, the search provider and the most recently
/// fetched batch. Front-ends pass this context to every menu action instead
/// of keeping their own global state.
#[must_use]
pub struct VacancyTracker {
    storage: Box<dyn VacancyStorage>,
    provider: Box<dyn VacancyProvider>,
    settings: Settings,
    last_fetched: Vec<Vacancy>,
}

impl std::fmt::Debug for VacancyTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VacancyTracker")
            .field("provider", &self.provider.name())
            .field("settings", &self.settings)
            .field("last_fetched", &self.last_fetched.len())
            .finish()
    }
}

impl VacancyTracker {
    /// Create a tracker with default settings.
    pub fn new(storage: Box<dyn VacancyStorage>, provider: Box<dyn VacancyProvider>) -> Self {
        Self::with_settings(storage, provider, Settings::default())
    }

    pub fn with_settings(
        storage: Box<dyn VacancyStorage>,
        provider: Box<dyn VacancyProvider>,
        settings: Settings,
    ) -> Self {
        Self {
            storage,
            provider,
            settings,
            last_fetched: Vec::new(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    // ── Fetching ────────────────────────────────────────────────────

    /// Search the provider, convert the listings and merge them into storage.
    ///
    /// Listings without an id are dropped. The converted batch is kept as
    /// [`last_fetched`](Self::last_fetched) and returned.
    pub async fn fetch(&mut self, query: &str) -> Result<Vec<Vacancy>, CoreError> {
        let raw = self.provider.search(query).await?;
        let vacancies = Vacancy::from_raw_list(&raw);
        info!(
            provider = self.provider.name(),
            raw = raw.len(),
            converted = vacancies.len(),
            "fetched vacancies"
        );
        self.storage.add(&vacancies)?;
        self.last_fetched = vacancies.clone();
        Ok(vacancies)
    }

    /// The batch returned by the most recent successful [`fetch`](Self::fetch).
    #[must_use]
    pub fn last_fetched(&self) -> &[Vacancy] {
        &self.last_fetched
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Every stored vacancy, in stored order.
    #[must_use]
    pub fn all(&self) -> Vec<Vacancy> {
        self.storage.list()
    }

    /// The `n` best-paid stored vacancies, highest first.
    #[must_use]
    pub fn top_by_salary(&self, n: usize) -> Vec<Vacancy> {
        let sorted = query_service::sort_descending(&self.storage.list());
        query_service::top_n(&sorted, n)
    }

    /// Stored vacancies compatible with `desired_salary`, in stored order.
    #[must_use]
    pub fn by_salary(&self, desired_salary: i64) -> Vec<Vacancy> {
        query_service::filter_by_salary_with_tolerance(
            &self.storage.list(),
            desired_salary,
            self.settings.salary_tolerance,
        )
    }

    /// Stored vacancies whose description mentions any keyword.
    #[must_use]
    pub fn by_keywords(&self, keywords: &[String]) -> Vec<Vacancy> {
        self.storage.find_by_keywords(keywords)
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Remove a stored vacancy. Returns `false` if the id is unknown.
    pub fn delete(&self, id: &str) -> Result<bool, CoreError> {
        self.storage.delete(id)
    }

    /// Replace the stored collection with `vacancies`.
    pub fn save_only(&self, vacancies: &[Vacancy]) -> Result<(), CoreError> {
        self.storage.replace(vacancies)
    }
}
