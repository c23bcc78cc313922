use serde::{Deserialize, Serialize};

/// Default vacancy search endpoint.
pub const DEFAULT_API_URL: &str = "https://api.hh.ru/vacancies";

/// Result cap for a single search request.
pub const DEFAULT_PER_PAGE: u32 = 100;

/// Width of the implied salary range for vacancies with a single bound.
pub const DEFAULT_SALARY_TOLERANCE: i64 = 10_000;

/// Tunables shared by the provider and the query functions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Search endpoint URL.
    pub api_url: String,

    /// Maximum number of listings requested per search.
    pub per_page: u32,

    /// Only request listings that advertise a salary.
    pub only_with_salary: bool,

    /// Sent as the `User-Agent` header; hh.ru rejects anonymous clients.
    pub user_agent: String,

    /// Implied range width for single-bound salaries in desired-salary filtering.
    pub salary_tolerance: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            per_page: DEFAULT_PER_PAGE,
            only_with_salary: true,
            user_agent: concat!("vacancy-tracker/", env!("CARGO_PKG_VERSION")).to_string(),
            salary_tolerance: DEFAULT_SALARY_TOLERANCE,
        }
    }
}
