use async_trait::async_trait;
use serde_json::Value;

use crate::errors::CoreError;

/// Trait abstraction for vacancy search sources.
///
/// Implementations return the raw listing records untouched; turning them
/// into [`Vacancy`](crate::models::vacancy::Vacancy) values is the caller's
/// job, so a source only has to know its own wire format.
#[async_trait]
pub trait VacancyProvider: Send + Sync {
    /// Human-readable name of this provider (for logs/errors).
    fn name(&self) -> &str;

    /// Run a free-text search and return the raw listing records.
    async fn search(&self, query: &str) -> Result<Vec<Value>, CoreError>;
}
