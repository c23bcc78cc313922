use crate::errors::CoreError;
use crate::models::vacancy::Vacancy;

/// Trait abstraction over the persisted vacancy collection.
///
/// Every operation is a full read-modify-write of the collection. The read
/// path never fails: a missing or unreadable backing store is an empty
/// collection. Write failures are always returned to the caller.
pub trait VacancyStorage: Send + Sync {
    /// Read the whole collection, or an empty one if it cannot be read.
    fn load(&self) -> Vec<Vacancy>;

    /// Merge `vacancies` into the collection, replacing records with the same id.
    fn add(&self, vacancies: &[Vacancy]) -> Result<(), CoreError>;

    /// Overwrite the collection with exactly `vacancies` (deduplicated by id).
    fn replace(&self, vacancies: &[Vacancy]) -> Result<(), CoreError>;

    /// The full collection in stored order.
    fn list(&self) -> Vec<Vacancy> {
        self.load()
    }

    /// Vacancies whose description contains any keyword, ignoring case.
    fn find_by_keywords(&self, keywords: &[String]) -> Vec<Vacancy>;

    /// Remove the vacancy with `id`. Returns `false` if no such vacancy exists.
    fn delete(&self, id: &str) -> Result<bool, CoreError>;
}
