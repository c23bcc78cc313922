use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::errors::CoreError;
use crate::models::vacancy::Vacancy;
use crate::services::query_service;

use super::traits::VacancyStorage;

/// Vacancy collection stored as a single JSON array on disk.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so a reader sees either the old or the new document.
#[derive(Debug, Clone)]
pub struct JsonVacancyStorage {
    path: PathBuf,
}

impl JsonVacancyStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_all(&self, vacancies: &[Vacancy]) -> Result<(), CoreError> {
        let json = serde_json::to_vec_pretty(vacancies)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize vacancies: {e}")))?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(&json)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path)?;

        debug!(path = %self.path.display(), count = vacancies.len(), "wrote vacancy document");
        Ok(())
    }
}

/// Merge `batch` into `existing` by id: known ids are replaced in place,
/// new ids are appended in batch order.
fn merge_by_id(existing: &mut Vec<Vacancy>, batch: &[Vacancy]) {
    let mut index: HashMap<String, usize> = existing
        .iter()
        .enumerate()
        .map(|(i, v)| (v.id.clone(), i))
        .collect();

    for vacancy in batch {
        match index.get(&vacancy.id) {
            Some(&i) => existing[i] = vacancy.clone(),
            None => {
                index.insert(vacancy.id.clone(), existing.len());
                existing.push(vacancy.clone());
            }
        }
    }
}

impl VacancyStorage for JsonVacancyStorage {
    fn load(&self) -> Vec<Vacancy> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "vacancy document not found, starting empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "cannot read vacancy document");
                return Vec::new();
            }
        };

        if text.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str::<Vec<Vacancy>>(&text) {
            Ok(vacancies) => vacancies,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "malformed vacancy document, ignoring");
                Vec::new()
            }
        }
    }

    fn add(&self, vacancies: &[Vacancy]) -> Result<(), CoreError> {
        let mut stored = self.load();
        merge_by_id(&mut stored, vacancies);
        self.write_all(&stored)
    }

    fn replace(&self, vacancies: &[Vacancy]) -> Result<(), CoreError> {
        let mut fresh = Vec::with_capacity(vacancies.len());
        merge_by_id(&mut fresh, vacancies);
        self.write_all(&fresh)
    }

    fn find_by_keywords(&self, keywords: &[String]) -> Vec<Vacancy> {
        if keywords.is_empty() {
            return Vec::new();
        }
        query_service::filter_by_keywords(&self.load(), keywords)
    }

    fn delete(&self, id: &str) -> Result<bool, CoreError> {
        let mut stored = self.load();
        let Some(idx) = stored.iter().position(|v| v.id == id) else {
            return Ok(false);
        };
        stored.remove(idx);
        self.write_all(&stored)?;
        Ok(true)
    }
}
