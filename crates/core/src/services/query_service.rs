//! Pure query functions over in-memory vacancy lists.
//!
//! No I/O, no API calls. Every function returns a new `Vec` and leaves its
//! input untouched. [`parse_amount`] validates the numbers these functions
//! take when they come from user input.

use std::str::FromStr;

use crate::errors::CoreError;
use crate::models::settings::DEFAULT_SALARY_TOLERANCE;
use crate::models::vacancy::{compare_by_salary, Vacancy};

/// Keep the vacancies whose salary range is compatible with `desired_salary`.
///
/// - both bounds: `from <= desired <= to`
/// - only `from`: `from <= desired <= from + 10000`
/// - only `to`: `to - 10000 <= desired <= to`
/// - no bounds: excluded
///
/// Input order is preserved.
pub fn filter_by_salary(vacancies: &[Vacancy], desired_salary: i64) -> Vec<Vacancy> {
    filter_by_salary_with_tolerance(vacancies, desired_salary, DEFAULT_SALARY_TOLERANCE)
}

/// Same as [`filter_by_salary`] with a custom width for single-bound ranges.
pub fn filter_by_salary_with_tolerance(
    vacancies: &[Vacancy],
    desired_salary: i64,
    tolerance: i64,
) -> Vec<Vacancy> {
    vacancies
        .iter()
        .filter(|v| salary_matches(v, desired_salary, tolerance))
        .cloned()
        .collect()
}

fn salary_matches(vacancy: &Vacancy, desired: i64, tolerance: i64) -> bool {
    match (vacancy.salary_from, vacancy.salary_to) {
        (Some(from), Some(to)) => from <= desired && desired <= to,
        (Some(from), None) => from <= desired && desired <= from.saturating_add(tolerance),
        (None, Some(to)) => to.saturating_sub(tolerance) <= desired && desired <= to,
        (None, None) => false,
    }
}

/// Sort by [`compare_by_salary`], highest first. Ties keep their input order.
pub fn sort_descending(vacancies: &[Vacancy]) -> Vec<Vacancy> {
    let mut sorted = vacancies.to_vec();
    sorted.sort_by(|a, b| compare_by_salary(b, a));
    sorted
}

/// The first `n` vacancies, or all of them when there are fewer than `n`.
pub fn top_n(vacancies: &[Vacancy], n: usize) -> Vec<Vacancy> {
    vacancies.iter().take(n).cloned().collect()
}

/// Whether the description contains any of `keywords`, ignoring case.
///
/// Blank keywords never match, so an empty or all-blank list matches nothing.
pub fn matches_keywords(vacancy: &Vacancy, keywords: &[String]) -> bool {
    let description = vacancy.description.to_lowercase();
    keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .any(|k| description.contains(&k.to_lowercase()))
}

/// Keep the vacancies matching [`matches_keywords`], in input order.
pub fn filter_by_keywords(vacancies: &[Vacancy], keywords: &[String]) -> Vec<Vacancy> {
    vacancies
        .iter()
        .filter(|v| matches_keywords(v, keywords))
        .cloned()
        .collect()
}

/// Parse a user-entered count or salary.
///
/// Only non-empty runs of ASCII digits are accepted (surrounding whitespace
/// is ignored). Signs, separators and values that overflow `T` are rejected.
pub fn parse_amount<T: FromStr>(input: &str) -> Result<T, CoreError> {
    let trimmed = input.trim();
    let invalid = || {
        CoreError::Validation(format!("expected a whole non-negative number, got {trimmed:?}"))
    };
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    trimmed.parse().map_err(|_| invalid())
}
