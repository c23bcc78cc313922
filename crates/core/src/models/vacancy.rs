use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

/// A single job listing.
///
/// Records come either from the search API (see [`Vacancy::from_raw`]) or
/// from the JSON document on disk. Loaded records are not re-validated:
/// `salary_from > salary_to` or a record without any bound is tolerated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vacancy {
    /// Identifier assigned by the listing site, unique within the collection
    pub id: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,

    /// Public page of the listing
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,

    /// Lower salary bound
    #[serde(default)]
    pub salary_from: Option<i64>,

    /// Upper salary bound
    #[serde(default)]
    pub salary_to: Option<i64>,

    /// Currency code as reported by the listing site (e.g. "RUR", "USD")
    #[serde(default)]
    pub currency: Option<String>,

    /// Short text used for keyword search
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

impl Vacancy {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        url: impl Into<String>,
        salary_from: Option<i64>,
        salary_to: Option<i64>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            url: url.into(),
            salary_from,
            salary_to,
            currency: None,
            description: String::new(),
        }
    }

    /// Builder-style setter for the currency.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Builder-style setter for the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Build a vacancy from one raw API record.
    ///
    /// Returns `None` only when the record carries no usable `id`. Every
    /// other field is optional and defaults to empty / absent:
    /// - `title` ← `name`, falling back to `title`
    /// - `url` ← `alternate_url`, falling back to `url`
    /// - `salary.from` / `salary.to` / `salary.currency` (a missing or null
    ///   `salary` object means both bounds are absent)
    /// - `description` ← `description` if it is a string, otherwise
    ///   `snippet.requirement` and `snippet.responsibility` joined by a space
    pub fn from_raw(raw: &Value) -> Option<Self> {
        let id = match raw.get("id")? {
            Value::String(s) if !s.is_empty() => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };

        let title = first_str(raw, &["name", "title"]).unwrap_or_default();
        let url = first_str(raw, &["alternate_url", "url"]).unwrap_or_default();

        let salary = raw.get("salary").filter(|s| s.is_object());
        let salary_from = salary.and_then(|s| as_integer(s.get("from")));
        let salary_to = salary.and_then(|s| as_integer(s.get("to")));
        let currency = salary
            .and_then(|s| s.get("currency"))
            .and_then(Value::as_str)
            .map(str::to_string);

        let description = match raw.get("description").and_then(Value::as_str) {
            Some(text) => text.to_string(),
            None => snippet_text(raw),
        };

        Some(Self {
            id,
            title,
            url,
            salary_from,
            salary_to,
            currency,
            description,
        })
    }

    /// Convert a batch of raw API records, skipping records without an id.
    pub fn from_raw_list(raw: &[Value]) -> Vec<Self> {
        raw.iter().filter_map(Self::from_raw).collect()
    }

    /// Primary sort key: `salary_from`, or `salary_to` when the lower bound is missing.
    pub fn salary_key(&self) -> Option<i64> {
        self.salary_from.or(self.salary_to)
    }
}

/// Compare two vacancies by salary (ascending).
///
/// Primary key is `salary_from` (falling back to `salary_to`), secondary key
/// is `salary_to` (falling back to `salary_from`). A vacancy without any
/// bound sorts below every vacancy that has one. Equal keys yield
/// `Ordering::Equal`, so stable sorts keep the input order of ties.
pub fn compare_by_salary(a: &Vacancy, b: &Vacancy) -> Ordering {
    let secondary = |v: &Vacancy| v.salary_to.or(v.salary_from);
    a.salary_key()
        .cmp(&b.salary_key())
        .then_with(|| secondary(a).cmp(&secondary(b)))
}

impl std::fmt::Display for Vacancy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let currency = self.currency.as_deref().unwrap_or("");
        let salary = match (self.salary_from, self.salary_to) {
            (Some(from), Some(to)) => format!("{from} - {to} {currency}"),
            (Some(from), None) => format!("from {from} {currency}"),
            (None, Some(to)) => format!("up to {to} {currency}"),
            (None, None) => "not specified".to_string(),
        };

        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Title: {}", self.title)?;
        writeln!(f, "Salary: {}", salary.trim_end())?;
        writeln!(f, "URL: {}", self.url)?;
        write!(f, "Description: {}", self.description)
    }
}

/// Read a JSON `null` text field as an empty string.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ── Raw record helpers ──────────────────────────────────────────────

fn first_str(raw: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|k| raw.get(*k).and_then(Value::as_str))
        .map(str::to_string)
}

fn as_integer(value: Option<&Value>) -> Option<i64> {
    let value = value?;
    value.as_i64().or_else(|| value.as_f64().map(|f| f as i64))
}

fn snippet_text(raw: &Value) -> String {
    let Some(snippet) = raw.get("snippet") else {
        return String::new();
    };
    ["requirement", "responsibility"]
        .iter()
        .filter_map(|k| snippet.get(*k).and_then(Value::as_str))
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
