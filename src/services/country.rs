use crate::models::country::{CountryName, CountryRecord, Idd};
use crate::utils::file::{ensure_dir_exists, FileError};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum CountryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("File error: {0}")]
    FileError(#[from] FileError),
}

/// Canonicalizes a user-supplied query string: trim plus lowercase.
/// Absent or blank input yields `None`.
pub fn normalize_query(raw: Option<&str>) -> Option<String> {
    let normalized = raw?.trim().to_lowercase();
    if normalized.is_empty() {
        None
    } else {
        Some(normalized)
    }
}

pub struct CountryService {
    records: Vec<CountryRecord>,
    by_code: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl CountryService {
    pub fn new(dataset_path: &Path) -> Result<Self, CountryError> {
        let records = if !dataset_path.exists() {
            let default_records = Self::create_default_dataset();
            if let Some(parent) = dataset_path.parent() {
                ensure_dir_exists(parent)?;
            }
            let json_content = serde_json::to_string_pretty(&default_records)?;
            std::fs::write(dataset_path, json_content)?;
            default_records
        } else {
            let content = std::fs::read_to_string(dataset_path)?;
            serde_json::from_str(&content)?
        };

        Ok(Self::from_records(records))
    }

    /// Builds the lookup indexes over an already-loaded dataset.
    ///
    /// Codes and common names are expected to be unique under
    /// case-insensitive comparison; on a collision the first record in
    /// dataset order wins and the duplicate is logged.
    pub fn from_records(records: Vec<CountryRecord>) -> Self {
        let mut by_code = HashMap::new();
        let mut by_name = HashMap::new();

        for (index, record) in records.iter().enumerate() {
            if let Some(code) = &record.cca2 {
                let key = code.trim().to_lowercase();
                if !key.is_empty() {
                    match by_code.entry(key) {
                        Entry::Occupied(entry) => {
                            warn!(
                                "Duplicate country code '{}' in dataset, keeping first entry",
                                entry.key()
                            );
                        }
                        Entry::Vacant(entry) => {
                            entry.insert(index);
                        }
                    }
                }
            }

            let key = record.name.common.trim().to_lowercase();
            if !key.is_empty() {
                match by_name.entry(key) {
                    Entry::Occupied(entry) => {
                        warn!(
                            "Duplicate country name '{}' in dataset, keeping first entry",
                            entry.key()
                        );
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(index);
                    }
                }
            }
        }

        Self {
            records,
            by_code,
            by_name,
        }
    }

    /// Resolves a normalized query to a record, code match first.
    pub fn lookup(&self, query: &str) -> Option<&CountryRecord> {
        self.by_code
            .get(query)
            .or_else(|| self.by_name.get(query))
            .map(|&index| &self.records[index])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn create_default_dataset() -> Vec<CountryRecord> {
        fn record(
            cca2: &str,
            name: &str,
            capital: &str,
            currency: &str,
            idd_root: &str,
            idd_suffixes: &[&str],
            region: &str,
            timezones: &[&str],
        ) -> CountryRecord {
            CountryRecord {
                cca2: Some(cca2.to_string()),
                name: CountryName {
                    common: name.to_string(),
                },
                capital: vec![capital.to_string()],
                currencies: vec![currency.to_string()],
                idd: Idd {
                    root: Some(idd_root.to_string()),
                    suffixes: idd_suffixes.iter().map(|s| s.to_string()).collect(),
                },
                region: region.to_string(),
                timezones: timezones.iter().map(|s| s.to_string()).collect(),
            }
        }

        vec![
            record(
                "US",
                "United States",
                "Washington, D.C.",
                "USD",
                "+1",
                &["201"],
                "Americas",
                &["UTC-10:00", "UTC-08:00", "UTC-07:00", "UTC-06:00", "UTC-05:00"],
            ),
            record(
                "CA",
                "Canada",
                "Ottawa",
                "CAD",
                "+1",
                &["204"],
                "Americas",
                &["UTC-08:00", "UTC-07:00", "UTC-06:00", "UTC-05:00", "UTC-04:00"],
            ),
            record(
                "GB",
                "United Kingdom",
                "London",
                "GBP",
                "+4",
                &["4"],
                "Europe",
                &["UTC"],
            ),
            record(
                "DE",
                "Germany",
                "Berlin",
                "EUR",
                "+4",
                &["9"],
                "Europe",
                &["UTC+01:00"],
            ),
            record(
                "FR",
                "France",
                "Paris",
                "EUR",
                "+3",
                &["3"],
                "Europe",
                &["UTC+01:00"],
            ),
            record(
                "IT",
                "Italy",
                "Rome",
                "EUR",
                "+3",
                &["9"],
                "Europe",
                &["UTC+01:00"],
            ),
            record(
                "ES",
                "Spain",
                "Madrid",
                "EUR",
                "+3",
                &["4"],
                "Europe",
                &["UTC", "UTC+01:00"],
            ),
            record(
                "AU",
                "Australia",
                "Canberra",
                "AUD",
                "+6",
                &["1"],
                "Oceania",
                &["UTC+08:00", "UTC+09:30", "UTC+10:00"],
            ),
            record(
                "JP",
                "Japan",
                "Tokyo",
                "JPY",
                "+8",
                &["1"],
                "Asia",
                &["UTC+09:00"],
            ),
            record(
                "CN",
                "China",
                "Beijing",
                "CNY",
                "+8",
                &["6"],
                "Asia",
                &["UTC+08:00"],
            ),
            record(
                "IN",
                "India",
                "New Delhi",
                "INR",
                "+9",
                &["1"],
                "Asia",
                &["UTC+05:30"],
            ),
            record(
                "BR",
                "Brazil",
                "Brasília",
                "BRL",
                "+5",
                &["5"],
                "Americas",
                &["UTC-05:00", "UTC-04:00", "UTC-03:00"],
            ),
            record(
                "MX",
                "Mexico",
                "Mexico City",
                "MXN",
                "+5",
                &["2"],
                "Americas",
                &["UTC-08:00", "UTC-07:00", "UTC-06:00"],
            ),
            record(
                "RU",
                "Russia",
                "Moscow",
                "RUB",
                "+7",
                &[],
                "Europe",
                &["UTC+03:00", "UTC+05:00", "UTC+07:00", "UTC+09:00", "UTC+12:00"],
            ),
        ]
    }
}
