use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryName {
    pub common: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Idd {
    #[serde(default)]
    pub root: Option<String>,
    #[serde(default)]
    pub suffixes: Vec<String>,
}

/// One entry of the country dataset, loaded once at startup and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryRecord {
    #[serde(default)]
    pub cca2: Option<String>,
    pub name: CountryName,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub currencies: Vec<String>,
    #[serde(default)]
    pub idd: Idd,
    pub region: String,
    #[serde(default)]
    pub timezones: Vec<String>,
}

/// Public projection of a [`CountryRecord`]. Absent fields become empty
/// strings rather than nulls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryView {
    pub code: String,
    pub name: String,
    pub capital: String,
    pub currency: String,
    pub phone_code: String,
    pub continent: String,
    pub time_zones: Vec<String>,
}

impl From<&CountryRecord> for CountryView {
    fn from(record: &CountryRecord) -> Self {
        let phone_code = match &record.idd.root {
            Some(root) => format!(
                "{}{}",
                root,
                record.idd.suffixes.first().map(String::as_str).unwrap_or("")
            ),
            None => String::new(),
        };

        Self {
            code: record.cca2.clone().unwrap_or_default(),
            name: record.name.common.clone(),
            capital: record.capital.first().cloned().unwrap_or_default(),
            currency: record.currencies.first().cloned().unwrap_or_default(),
            phone_code,
            continent: record.region.clone(),
            time_zones: record.timezones.clone(),
        }
    }
}
