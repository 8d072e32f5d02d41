use crate::error::ConfigurationError;
use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sample utility directory shipped in `fixtures/utilities.csv`.
pub static UTILITIES_CSV: &str = include_str!("../../fixtures/utilities.csv");

/// Name shown when no utility serves the postal code.
pub const UNKNOWN_UTILITY_NAME: &str = "Unknown utility";

const SOURCE_NAME: &str = "utility directory";

/// An electric utility company.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct UtilityRecord {
    pub full_name: String,
    pub street: String,
    pub city: String,
    /// Postal code, also the directory key
    pub zip: String,
    pub phone: String,
}

impl UtilityRecord {
    /// Placeholder returned when a postal code has no match.
    pub fn unknown() -> Self {
        Self {
            full_name: UNKNOWN_UTILITY_NAME.to_string(),
            street: String::new(),
            city: String::new(),
            zip: String::new(),
            phone: String::new(),
        }
    }

    pub fn is_unknown(&self) -> bool {
        *self == Self::unknown()
    }
}

/// Utility records keyed by postal code. Read-only once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct UtilityDirectory {
    by_zip: HashMap<String, UtilityRecord>,
}

impl UtilityDirectory {
    /// Load the directory shipped in `fixtures/utilities.csv`.
    pub fn embedded() -> Result<Self, ConfigurationError> {
        Self::from_csv(UTILITIES_CSV)
    }

    /// Parse a CSV string of utility companies.
    ///
    /// Expected columns (with headers): `zip,full_name,street,city,phone`
    pub fn from_csv(csv_object: &str) -> Result<Self, ConfigurationError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(csv_object.as_bytes());
        let mut records = Vec::new();
        for result in rdr.deserialize::<UtilityRecord>() {
            let record = result.map_err(|source| ConfigurationError::Csv {
                source_name: SOURCE_NAME,
                source,
            })?;
            records.push(record);
        }
        let directory = Self::from_records(records)?;
        log::info!("loaded {} with {} utilities", SOURCE_NAME, directory.len());
        Ok(directory)
    }

    pub fn from_records(records: Vec<UtilityRecord>) -> Result<Self, ConfigurationError> {
        if records.is_empty() {
            return Err(ConfigurationError::EmptyDirectory);
        }
        let mut by_zip = HashMap::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            if record.zip.is_empty() {
                return Err(ConfigurationError::InvalidRow {
                    source_name: SOURCE_NAME,
                    row: index + 1,
                    message: "postal code is empty".to_string(),
                });
            }
            let zip = record.zip.clone();
            if by_zip.insert(zip.clone(), record).is_some() {
                return Err(ConfigurationError::DuplicatePostalCode(zip));
            }
        }
        Ok(Self { by_zip })
    }

    /// Exact postal-code lookup; the unknown record on a miss.
    pub fn resolve(&self, postal_code: &str) -> UtilityRecord {
        match self.by_zip.get(postal_code.trim()) {
            Some(record) => record.clone(),
            None => {
                log::info!("no utility for postal code {:?}", postal_code);
                UtilityRecord::unknown()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.by_zip.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_zip.is_empty()
    }
}

/// Resolve the utility serving `postal_code`. Never fails.
pub fn resolve(postal_code: &str, directory: &UtilityDirectory) -> UtilityRecord {
    directory.resolve(postal_code)
}
