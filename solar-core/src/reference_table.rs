use crate::error::ConfigurationError;
use crate::month::Month;
use csv::{ReaderBuilder, Trim};
use serde::Serialize;
use std::collections::BTreeMap;

/// Embedded default reference table.
pub static MONTHLY_REFERENCE_CSV: &str = include_str!("../../fixtures/monthly_reference.csv");

/// Converts the raw imagery value (Wh/m² per year) into kWh/m².
pub const DEFAULT_RAW_SCALE: f64 = 0.001;

/// Allowed drift of the twelve insolation shares away from 1.
pub const SHARE_SUM_TOLERANCE: f64 = 1e-3;

const SOURCE_NAME: &str = "monthly reference table";

/// Baseline coefficients for one month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyReference {
    pub sun_hours: f64,
    pub shade_hours: f64,
    /// Fraction of the annual insolation received in this month
    pub insolation_share: f64,
}

/// Validated twelve-month reference table.
///
/// Every month is present exactly once; this is checked when the table is
/// built so lookups never have to deal with a missing key.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReferenceTable {
    entries: BTreeMap<Month, MonthlyReference>,
    raw_scale: f64,
}

impl MonthlyReferenceTable {
    /// Load the table shipped in `fixtures/monthly_reference.csv`.
    pub fn embedded() -> Result<Self, ConfigurationError> {
        Self::from_csv(MONTHLY_REFERENCE_CSV, DEFAULT_RAW_SCALE)
    }

    /// Parse a reference table from CSV.
    ///
    /// Expected columns (with headers): `month,sun_hours,shade_hours,insolation_share`
    pub fn from_csv(csv_object: &str, raw_scale: f64) -> Result<Self, ConfigurationError> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(csv_object.as_bytes());

        let mut rows = Vec::new();
        for (index, result) in rdr.records().enumerate() {
            let record = result.map_err(|source| ConfigurationError::Csv {
                source_name: SOURCE_NAME,
                source,
            })?;
            let row = index + 1;
            let key = record.get(0).unwrap_or_default().to_string();
            let reference = MonthlyReference {
                sun_hours: parse_coefficient(record.get(1), row, "sun_hours")?,
                shade_hours: parse_coefficient(record.get(2), row, "shade_hours")?,
                insolation_share: parse_coefficient(record.get(3), row, "insolation_share")?,
            };
            rows.push((key, reference));
        }
        let table = Self::from_rows(rows, raw_scale)?;
        log::info!("loaded {} with {} months", SOURCE_NAME, table.entries.len());
        Ok(table)
    }

    /// Build a table from `(month key, coefficients)` rows.
    pub fn from_rows(
        rows: Vec<(String, MonthlyReference)>,
        raw_scale: f64,
    ) -> Result<Self, ConfigurationError> {
        if !raw_scale.is_finite() || raw_scale <= 0.0 {
            return Err(ConfigurationError::InvalidScale(raw_scale));
        }
        if rows.len() != 12 {
            return Err(ConfigurationError::WrongMonthCount(rows.len()));
        }

        let mut entries = BTreeMap::new();
        for (index, (key, reference)) in rows.into_iter().enumerate() {
            let row = index + 1;
            let month = Month::from_abbr(&key).ok_or_else(|| ConfigurationError::InvalidRow {
                source_name: SOURCE_NAME,
                row,
                message: format!("unknown month key {:?}", key),
            })?;
            for (name, value) in [
                ("sun_hours", reference.sun_hours),
                ("shade_hours", reference.shade_hours),
                ("insolation_share", reference.insolation_share),
            ] {
                if !value.is_finite() || value < 0.0 {
                    return Err(ConfigurationError::InvalidRow {
                        source_name: SOURCE_NAME,
                        row,
                        message: format!("{} must be a non-negative number, got {}", name, value),
                    });
                }
            }
            if entries.insert(month, reference).is_some() {
                return Err(ConfigurationError::DuplicateMonth(month.abbr().to_string()));
            }
        }

        let share_sum: f64 = entries.values().map(|r| r.insolation_share).sum();
        if (share_sum - 1.0).abs() > SHARE_SUM_TOLERANCE {
            return Err(ConfigurationError::ShareSum(share_sum));
        }

        Ok(Self { entries, raw_scale })
    }

    pub fn get(&self, month: Month) -> &MonthlyReference {
        &self.entries[&month]
    }

    pub fn raw_scale(&self) -> f64 {
        self.raw_scale
    }

    /// Entries in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = (Month, &MonthlyReference)> + '_ {
        self.entries.iter().map(|(month, reference)| (*month, reference))
    }
}

fn parse_coefficient(
    field: Option<&str>,
    row: usize,
    name: &str,
) -> Result<f64, ConfigurationError> {
    let text = field.unwrap_or_default();
    text.parse::<f64>().map_err(|_| ConfigurationError::InvalidRow {
        source_name: SOURCE_NAME,
        row,
        message: format!("{} is not a number: {:?}", name, text),
    })
}
