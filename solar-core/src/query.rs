use crate::calculator::{self, SolarMetrics};
use crate::location::Location;
use crate::month::OrderedMonthSet;
use crate::reference_table::MonthlyReferenceTable;
use crate::sample::{Quality, RawSample};
use crate::utility::{UtilityDirectory, UtilityRecord};
use serde::Serialize;
use solar_utils::dates::normalize_collect_date;

/// Everything the collaborators hand over for one click.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest {
    pub location: Location,
    pub sample: RawSample,
    pub postal_code: String,
    pub site_name: Option<String>,
}

/// Immutable snapshot of one query.
///
/// Built once and then only read; the report builders borrow it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryResult {
    location: Location,
    months: OrderedMonthSet,
    total_per_year: f64,
    average_per_day: f64,
    collect_date: String,
    quality: Quality,
    utility_company: UtilityRecord,
    site_name: Option<String>,
}

impl QueryResult {
    pub fn new(
        location: Location,
        metrics: SolarMetrics,
        collect_date: &str,
        utility_company: UtilityRecord,
        site_name: Option<&str>,
    ) -> Self {
        let site_name = site_name
            .filter(|name| !name.is_empty())
            .map(str::to_string);
        Self {
            location,
            months: metrics.months,
            total_per_year: metrics.total_per_year,
            average_per_day: metrics.average_per_day,
            collect_date: normalize_collect_date(collect_date),
            quality: metrics.quality,
            utility_company,
            site_name,
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn months(&self) -> &OrderedMonthSet {
        &self.months
    }

    pub fn total_per_year(&self) -> f64 {
        self.total_per_year
    }

    pub fn average_per_day(&self) -> f64 {
        self.average_per_day
    }

    pub fn collect_date(&self) -> &str {
        &self.collect_date
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    pub fn utility_company(&self) -> &UtilityRecord {
        &self.utility_company
    }

    /// Site name exactly as entered, if it is not empty.
    pub fn site_name(&self) -> Option<&str> {
        self.site_name.as_deref()
    }
}

/// Run one full query: metrics, utility lookup and metadata.
pub fn execute(
    request: &QueryRequest,
    table: &MonthlyReferenceTable,
    directory: &UtilityDirectory,
) -> QueryResult {
    let metrics = calculator::compute(&request.sample, table);
    let utility = directory.resolve(&request.postal_code);
    QueryResult::new(
        request.location,
        metrics,
        &request.sample.collect_date,
        utility,
        request.site_name.as_deref(),
    )
}
