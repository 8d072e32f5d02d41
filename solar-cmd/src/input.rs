//! Loading reference data and turning command arguments into a query.

use crate::{QueryArgs, ReportArgs};
use anyhow::Context;
use solar_core::location::Location;
use solar_core::query::{execute, QueryRequest, QueryResult};
use solar_core::reference_table::{MonthlyReferenceTable, MONTHLY_REFERENCE_CSV};
use solar_core::sample::RawSample;
use solar_core::utility::{UtilityDirectory, UTILITIES_CSV};
use solar_report::ReportConfig;
use std::path::Path;

fn read_or_embedded(path: Option<&Path>, embedded: &'static str) -> anyhow::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => Ok(embedded.to_string()),
    }
}

pub fn load_reference_table(args: &QueryArgs) -> anyhow::Result<MonthlyReferenceTable> {
    let csv = read_or_embedded(args.reference_csv.as_deref(), MONTHLY_REFERENCE_CSV)?;
    Ok(MonthlyReferenceTable::from_csv(&csv, args.raw_scale)?)
}

pub fn load_utility_directory(args: &QueryArgs) -> anyhow::Result<UtilityDirectory> {
    let csv = read_or_embedded(args.utilities_csv.as_deref(), UTILITIES_CSV)?;
    Ok(UtilityDirectory::from_csv(&csv)?)
}

pub fn request_from(args: &QueryArgs) -> QueryRequest {
    let mut sample = RawSample::new(args.raw_value, args.collect_date.as_str());
    if let Some(flag) = &args.confidence {
        sample = sample.with_confidence(flag.as_str());
    }
    QueryRequest {
        location: Location::from_geographic(args.lng, args.lat),
        sample,
        postal_code: args.postal_code.clone(),
        site_name: args.site_name.clone(),
    }
}

/// Load the reference data and run the query. Configuration problems are
/// fatal here, before anything is rendered.
pub fn run_query(args: &QueryArgs) -> anyhow::Result<QueryResult> {
    let table = load_reference_table(args).context("invalid monthly reference table")?;
    let directory = load_utility_directory(args).context("invalid utility directory")?;
    Ok(execute(&request_from(args), &table, &directory))
}

pub fn report_config(args: &ReportArgs) -> ReportConfig {
    let mut config = ReportConfig::default();
    if let Some(title) = &args.title {
        config.title = title.clone();
    }
    if let Some(url) = &args.installers_url {
        config.installers_url = url.clone();
    }
    if let Some(url) = &args.incentives_url {
        config.incentives_url = url.clone();
    }
    config.system_cost = args.system_cost;
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use solar_core::sample::Quality;

    fn args() -> QueryArgs {
        QueryArgs {
            raw_value: 1_000_000.0,
            confidence: Some("high".to_string()),
            collect_date: "20120501".to_string(),
            lng: -93.265,
            lat: 44.9778,
            postal_code: "55401".to_string(),
            site_name: Some("Home".to_string()),
            reference_csv: None,
            utilities_csv: None,
            raw_scale: solar_core::reference_table::DEFAULT_RAW_SCALE,
        }
    }

    #[test]
    fn test_run_query_with_bundled_data() {
        let result = run_query(&args()).unwrap();
        assert_eq!(result.quality(), Quality::High);
        assert_eq!(result.collect_date(), "2012-05-01");
        assert_eq!(result.utility_company().full_name, "Xcel Energy");
    }

    #[test]
    fn test_bad_scale_is_fatal() {
        let args = QueryArgs {
            raw_scale: 0.0,
            ..args()
        };
        let err = run_query(&args).unwrap_err();
        assert!(format!("{:#}", err).contains("scale"));
    }

    #[test]
    fn test_missing_reference_file_is_fatal() {
        let args = QueryArgs {
            reference_csv: Some("does/not/exist.csv".into()),
            ..args()
        };
        assert!(run_query(&args).is_err());
    }

    #[test]
    fn test_report_overrides() {
        let config = report_config(&ReportArgs {
            title: Some("Site Survey".to_string()),
            system_cost: Some(20_000.0),
            ..ReportArgs::default()
        });
        assert_eq!(config.title, "Site Survey");
        assert_eq!(config.system_cost, Some(20_000.0));
        assert_eq!(config.state, "MN");
    }
}
