//! `report` subcommand: compute and print the report as JSON.

use crate::input::{report_config, run_query};
use crate::{QueryArgs, ReportArgs};
use anyhow::Context;
use log::info;
use serde::Serialize;
use solar_core::query::QueryResult;
use solar_report::document::logo::LogoAsset;
use solar_report::{Report, ReportSession};
use std::path::Path;

#[derive(Serialize)]
struct ReportOutput<'a> {
    query: &'a QueryResult,
    report: &'a Report,
}

pub fn run_report(
    query_args: &QueryArgs,
    report_args: &ReportArgs,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let query = run_query(query_args)?;
    let mut session = ReportSession::new(report_config(report_args), LogoAsset::embedded());
    session.submit(query);

    let (Some(query), Some(report)) = (session.query(), session.report()) else {
        anyhow::bail!("report session is empty after submit");
    };
    let json = serde_json::to_string_pretty(&ReportOutput { query, report })?;

    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Report written to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
