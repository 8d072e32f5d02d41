//! `export` and `html-pdf` subcommands.

use crate::input::{report_config, run_query};
use crate::{QueryArgs, ReportArgs};
use log::{info, warn};
use solar_report::document::export::{ExportAction, ExportOutcome, ManifestSink};
use solar_report::document::logo::LogoAsset;
use solar_report::notice::UserNotice;
use solar_report::ReportSession;
use std::path::Path;

pub fn run_export(
    query_args: &QueryArgs,
    report_args: &ReportArgs,
    out_dir: &Path,
    print: bool,
    logo: Option<&Path>,
) -> anyhow::Result<()> {
    let logo = match logo {
        Some(path) => LogoAsset::from_path(path)?,
        None => LogoAsset::embedded(),
    };
    let mut session = ReportSession::new(report_config(report_args), logo);
    session.submit(run_query(query_args)?);

    let action = if print {
        ExportAction::Print
    } else {
        ExportAction::Save
    };
    let mut sink = ManifestSink::new(out_dir);
    match session.export(action, &mut sink)? {
        Some(ExportOutcome::Saved { file_name }) => info!("Saved {}", file_name),
        Some(ExportOutcome::Printed { pages }) => info!("Printed {} pages", pages),
        Some(ExportOutcome::Notice(notice)) => show(&notice),
        None => warn!("Nothing to export"),
    }
    for path in sink.written() {
        println!("{}", path.display());
    }
    Ok(())
}

pub fn run_html_pdf() -> anyhow::Result<()> {
    show(&UserNotice::under_construction());
    Ok(())
}

fn show(notice: &UserNotice) {
    warn!("{:?} notice shown for {} ms", notice.alert_type, notice.duration_ms);
    eprintln!("{}", notice);
}
