//! Command implementations for the solar report CLI.
//!
//! Every subcommand runs one point query against the reference data and
//! then renders, exports or hands off the resulting report.

use clap::{Args, Subcommand};
use std::path::PathBuf;

pub mod export;
pub mod input;
pub mod report;

/// The sampled point plus the reference data to evaluate it against.
#[derive(Args, Debug, Clone)]
pub struct QueryArgs {
    /// Raw annual insolation sampled at the point (Wh/m²); 0 means no data
    #[arg(short = 'v', long, allow_negative_numbers = true)]
    pub raw_value: f64,

    /// Confidence flag reported by the imagery service (high, medium, low)
    #[arg(long)]
    pub confidence: Option<String>,

    /// Acquisition date of the imagery, YYYY-MM-DD or YYYYMMDD
    #[arg(short = 'd', long, default_value = "")]
    pub collect_date: String,

    /// Longitude of the clicked point in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lng: f64,

    /// Latitude of the clicked point in degrees
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Postal code used to look up the serving utility
    #[arg(short = 'z', long)]
    pub postal_code: String,

    /// Site name; also names the saved document
    #[arg(short = 's', long)]
    pub site_name: Option<String>,

    /// Monthly reference table CSV (defaults to the bundled table)
    #[arg(long)]
    pub reference_csv: Option<PathBuf>,

    /// Utility directory CSV (defaults to the bundled directory)
    #[arg(long)]
    pub utilities_csv: Option<PathBuf>,

    /// Factor applied to the raw value before the monthly shares
    #[arg(long, default_value_t = solar_core::reference_table::DEFAULT_RAW_SCALE)]
    pub raw_scale: f64,
}

/// Overrides for the static report settings.
#[derive(Args, Debug, Clone, Default)]
pub struct ReportArgs {
    /// Report title printed on page one
    #[arg(long)]
    pub title: Option<String>,

    /// Installer search URL; the utility postal code is appended
    #[arg(long)]
    pub installers_url: Option<String>,

    /// Solar incentives URL
    #[arg(long)]
    pub incentives_url: Option<String>,

    /// Typical installed system cost in dollars, shown on the summary
    #[arg(long)]
    pub system_cost: Option<f64>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute the report for a point and print it as JSON
    Report {
        #[command(flatten)]
        query: QueryArgs,

        #[command(flatten)]
        report: ReportArgs,

        /// Write the JSON to this file instead of stdout
        #[arg(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Build the paginated export document and save or print it
    Export {
        #[command(flatten)]
        query: QueryArgs,

        #[command(flatten)]
        report: ReportArgs,

        /// Directory the document manifest is written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,

        /// Send the document to print instead of saving it
        #[arg(long)]
        print: bool,

        /// JPEG or PNG logo for page one (defaults to the bundled logo)
        #[arg(long)]
        logo: Option<PathBuf>,
    },

    /// Convert the on-screen report straight to PDF
    HtmlPdf,
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Report {
            query,
            report,
            output,
        } => report::run_report(&query, &report, output.as_deref()),
        Command::Export {
            query,
            report,
            out_dir,
            print,
            logo,
        } => export::run_export(&query, &report, &out_dir, print, logo.as_deref()),
        Command::HtmlPdf => export::run_html_pdf(),
    }
}
