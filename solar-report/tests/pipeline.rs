use approx::assert_relative_eq;
use solar_core::location::Location;
use solar_core::month::Month;
use solar_core::query::{execute, QueryRequest, QueryResult};
use solar_core::reference_table::MonthlyReferenceTable;
use solar_core::sample::{Quality, RawSample};
use solar_core::utility::UtilityDirectory;
use solar_report::document::export::{
    dispatch, DocumentSink, ExportAction, ExportArtifact, ExportOutcome, ManifestSink,
};
use solar_report::document::logo::LogoAsset;
use solar_report::document::{Block, PaginatedDocument};
use solar_report::field::MonthField;
use solar_report::{Report, ReportConfig, ReportSession};

fn run_query(raw_value: f64, postal_code: &str, site_name: Option<&str>) -> QueryResult {
    let request = QueryRequest {
        location: Location::from_geographic(-93.265, 44.9778),
        sample: RawSample::new(raw_value, "20120501").with_confidence("high"),
        postal_code: postal_code.to_string(),
        site_name: site_name.map(str::to_string),
    };
    execute(
        &request,
        &MonthlyReferenceTable::embedded().unwrap(),
        &UtilityDirectory::embedded().unwrap(),
    )
}

#[test]
fn test_click_to_report() {
    let mut session = ReportSession::new(ReportConfig::default(), LogoAsset::embedded());
    let report = session.submit(run_query(1_000_000.0, "55401", Some("Home")));

    assert_eq!(report.summary.total_per_year, "1000.00 kWh/m²");
    assert_eq!(report.summary.average_per_day, "2.74 kWh/m²");
    assert_eq!(report.summary.collect_date, "2012-05-01");
    assert_eq!(report.summary.quality, "high");
    assert_eq!(report.summary.utility.name, "Xcel Energy");

    let insolation = report.section(MonthField::Insolation).unwrap();
    assert_eq!(insolation.table.rows()[6].month_name, "July");
    assert_eq!(insolation.table.rows()[6].value, "125.00");
    assert_relative_eq!(insolation.series.points[6].value, 125.0, epsilon = 1e-9);

    let sun = report.section(MonthField::SunHours).unwrap();
    assert_eq!(sun.table.rows()[5].value, "5.90");
}

#[test]
fn test_new_query_supersedes_old_one() {
    let first = run_query(1_000_000.0, "55401", None);
    let second = run_query(731_700.0, "55802", None);
    let first_report = Report::build(&first, &ReportConfig::default());
    let first_values = insolation_values(&first_report);

    let mut session = ReportSession::new(ReportConfig::default(), LogoAsset::embedded());
    session.submit(first);
    session.submit(second.clone());

    let report = session.report().unwrap();
    assert_eq!(session.query(), Some(&second));
    assert_eq!(report, &Report::build(&second, session.config()));
    assert_eq!(report.summary.utility.name, "Minnesota Power");

    let insolation = &report.section(MonthField::Insolation).unwrap().table;
    assert_eq!(insolation.rows().len(), 12);
    for row in insolation.rows() {
        assert!(!first_values.contains(&row.value), "stale row {:?}", row);
    }
    for (point, month) in report.sections[0].series.points.iter().zip(Month::ALL) {
        assert_relative_eq!(
            point.value,
            second.months().get(month).insol_value,
            epsilon = 1e-9
        );
    }

    // the export document is built from the second query only
    let second_values = insolation_values(report);
    let texts = document_texts(&session.export_document().unwrap());
    for value in &first_values {
        assert!(!texts.contains(value), "stale document value {}", value);
    }
    for value in &second_values {
        assert!(texts.contains(value), "missing document value {}", value);
    }
    assert!(!texts.contains(&first_report.summary.total_per_year));
    assert!(texts.contains(&report.summary.total_per_year));
    assert!(!texts.contains(&first_report.summary.utility.name));
}

fn insolation_values(report: &Report) -> Vec<String> {
    report
        .section(MonthField::Insolation)
        .unwrap()
        .table
        .rows()
        .iter()
        .map(|row| row.value.clone())
        .collect()
}

fn document_texts(document: &PaginatedDocument) -> Vec<String> {
    document
        .pages()
        .iter()
        .flat_map(|page| page.blocks.iter())
        .filter_map(|block| match block {
            Block::Text { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect()
}

#[test]
fn test_no_data_point_still_reports() {
    let query = run_query(0.0, "12345", None);
    assert_eq!(query.quality(), Quality::Unavailable);

    let mut session = ReportSession::new(ReportConfig::default(), LogoAsset::embedded());
    let report = session.submit(query);
    assert_eq!(report.summary.total_per_year, "0.00 kWh/m²");
    assert_eq!(report.summary.quality, "unavailable");
    assert_eq!(report.summary.utility.name, "Unknown utility");
    let insolation = report.section(MonthField::Insolation).unwrap();
    assert!(insolation.table.rows().iter().all(|row| row.value == "0.00"));
    let shade = report.section(MonthField::ShadeHours).unwrap();
    assert_eq!(shade.table.rows()[0].value, "6.60");

    let document = session.export_document().unwrap();
    assert!(document.page_count() >= 1);
}

#[derive(Default)]
struct CountingSink {
    saves: Vec<(String, usize)>,
    prints: usize,
}

impl DocumentSink for CountingSink {
    fn save(&mut self, artifact: &ExportArtifact<'_>) -> anyhow::Result<()> {
        self.saves.push((artifact.file_name.clone(), artifact.document.page_count()));
        Ok(())
    }

    fn print(&mut self, _document: &PaginatedDocument) -> anyhow::Result<()> {
        self.prints += 1;
        Ok(())
    }
}

#[test]
fn test_every_export_action() {
    let mut session = ReportSession::new(ReportConfig::default(), LogoAsset::embedded());
    session.submit(run_query(1_150_000.0, "55024", Some("Farm")));
    let pages = session.export_document().unwrap().page_count();

    let mut sink = CountingSink::default();
    let saved = session.export(ExportAction::Save, &mut sink).unwrap();
    let printed = session.export(ExportAction::Print, &mut sink).unwrap();
    let notice = session.export(ExportAction::HtmlToPdf, &mut sink).unwrap();

    assert_eq!(
        saved,
        Some(ExportOutcome::Saved {
            file_name: "Farm.pdf".to_string()
        })
    );
    assert_eq!(printed, Some(ExportOutcome::Printed { pages }));
    assert!(matches!(notice, Some(ExportOutcome::Notice(_))));
    assert_eq!(sink.saves, vec![("Farm.pdf".to_string(), pages)]);
    assert_eq!(sink.prints, 1);
}

#[test]
fn test_manifest_sink_writes_json() {
    let out_dir =
        std::env::temp_dir().join(format!("solar-report-manifest-{}", std::process::id()));
    let mut session = ReportSession::new(ReportConfig::default(), LogoAsset::embedded());
    session.submit(run_query(1_150_000.0, "55303", None));
    let document = session.export_document().unwrap();

    let mut sink = ManifestSink::new(&out_dir);
    dispatch(ExportAction::Save, &document, "", &mut sink).unwrap();
    dispatch(ExportAction::Print, &document, "", &mut sink).unwrap();

    let saved = out_dir.join("default.pdf.json");
    assert_eq!(sink.written(), &[saved.clone(), out_dir.join("print.pdf.json")]);

    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&saved).unwrap()).unwrap();
    assert_eq!(manifest["file_name"], "default.pdf");
    assert_eq!(manifest["auto_print"], false);
    assert_eq!(
        manifest["page_count"].as_u64().unwrap() as usize,
        document.page_count()
    );
    assert_eq!(manifest["pages"][0]["blocks"][0]["kind"], "image");

    std::fs::remove_dir_all(&out_dir).unwrap();
}
