//! The on-screen report and the session that keeps it in step with the
//! latest query.

use crate::config::ReportConfig;
use crate::document::export::{dispatch, DocumentSink, ExportAction, ExportOutcome};
use crate::document::logo::LogoAsset;
use crate::document::{build_document_with, paginate, PaginatedDocument};
use crate::field::MonthField;
use crate::models::ChartSeries;
use crate::series::build_series;
use crate::summary::ReportSummary;
use crate::table::ReportTable;
use serde::Serialize;
use solar_core::query::QueryResult;

/// Chart and table for one monthly field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSection {
    pub field: MonthField,
    pub series: ChartSeries,
    pub table: ReportTable,
}

impl ReportSection {
    pub fn build(query: &QueryResult, field: MonthField) -> Self {
        Self {
            field,
            series: build_series(query.months(), field),
            table: ReportTable::build(query.months(), field),
        }
    }
}

/// Everything rendered for one query result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub summary: ReportSummary,
    pub sections: Vec<ReportSection>,
}

impl Report {
    pub fn build(query: &QueryResult, config: &ReportConfig) -> Self {
        Self {
            summary: ReportSummary::build(query, config),
            sections: MonthField::ALL
                .into_iter()
                .map(|field| ReportSection::build(query, field))
                .collect(),
        }
    }

    pub fn section(&self, field: MonthField) -> Option<&ReportSection> {
        self.sections.iter().find(|section| section.field == field)
    }
}

/// Holds the current query and the report built from it.
///
/// A new submission replaces both together, so the displayed report never
/// mixes values from two queries.
#[derive(Debug, Clone)]
pub struct ReportSession {
    config: ReportConfig,
    logo: LogoAsset,
    current: Option<(QueryResult, Report)>,
}

impl ReportSession {
    pub fn new(config: ReportConfig, logo: LogoAsset) -> Self {
        Self {
            config,
            logo,
            current: None,
        }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Make `query` the current one and return its report.
    pub fn submit(&mut self, query: QueryResult) -> &Report {
        let report = Report::build(&query, &self.config);
        log::info!(
            "report ready: {:.2} kWh/m² per year, quality {}",
            query.total_per_year(),
            query.quality()
        );
        let (_, report) = self.current.insert((query, report));
        report
    }

    pub fn query(&self) -> Option<&QueryResult> {
        self.current.as_ref().map(|(query, _)| query)
    }

    pub fn report(&self) -> Option<&Report> {
        self.current.as_ref().map(|(_, report)| report)
    }

    /// A fresh paginated export document for the current query.
    pub fn export_document(&self) -> Option<PaginatedDocument> {
        self.query()
            .map(|query| paginate(build_document_with(query, &self.logo, &self.config)))
    }

    /// Build one export document and hand it to `sink` for `action`.
    ///
    /// Returns `Ok(None)` when nothing has been queried yet.
    pub fn export<S: DocumentSink + ?Sized>(
        &self,
        action: ExportAction,
        sink: &mut S,
    ) -> anyhow::Result<Option<ExportOutcome>> {
        let Some(query) = self.query() else {
            log::warn!("export requested before any query");
            return Ok(None);
        };
        let document = paginate(build_document_with(query, &self.logo, &self.config));
        let site_name = query.site_name().unwrap_or_default();
        dispatch(action, &document, site_name, sink).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::export::ExportArtifact;
    use solar_core::location::Location;
    use solar_core::query::{execute, QueryRequest};
    use solar_core::reference_table::MonthlyReferenceTable;
    use solar_core::sample::RawSample;
    use solar_core::utility::UtilityDirectory;

    fn query(raw_value: f64, site_name: Option<&str>) -> QueryResult {
        let request = QueryRequest {
            location: Location::from_geographic(-94.2, 45.56),
            sample: RawSample::new(raw_value, "2012-06-15").with_confidence("good"),
            postal_code: "56537".to_string(),
            site_name: site_name.map(str::to_string),
        };
        execute(
            &request,
            &MonthlyReferenceTable::embedded().unwrap(),
            &UtilityDirectory::embedded().unwrap(),
        )
    }

    #[derive(Default)]
    struct NameSink {
        saved: Vec<String>,
    }

    impl DocumentSink for NameSink {
        fn save(&mut self, artifact: &ExportArtifact<'_>) -> anyhow::Result<()> {
            self.saved.push(artifact.file_name.clone());
            Ok(())
        }

        fn print(&mut self, _document: &PaginatedDocument) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_report_has_one_section_per_field() {
        let report = Report::build(&query(1_100_000.0, None), &ReportConfig::default());
        assert_eq!(report.sections.len(), 3);
        for field in MonthField::ALL {
            let section = report.section(field).unwrap();
            assert_eq!(section.series.points.len(), 12);
            assert_eq!(section.table.rows().len(), 12);
            assert_eq!(section.table.field(), field);
        }
    }

    #[test]
    fn test_empty_session() {
        let session = ReportSession::new(ReportConfig::default(), LogoAsset::embedded());
        assert!(session.query().is_none());
        assert!(session.report().is_none());
        assert!(session.export_document().is_none());
        let mut sink = NameSink::default();
        assert_eq!(session.export(ExportAction::Save, &mut sink).unwrap(), None);
        assert!(sink.saved.is_empty());
    }

    #[test]
    fn test_export_uses_site_name() {
        let mut session = ReportSession::new(ReportConfig::default(), LogoAsset::embedded());
        let mut sink = NameSink::default();

        session.submit(query(1_100_000.0, Some("Lake Lot")));
        session.export(ExportAction::Save, &mut sink).unwrap();
        session.submit(query(1_100_000.0, None));
        session.export(ExportAction::Save, &mut sink).unwrap();

        assert_eq!(sink.saved, vec!["Lake Lot.pdf", "default.pdf"]);
    }

    #[test]
    fn test_each_export_starts_counting_at_one() {
        let mut session = ReportSession::new(ReportConfig::default(), LogoAsset::embedded());
        session.submit(query(1_100_000.0, None));
        let first = session.export_document().unwrap();
        let second = session.export_document().unwrap();
        assert_eq!(first, second);
        assert_eq!(first.page_counter() as usize, first.page_count() + 1);
    }
}
