//! Naming and dispatching a paginated document.

use super::{Page, PaginatedDocument};
use crate::notice::UserNotice;
use anyhow::Context;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// File name used when the user did not name the site.
pub const DEFAULT_FILE_NAME: &str = "default.pdf";

/// `"<site name>.pdf"`, or `"default.pdf"` when no site name was given.
///
/// The name is used exactly as entered; only an empty name falls back.
pub fn export_file_name(site_name: &str) -> String {
    if site_name.is_empty() {
        DEFAULT_FILE_NAME.to_string()
    } else {
        format!("{}.pdf", site_name)
    }
}

/// A named document ready to be saved.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArtifact<'a> {
    pub file_name: String,
    pub document: &'a PaginatedDocument,
}

/// Name `document` after the site; only the site name decides the file name.
pub fn export_as<'a>(document: &'a PaginatedDocument, site_name: &str) -> ExportArtifact<'a> {
    ExportArtifact {
        file_name: export_file_name(site_name),
        document,
    }
}

/// What the user asked to do with the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportAction {
    Save,
    Print,
    /// One-click conversion of the on-screen report; not built yet.
    HtmlToPdf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Saved { file_name: String },
    Printed { pages: usize },
    Notice(UserNotice),
}

/// Where finished documents go: a file-save prompt or a print dialog.
pub trait DocumentSink {
    fn save(&mut self, artifact: &ExportArtifact<'_>) -> anyhow::Result<()>;
    fn print(&mut self, document: &PaginatedDocument) -> anyhow::Result<()>;
}

/// Send one assembled document to the sink for `action`.
///
/// Save and print receive the very same document; unimplemented actions
/// produce a notice and leave the sink untouched.
pub fn dispatch<S: DocumentSink + ?Sized>(
    action: ExportAction,
    document: &PaginatedDocument,
    site_name: &str,
    sink: &mut S,
) -> anyhow::Result<ExportOutcome> {
    match action {
        ExportAction::Save => {
            let artifact = export_as(document, site_name);
            sink.save(&artifact)?;
            log::info!("saved {} ({} pages)", artifact.file_name, document.page_count());
            Ok(ExportOutcome::Saved {
                file_name: artifact.file_name,
            })
        }
        ExportAction::Print => {
            sink.print(document)?;
            log::info!("sent {} pages to print", document.page_count());
            Ok(ExportOutcome::Printed {
                pages: document.page_count(),
            })
        }
        ExportAction::HtmlToPdf => {
            log::warn!("html to pdf export requested but not available");
            Ok(ExportOutcome::Notice(UserNotice::under_construction()))
        }
    }
}

/// JSON description of a document for an external PDF renderer.
#[derive(Debug, Serialize)]
struct DocumentManifest<'a> {
    file_name: &'a str,
    auto_print: bool,
    page_count: usize,
    pages: &'a [Page],
}

/// Writes a layout manifest per export into a directory.
///
/// Saving `MySite.pdf` writes `MySite.pdf.json`; printing writes
/// `print.pdf.json` with `auto_print` set.
#[derive(Debug, Clone)]
pub struct ManifestSink {
    out_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl ManifestSink {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            written: Vec::new(),
        }
    }

    /// Paths written so far, oldest first.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn write(&mut self, manifest: &DocumentManifest<'_>) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("failed to create {}", self.out_dir.display()))?;
        let path = manifest_path(&self.out_dir, manifest.file_name);
        let json = serde_json::to_string_pretty(manifest)?;
        std::fs::write(&path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
        self.written.push(path);
        Ok(())
    }
}

/// `<out_dir>/<file_name>.json`, with `file_name` flattened to a single path
/// component so a site name can never leave `out_dir`.
fn manifest_path(out_dir: &Path, file_name: &str) -> PathBuf {
    let component: String = file_name
        .chars()
        .map(|ch| match ch {
            '/' | '\\' | ':' | '\0' => '_',
            other => other,
        })
        .collect();
    out_dir.join(format!("{}.json", component))
}

impl DocumentSink for ManifestSink {
    fn save(&mut self, artifact: &ExportArtifact<'_>) -> anyhow::Result<()> {
        self.write(&DocumentManifest {
            file_name: &artifact.file_name,
            auto_print: false,
            page_count: artifact.document.page_count(),
            pages: artifact.document.pages(),
        })
    }

    fn print(&mut self, document: &PaginatedDocument) -> anyhow::Result<()> {
        self.write(&DocumentManifest {
            file_name: "print.pdf",
            auto_print: true,
            page_count: document.page_count(),
            pages: document.pages(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{paginate, ExportDocument};
    use crate::notice::AlertType;

    #[derive(Default)]
    struct RecordingSink {
        saved: Vec<(String, PaginatedDocument)>,
        printed: Vec<PaginatedDocument>,
    }

    impl DocumentSink for RecordingSink {
        fn save(&mut self, artifact: &ExportArtifact<'_>) -> anyhow::Result<()> {
            self.saved.push((artifact.file_name.clone(), artifact.document.clone()));
            Ok(())
        }

        fn print(&mut self, document: &PaginatedDocument) -> anyhow::Result<()> {
            self.printed.push(document.clone());
            Ok(())
        }
    }

    fn three_pages() -> PaginatedDocument {
        let mut document = ExportDocument::new();
        document.add_page();
        document.add_page();
        paginate(document)
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name("MySite"), "MySite.pdf");
        assert_eq!(export_file_name(""), "default.pdf");
        assert_eq!(export_file_name("   "), "   .pdf");
        assert_eq!(export_file_name(" MySite "), " MySite .pdf");
    }

    #[test]
    fn test_export_as_names_the_artifact() {
        let document = three_pages();
        assert_eq!(export_as(&document, "MySite").file_name, "MySite.pdf");
        assert_eq!(export_as(&document, "").file_name, "default.pdf");
        assert_eq!(export_as(&document, "MySite").document.page_count(), 3);
    }

    #[test]
    fn test_save_and_print_get_the_same_document() {
        let document = three_pages();
        let mut sink = RecordingSink::default();

        let saved = dispatch(ExportAction::Save, &document, "Cabin", &mut sink).unwrap();
        let printed = dispatch(ExportAction::Print, &document, "Cabin", &mut sink).unwrap();

        assert_eq!(
            saved,
            ExportOutcome::Saved {
                file_name: "Cabin.pdf".to_string()
            }
        );
        assert_eq!(printed, ExportOutcome::Printed { pages: 3 });
        assert_eq!(sink.saved[0].1, sink.printed[0]);
        assert_eq!(sink.printed[0], document);
    }

    #[test]
    fn test_html_to_pdf_is_a_notice() {
        let document = three_pages();
        let mut sink = RecordingSink::default();
        let outcome = dispatch(ExportAction::HtmlToPdf, &document, "", &mut sink).unwrap();
        match outcome {
            ExportOutcome::Notice(notice) => assert_eq!(notice.alert_type, AlertType::Danger),
            other => panic!("expected a notice, got {:?}", other),
        }
        assert!(sink.saved.is_empty());
        assert!(sink.printed.is_empty());
    }

    #[test]
    fn test_manifest_path() {
        let path = manifest_path(Path::new("out"), "default.pdf");
        assert_eq!(path, Path::new("out").join("default.pdf.json"));
    }

    #[test]
    fn test_manifest_path_stays_in_out_dir() {
        let out = Path::new("out");
        for site_name in ["../escaped", "North/South lot", "..\\up", "/etc/passwd"] {
            let path = manifest_path(out, &export_file_name(site_name));
            assert_eq!(path.parent(), Some(out), "{:?} -> {:?}", site_name, path);
        }
        assert_eq!(manifest_path(out, "../escaped.pdf"), out.join(".._escaped.pdf.json"));
    }

    #[test]
    fn test_manifest_sink_accepts_any_site_name() {
        let base =
            std::env::temp_dir().join(format!("solar-manifest-names-{}", std::process::id()));
        let out_dir = base.join("out");
        let document = three_pages();
        let mut sink = ManifestSink::new(&out_dir);

        let escaped = dispatch(ExportAction::Save, &document, "../escaped", &mut sink).unwrap();
        let slashed =
            dispatch(ExportAction::Save, &document, "North/South lot", &mut sink).unwrap();

        assert_eq!(
            escaped,
            ExportOutcome::Saved {
                file_name: "../escaped.pdf".to_string()
            }
        );
        assert_eq!(
            slashed,
            ExportOutcome::Saved {
                file_name: "North/South lot.pdf".to_string()
            }
        );
        assert!(!base.join("escaped.pdf.json").exists());
        assert!(out_dir.join(".._escaped.pdf.json").is_file());
        assert!(out_dir.join("North_South lot.pdf.json").is_file());
        assert!(sink.written().iter().all(|path| path.parent() == Some(out_dir.as_path())));

        std::fs::remove_dir_all(&base).unwrap();
    }
}
