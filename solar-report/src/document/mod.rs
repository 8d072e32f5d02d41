//! Paginated export document.
//!
//! `build_document` lays the report out on pages, `paginate` stamps a
//! footer on every page, and the `export` module names the result and hands
//! it to a save or print sink. Each document owns its own page counter.

pub mod export;
pub mod layout;
pub mod logo;

use crate::config::ReportConfig;
use crate::field::MonthField;
use crate::summary::ReportSummary;
use crate::table::build_table;
use layout::*;
use logo::{ImageFormat, LogoAsset};
use serde::Serialize;
use solar_core::query::QueryResult;

/// A positioned piece of page content.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Block {
    Image {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        format: ImageFormat,
        source: String,
    },
    Text {
        x: f64,
        y: f64,
        font_size: f64,
        text: String,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        width: f64,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    pub blocks: Vec<Block>,
}

impl Page {
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.blocks.iter().filter_map(|block| match block {
            Block::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// Pages under construction plus the running footer counter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportDocument {
    pages: Vec<Page>,
    page: u32,
}

impl Default for ExportDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportDocument {
    /// A document with one blank page and the counter at 1.
    pub fn new() -> Self {
        Self {
            pages: vec![Page::default()],
            page: 1,
        }
    }

    pub fn add_page(&mut self) -> usize {
        self.pages.push(Page::default());
        self.pages.len() - 1
    }

    /// Append `block` to page `page_index`. Returns `false`, leaving the
    /// document unchanged, when there is no such page.
    pub fn push(&mut self, page_index: usize, block: Block) -> bool {
        match self.pages.get_mut(page_index) {
            Some(page) => {
                page.blocks.push(block);
                true
            }
            None => false,
        }
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Next page number the footer will print.
    pub fn page_counter(&self) -> u32 {
        self.page
    }

    /// Stamp `"page N"` on page N and advance the counter by one.
    ///
    /// Returns the footer text, or `None` once every page has its footer;
    /// the counter is left alone in that case.
    pub fn footer(&mut self) -> Option<String> {
        let index = (self.page - 1) as usize;
        let page = self.pages.get_mut(index)?;
        let text = format!("page {}", self.page);
        page.blocks.push(Block::Text {
            x: FOOTER_X,
            y: FOOTER_Y,
            font_size: FOOTER_FONT_SIZE,
            text: text.clone(),
        });
        self.page += 1;
        Some(text)
    }
}

/// A document with a footer on every page, ready for save or print.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginatedDocument {
    document: ExportDocument,
}

impl PaginatedDocument {
    pub fn pages(&self) -> &[Page] {
        self.document.pages()
    }

    pub fn page_count(&self) -> usize {
        self.document.page_count()
    }

    pub fn page_counter(&self) -> u32 {
        self.document.page_counter()
    }
}

/// Run the footer routine once for every page that does not have one yet.
pub fn paginate(mut document: ExportDocument) -> PaginatedDocument {
    while document.footer().is_some() {}
    log::debug!("paginated export document: {} pages", document.page_count());
    PaginatedDocument { document }
}

/// Lay out the report for `query` with the default report settings.
pub fn build_document(query: &QueryResult, logo: &LogoAsset) -> ExportDocument {
    build_document_with(query, logo, &ReportConfig::default())
}

pub fn build_document_with(
    query: &QueryResult,
    logo: &LogoAsset,
    config: &ReportConfig,
) -> ExportDocument {
    let mut document = ExportDocument::new();
    document.push(
        0,
        Block::Image {
            x: LOGO_X,
            y: LOGO_Y,
            width: LOGO_WIDTH,
            height: LOGO_HEIGHT,
            format: logo.format,
            source: logo.name.clone(),
        },
    );
    document.push(
        0,
        Block::Text {
            x: TITLE_X,
            y: TITLE_Y,
            font_size: TITLE_FONT_SIZE,
            text: config.title.clone(),
        },
    );
    document.push(
        0,
        Block::Line {
            x1: 0.0,
            y1: RULE_Y,
            x2: PAGE_WIDTH,
            y2: RULE_Y,
            width: RULE_WIDTH,
        },
    );

    let mut flow = Flow::new(&mut document);

    let point = query.location().geographic();
    flow.heading("Location");
    flow.pair("Latitude, longitude", format!("{:.5}, {:.5}", point.latitude, point.longitude));
    if let Some(site_name) = query.site_name() {
        flow.pair("Site", site_name.to_string());
    }
    flow.gap();

    flow.heading("Solar Potential");
    for (label, value) in ReportSummary::build(query, config).lines() {
        flow.pair(&label, value);
    }
    flow.gap();

    for field in MonthField::ALL {
        // keep a heading together with its first row
        flow.ensure_room(HEADING_HEIGHT + LINE_HEIGHT);
        flow.heading(field.label());
        for row in build_table(query.months(), field) {
            flow.pair(&row.month_name, row.value);
        }
        flow.gap();
    }

    document
}

/// Top-to-bottom cursor that opens a new page when content would run into
/// the footer area.
struct Flow<'a> {
    document: &'a mut ExportDocument,
    page_index: usize,
    y: f64,
}

impl<'a> Flow<'a> {
    fn new(document: &'a mut ExportDocument) -> Self {
        Self {
            document,
            page_index: 0,
            y: FIRST_PAGE_CONTENT_TOP,
        }
    }

    fn ensure_room(&mut self, height: f64) {
        if self.y + height > CONTENT_BOTTOM {
            self.page_index = self.document.add_page();
            self.y = CONTENT_TOP;
            log::debug!("export document spilled onto page {}", self.page_index + 1);
        }
    }

    fn text(&mut self, x: f64, font_size: f64, text: String) {
        self.document.push(
            self.page_index,
            Block::Text {
                x,
                y: self.y,
                font_size,
                text,
            },
        );
    }

    fn heading(&mut self, text: &str) {
        self.ensure_room(HEADING_HEIGHT);
        self.text(MARGIN_X, HEADING_FONT_SIZE, text.to_string());
        self.y += HEADING_HEIGHT;
    }

    fn pair(&mut self, label: &str, value: String) {
        self.ensure_room(LINE_HEIGHT);
        if !label.is_empty() {
            self.text(MARGIN_X, BODY_FONT_SIZE, label.to_string());
        }
        self.text(VALUE_X, BODY_FONT_SIZE, value);
        self.y += LINE_HEIGHT;
    }

    fn gap(&mut self) {
        self.y += SECTION_GAP;
    }
}
