//! Page geometry of the export document, in inches on US letter portrait.
//!
//! The page one header (logo, title, rule) and the footer position are
//! fixed; everything else flows below the rule.

pub const PAGE_WIDTH: f64 = 8.5;
pub const PAGE_HEIGHT: f64 = 11.0;

pub const LOGO_X: f64 = 0.25;
pub const LOGO_Y: f64 = 0.25;
pub const LOGO_WIDTH: f64 = 1.0;
pub const LOGO_HEIGHT: f64 = 1.0;

pub const TITLE_X: f64 = 1.5;
pub const TITLE_Y: f64 = 0.5;
pub const TITLE_FONT_SIZE: f64 = 18.0;

pub const RULE_Y: f64 = 1.5;
pub const RULE_WIDTH: f64 = 0.0005;

pub const FOOTER_X: f64 = 8.0;
pub const FOOTER_Y: f64 = 10.75;
pub const FOOTER_FONT_SIZE: f64 = 8.0;

pub const MARGIN_X: f64 = 0.5;
/// Second column for values next to a label.
pub const VALUE_X: f64 = 3.0;

/// First content line on page one, below the rule.
pub const FIRST_PAGE_CONTENT_TOP: f64 = 2.0;
pub const CONTENT_TOP: f64 = 0.75;
/// Nothing but the footer goes below this line.
pub const CONTENT_BOTTOM: f64 = 10.25;

pub const HEADING_FONT_SIZE: f64 = 14.0;
pub const BODY_FONT_SIZE: f64 = 11.0;
pub const HEADING_HEIGHT: f64 = 0.4;
pub const LINE_HEIGHT: f64 = 0.25;
pub const SECTION_GAP: f64 = 0.25;
