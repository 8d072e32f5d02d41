use serde::Serialize;

/// Title printed on page one of the export document.
pub const DEFAULT_REPORT_TITLE: &str = "Minnesota Solar Suitability Location Report";

/// Installer search; the utility postal code is appended.
pub const DEFAULT_INSTALLERS_URL: &str = "https://mn.gov/commerce/energy/solar/installers?zip=";

pub const DEFAULT_INCENTIVES_URL: &str = "https://mn.gov/commerce/energy/solar/incentives";

/// State abbreviation used on the utility address line.
pub const DEFAULT_STATE: &str = "MN";

/// Static settings of a report deployment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportConfig {
    pub title: String,
    pub installers_url: String,
    pub incentives_url: String,
    pub state: String,
    /// Typical installed system cost shown on the summary, if any
    pub system_cost: Option<f64>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_REPORT_TITLE.to_string(),
            installers_url: DEFAULT_INSTALLERS_URL.to_string(),
            incentives_url: DEFAULT_INCENTIVES_URL.to_string(),
            state: DEFAULT_STATE.to_string(),
            system_cost: None,
        }
    }
}
