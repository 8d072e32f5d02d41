use crate::config::ReportConfig;
use serde::Serialize;
use solar_core::query::QueryResult;
use solar_utils::format::{kwh_per_m2, money};

/// A labelled hyperlink on the report.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReportLink {
    pub text: String,
    pub url: String,
}

/// Utility contact block, one string per displayed line.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct UtilityLines {
    pub name: String,
    pub street: String,
    pub city_state_zip: String,
    pub phone: String,
}

/// The text fields of the results section.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ReportSummary {
    pub total_per_year: String,
    pub average_per_day: String,
    pub collect_date: String,
    pub quality: String,
    pub utility: UtilityLines,
    pub installers: ReportLink,
    pub incentives: ReportLink,
    pub estimated_system_cost: Option<String>,
}

impl ReportSummary {
    pub fn build(query: &QueryResult, config: &ReportConfig) -> Self {
        let utility = query.utility_company();
        let city_state_zip = if utility.is_unknown() {
            String::new()
        } else {
            format!("{}, {} {}", utility.city, config.state, utility.zip)
        };
        Self {
            total_per_year: kwh_per_m2(query.total_per_year()),
            average_per_day: kwh_per_m2(query.average_per_day()),
            collect_date: query.collect_date().to_string(),
            quality: query.quality().label().to_string(),
            utility: UtilityLines {
                name: utility.full_name.clone(),
                street: utility.street.clone(),
                city_state_zip,
                phone: utility.phone.clone(),
            },
            installers: ReportLink {
                text: "Contact a Local Installer".to_string(),
                url: format!("{}{}", config.installers_url, utility.zip),
            },
            incentives: ReportLink {
                text: format!("{} Solar Incentives", config.state),
                url: config.incentives_url.clone(),
            },
            estimated_system_cost: config.system_cost.map(money),
        }
    }

    /// Label/value pairs in display order, used by the export document.
    /// Blank utility address lines are skipped.
    pub fn lines(&self) -> Vec<(String, String)> {
        let mut lines: Vec<(String, String)> = [
            ("Total per year", &self.total_per_year),
            ("Average per day", &self.average_per_day),
            ("Imagery collected", &self.collect_date),
            ("Data quality", &self.quality),
            ("Utility", &self.utility.name),
        ]
        .into_iter()
        .map(|(label, value)| (label.to_string(), value.clone()))
        .collect();
        for line in [
            &self.utility.street,
            &self.utility.city_state_zip,
            &self.utility.phone,
        ] {
            if !line.is_empty() {
                lines.push((String::new(), line.clone()));
            }
        }
        if let Some(cost) = &self.estimated_system_cost {
            lines.push(("Estimated system cost".to_string(), cost.clone()));
        }
        for link in [&self.installers, &self.incentives] {
            lines.push((link.text.clone(), link.url.clone()));
        }
        lines
    }
}
