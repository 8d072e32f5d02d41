use serde::Serialize;
use solar_core::month::MonthRecord;

/// Which monthly value a series or table is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MonthField {
    Insolation,
    SunHours,
    ShadeHours,
}

impl MonthField {
    pub const ALL: [MonthField; 3] = [
        MonthField::Insolation,
        MonthField::SunHours,
        MonthField::ShadeHours,
    ];

    pub fn value_of(&self, record: &MonthRecord) -> f64 {
        match self {
            MonthField::Insolation => record.insol_value,
            MonthField::SunHours => record.sun_hr_value,
            MonthField::ShadeHours => record.shade_hr_value,
        }
    }

    /// Series/table heading.
    pub fn label(&self) -> &'static str {
        match self {
            MonthField::Insolation => "Insolation (kWh/m²)",
            MonthField::SunHours => "Sun Hours",
            MonthField::ShadeHours => "Shade Hours",
        }
    }
}
