use serde::{Deserialize, Serialize};
use std::fmt;

/// Value the imagery service reports where it has no measurement.
pub const NO_DATA_SENTINEL: f64 = 0.0;

/// One point sample as handed over by the sampling collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    /// Annual insolation at the point (Wh/m²), or `NO_DATA_SENTINEL`
    pub raw_value: f64,
    pub confidence_flag: Option<String>,
    pub collect_date: String,
}

impl RawSample {
    pub fn new(raw_value: f64, collect_date: impl Into<String>) -> Self {
        Self {
            raw_value,
            confidence_flag: None,
            collect_date: collect_date.into(),
        }
    }

    pub fn with_confidence(mut self, flag: impl Into<String>) -> Self {
        self.confidence_flag = Some(flag.into());
        self
    }

    /// A sample the sampling collaborator could not obtain at all.
    pub fn no_data(collect_date: impl Into<String>) -> Self {
        Self::new(NO_DATA_SENTINEL, collect_date)
    }

    /// False for the sentinel, NaN, infinities and negative values.
    pub fn is_valid(&self) -> bool {
        self.raw_value.is_finite() && self.raw_value > NO_DATA_SENTINEL
    }

    pub fn quality(&self) -> Quality {
        Quality::classify(self.is_valid(), self.confidence_flag.as_deref())
    }
}

/// Confidence label attached to a query result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    High,
    Medium,
    Low,
    Unavailable,
}

impl Quality {
    /// Classify a sample from its validity and the collaborator's flag.
    ///
    /// An invalid sample is always `Unavailable`. For valid samples a
    /// missing flag means `Medium` and an unrecognised flag means `Low`.
    pub fn classify(valid: bool, confidence_flag: Option<&str>) -> Quality {
        if !valid {
            return Quality::Unavailable;
        }
        let Some(flag) = confidence_flag else {
            return Quality::Medium;
        };
        match flag.trim().to_lowercase().as_str() {
            "high" | "good" => Quality::High,
            "medium" | "moderate" | "fair" => Quality::Medium,
            "low" | "poor" => Quality::Low,
            other => {
                log::warn!("unrecognised confidence flag {:?}, treating as low", other);
                Quality::Low
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quality::High => "high",
            Quality::Medium => "medium",
            Quality::Low => "low",
            Quality::Unavailable => "unavailable",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
