//! Raw point sample -> monthly solar metrics.

use crate::month::{MonthRecord, OrderedMonthSet};
use crate::reference_table::MonthlyReferenceTable;
use crate::sample::{Quality, RawSample};
use serde::Serialize;

/// Days used to turn the yearly total into a daily average.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Metrics derived from one sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolarMetrics {
    pub months: OrderedMonthSet,
    pub total_per_year: f64,
    pub average_per_day: f64,
    pub quality: Quality,
}

/// Insolation for one month: `raw_value * raw_scale * insolation_share`.
///
/// Monotonic in `raw_value` because scale and share are non-negative.
pub fn monthly_insolation(raw_value: f64, raw_scale: f64, insolation_share: f64) -> f64 {
    raw_value * raw_scale * insolation_share
}

/// Compute the twelve-month dataset and aggregates for a sample.
///
/// Sun-hours and shade-hours always come from the reference table. An
/// invalid sample (sentinel, non-finite or negative) gives zero insolation
/// everywhere and `Quality::Unavailable`.
pub fn compute(sample: &RawSample, table: &MonthlyReferenceTable) -> SolarMetrics {
    let valid = sample.is_valid();
    if !valid {
        log::info!("no data at sample point (raw value {})", sample.raw_value);
    }
    let months = OrderedMonthSet::from_fn(|month| {
        let reference = table.get(month);
        let insol_value = if valid {
            monthly_insolation(sample.raw_value, table.raw_scale(), reference.insolation_share)
        } else {
            0.0
        };
        MonthRecord {
            month,
            insol_value,
            sun_hr_value: reference.sun_hours,
            shade_hr_value: reference.shade_hours,
        }
    });
    let total_per_year = months.total_insolation();
    let average_per_day = total_per_year / DAYS_PER_YEAR;
    log::debug!(
        "computed {:.2} kWh/m² per year, {:.2} per day",
        total_per_year,
        average_per_day
    );
    SolarMetrics {
        months,
        total_per_year,
        average_per_day,
        quality: sample.quality(),
    }
}
