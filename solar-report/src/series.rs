use crate::field::MonthField;
use crate::models::{ChartSeries, SeriesPoint};
use solar_core::month::OrderedMonthSet;

/// Chart series for one monthly field, January through December.
pub fn build_series(months: &OrderedMonthSet, field: MonthField) -> ChartSeries {
    ChartSeries {
        label: field.label().to_string(),
        points: months
            .iter()
            .map(|record| SeriesPoint {
                month_name: record.full_name().to_string(),
                value: field.value_of(record),
            })
            .collect(),
    }
}
