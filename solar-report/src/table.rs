use crate::field::MonthField;
use crate::models::TableRow;
use serde::Serialize;
use solar_core::month::OrderedMonthSet;
use solar_utils::format::fixed2;

/// Rows for one monthly field in calendar order, values with two decimals.
pub fn build_table(months: &OrderedMonthSet, field: MonthField) -> Vec<TableRow> {
    months
        .iter()
        .map(|record| TableRow {
            month_name: record.full_name().to_string(),
            value: fixed2(field.value_of(record)),
        })
        .collect()
}

/// A displayed table whose rows are only ever swapped as a whole.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportTable {
    field: MonthField,
    rows: Vec<TableRow>,
}

impl ReportTable {
    pub fn new(field: MonthField) -> Self {
        Self {
            field,
            rows: Vec::new(),
        }
    }

    pub fn build(months: &OrderedMonthSet, field: MonthField) -> Self {
        Self {
            field,
            rows: build_table(months, field),
        }
    }

    /// Replace every row with the rows for `months`.
    pub fn replace(&mut self, months: &OrderedMonthSet) {
        self.rows = build_table(months, self.field);
    }

    pub fn field(&self) -> MonthField {
        self.field
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }
}
