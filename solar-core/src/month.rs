use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Calendar month. The derived `Ord` follows calendar order, which is what
/// `OrderedMonthSet` relies on for iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All twelve months, January first.
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Three letter key used by the reference table, e.g. "Jan".
    pub fn abbr(&self) -> &'static str {
        match self {
            Month::January => "Jan",
            Month::February => "Feb",
            Month::March => "Mar",
            Month::April => "Apr",
            Month::May => "May",
            Month::June => "Jun",
            Month::July => "Jul",
            Month::August => "Aug",
            Month::September => "Sep",
            Month::October => "Oct",
            Month::November => "Nov",
            Month::December => "Dec",
        }
    }

    /// Display name, e.g. "January".
    pub fn full_name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Look a month up by its three letter key, ignoring case.
    pub fn from_abbr(abbr: &str) -> Option<Month> {
        let abbr = abbr.trim();
        Month::ALL
            .into_iter()
            .find(|month| month.abbr().eq_ignore_ascii_case(abbr))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.abbr())
    }
}

/// One calendar month of solar data.
///
/// Insolation is derived from the point sample; sun-hours and shade-hours are
/// reference values for the month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthRecord {
    pub month: Month,
    /// kWh/m² received over the month
    pub insol_value: f64,
    pub sun_hr_value: f64,
    pub shade_hr_value: f64,
}

impl MonthRecord {
    pub fn abbr(&self) -> &'static str {
        self.month.abbr()
    }

    pub fn full_name(&self) -> &'static str {
        self.month.full_name()
    }
}

/// Errors building an `OrderedMonthSet` from loose records.
#[derive(Debug, Clone, PartialEq)]
pub enum MonthSetError {
    WrongCount(usize),
    Duplicate(Month),
}

/// Exactly twelve `MonthRecord`s, one per month, iterated January..December
/// no matter in which order they were supplied.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMonthSet {
    records: BTreeMap<Month, MonthRecord>,
}

impl OrderedMonthSet {
    /// Build a set from twelve records in any order.
    pub fn from_records<I>(records: I) -> Result<Self, MonthSetError>
    where
        I: IntoIterator<Item = MonthRecord>,
    {
        let mut map = BTreeMap::new();
        let mut count = 0usize;
        for record in records {
            count += 1;
            if map.insert(record.month, record).is_some() {
                return Err(MonthSetError::Duplicate(record.month));
            }
        }
        // twelve distinct months means every month is present
        if count != 12 {
            return Err(MonthSetError::WrongCount(count));
        }
        Ok(Self { records: map })
    }

    /// Build a set by evaluating `f` for every month.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Month) -> MonthRecord,
    {
        let records = Month::ALL
            .into_iter()
            .map(|month| {
                let mut record = f(month);
                record.month = month;
                (month, record)
            })
            .collect();
        Self { records }
    }

    pub fn get(&self, month: Month) -> &MonthRecord {
        // every month is present once constructed
        &self.records[&month]
    }

    /// Records in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = &MonthRecord> + '_ {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of monthly insolation values.
    pub fn total_insolation(&self) -> f64 {
        self.iter().map(|record| record.insol_value).sum()
    }
}

impl<'a> IntoIterator for &'a OrderedMonthSet {
    type Item = &'a MonthRecord;
    type IntoIter = std::collections::btree_map::Values<'a, Month, MonthRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

impl Serialize for OrderedMonthSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
