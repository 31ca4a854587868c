use chrono::NaiveDate;

use crate::{errors::RangeError, utils::today};

/* Inclusive range of dates used to filter movements and orders.
Without a start every past record is included, without an end the range stops today. */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self, RangeError> {
        let start = start.unwrap_or(NaiveDate::MIN);
        let end = end.unwrap_or_else(today);
        if start > end {
            return Err(RangeError::StartAfterEnd { start, end });
        }
        Ok(Self { start, end })
    }

    /* Everything, future records included */
    pub fn all() -> Self {
        Self {
            start: NaiveDate::MIN,
            end: NaiveDate::MAX,
        }
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.start <= *date && *date <= self.end
    }
}
