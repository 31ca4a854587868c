use std::fmt;

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub enum RangeError {
    StartAfterEnd { start: NaiveDate, end: NaiveDate },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RangeError::StartAfterEnd { start, end } => {
                write!(f, "start date {start} cannot be after end date {end}")
            }
        }
    }
}
