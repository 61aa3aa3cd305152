use std::fmt::{Display, Formatter};

use chrono::{Datelike, Local, NaiveDate};

/// Source of the post creation date.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local date from the system clock.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date. Useful to reproduce a post header.
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// The date a post is created, captured once so every name derived from it
/// agrees on year, month and day.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CreationDate(NaiveDate);

impl CreationDate {
    pub fn capture(clock: &dyn Clock) -> Self {
        Self(clock.today())
    }

    pub fn year(&self) -> String {
        format!("{:04}", self.0.year())
    }

    pub fn month(&self) -> String {
        format!("{:02}", self.0.month())
    }

    pub fn day(&self) -> String {
        format!("{:02}", self.0.day())
    }
}

impl From<NaiveDate> for CreationDate {
    fn from(value: NaiveDate) -> Self {
        Self(value)
    }
}

/// Formats as `yyyy-mm-dd`.
impl Display for CreationDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.year(), self.month(), self.day())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_padding() {
        let date = CreationDate::from(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
        assert_eq!(date.year(), "2024");
        assert_eq!(date.month(), "03");
        assert_eq!(date.day(), "07");
        assert_eq!(date.to_string(), "2024-03-07");
    }

    #[test]
    fn test_capture_from_fixed_clock() {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2023, 12, 31).unwrap());
        let date = CreationDate::capture(&clock);
        assert_eq!(date.to_string(), "2023-12-31");
    }
}
