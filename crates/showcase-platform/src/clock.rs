use chrono::{Local, NaiveDate};

use showcase_core::ports::ClockPort;

/// Calendar date in the browser's local time zone
pub struct LocalClock;

impl ClockPort for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
