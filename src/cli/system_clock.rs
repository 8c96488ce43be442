use chrono::{DateTime, Local, NaiveDate, Utc};

use showbiz_core::Clock;

/// Wall clock. `today` follows the local calendar so "future" matches what the user sees.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
