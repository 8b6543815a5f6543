//! Injectable clock for render-time dates

use chrono::{DateTime, Datelike, Local};

/// Source of the current date and time
pub trait Clock {
    /// Current local date and time
    fn now(&self) -> DateTime<Local>;

    /// Current calendar year
    fn current_year(&self) -> i32 {
        self.now().year()
    }
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock frozen at a given instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
