/// Wall-clock access behind a trait so ticks are reproducible under test.
use chrono::{Datelike, Local, Timelike};

pub trait Clock: Send + Sync {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
    /// Current local calendar day of month, 1–31.
    fn today_day(&self) -> u32;
    /// Minutes elapsed since local midnight, 0–1439.
    fn minutes_into_day(&self) -> u32;
}

#[derive(Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Local::now().timestamp_millis()
    }

    fn today_day(&self) -> u32 {
        Local::now().day()
    }

    fn minutes_into_day(&self) -> u32 {
        let now = Local::now();
        now.hour() * 60 + now.minute()
    }
}
