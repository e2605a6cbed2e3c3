// src/application/ports/time.rs
use chrono::{DateTime, Datelike, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar year used for the footer copyright line.
    fn current_year(&self) -> i32 {
        self.now().year()
    }
}
