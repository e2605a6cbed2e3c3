// tests/support/mocks/time.rs
use chrono::{DateTime, Utc};
use folio_core::infrastructure::time::FixedClock;
use once_cell::sync::Lazy;

static FIXED_NOW: Lazy<DateTime<Utc>> = Lazy::new(|| {
    DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
        .expect("invalid RFC3339 in tests/support/mocks/time.rs")
        .with_timezone(&Utc)
});

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

pub fn fixed_clock() -> FixedClock {
    FixedClock(fixed_now())
}
