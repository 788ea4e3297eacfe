//! Wall-clock seam for today detection and the last-updated badge.

use time::OffsetDateTime;
use time::macros::format_description;

/// Weekday names indexed Sunday-first, matching the numbering used by the
/// menu documents' origin platform (index 0 is Sunday).
pub const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;

    /// Resolves the current weekday to its English name.
    fn today_name(&self) -> &'static str {
        DAY_NAMES[self.now().weekday().number_days_from_sunday() as usize]
    }
}

/// Local wall clock; falls back to UTC when the local offset cannot be
/// determined (sound multi-threaded environments refuse to report it).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
    }
}

/// Clock pinned to one instant, for deterministic rendering in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}

/// Formats an instant for the last-updated badge, e.g. `Dec 5, 2025 14:30`.
pub fn last_updated_stamp(now: OffsetDateTime) -> String {
    let format = format_description!("[month repr:short] [day padding:none], [year] [hour]:[minute]");
    now.format(&format).unwrap_or_default()
}
