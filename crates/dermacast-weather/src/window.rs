//! Observation window resolution.
//!
//! The provider publishes hour `H` data only after minute 45 of hour `H`, so
//! any earlier request targets the previous hour's slot.

use chrono::{DateTime, Duration, TimeZone, Timelike, Utc};
use chrono_tz::Tz;
use serde::Serialize;

/// Minute of the hour after which the current hour's observation is published
pub const PUBLISH_MINUTE: u32 = 45;

/// Time zone the provider's `base_date`/`base_time` are expressed in
pub const PROVIDER_TZ: Tz = chrono_tz::Asia::Seoul;

/// `(base_date, base_time)` pair identifying one published snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObservationWindow {
    /// `YYYYMMDD`
    pub base_date: String,
    /// `HH00`
    pub base_time: String,
}

/// Resolve the most recent slot guaranteed to be published at `now`.
pub fn resolve_window<Tz2>(now: &DateTime<Tz2>) -> ObservationWindow
where
    Tz2: TimeZone,
    Tz2::Offset: std::fmt::Display,
{
    let slot = if now.minute() < PUBLISH_MINUTE {
        now.clone() - Duration::hours(1)
    } else {
        now.clone()
    };

    ObservationWindow {
        base_date: slot.format("%Y%m%d").to_string(),
        base_time: slot.format("%H00").to_string(),
    }
}

/// Current wall-clock time in the provider's zone
pub fn provider_now() -> DateTime<Tz> {
    Utc::now().with_timezone(&PROVIDER_TZ)
}
