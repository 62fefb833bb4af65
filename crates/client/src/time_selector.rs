//! 12-hour time picker semantics.
//!
//! The picker edits an hour (1-12), a minute (0-59) and an AM/PM period and
//! converts to and from a 24-hour [`NaiveTime`]. Seconds are always zero.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Half of the day on a 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Period {
    Am,
    Pm,
}

impl Period {
    pub fn toggled(self) -> Self {
        match self {
            Period::Am => Period::Pm,
            Period::Pm => Period::Am,
        }
    }
}

/// The picker's displayed fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSelection {
    /// 1 through 12.
    pub hour: u32,
    /// 0 through 59.
    pub minute: u32,
    pub period: Period,
}

impl TimeSelection {
    /// Split a 24-hour time into picker fields (00:xx is 12 AM).
    pub fn from_time(time: NaiveTime) -> Self {
        let (is_pm, hour) = time.hour12();
        Self {
            hour,
            minute: time.minute(),
            period: if is_pm { Period::Pm } else { Period::Am },
        }
    }

    /// Recombine into a 24-hour time with zero seconds.
    pub fn to_time(self) -> NaiveTime {
        let hour24 = match (self.period, self.hour % 12) {
            (Period::Am, h) => h,
            (Period::Pm, h) => h + 12,
        };
        NaiveTime::from_hms_opt(hour24, self.minute.min(59), 0).unwrap_or_default()
    }

    /// Step the hour, wrapping 12 -> 1 and 1 -> 12. The period is unchanged.
    pub fn adjust_hour(self, delta: i32) -> Self {
        let zero_based = (i64::from(self.hour) - 1 + i64::from(delta)).rem_euclid(12);
        Self {
            hour: zero_based as u32 + 1,
            ..self
        }
    }

    /// Step the minute. Past 59 wraps to 0; below 0 wraps to 55, the last
    /// five-minute mark.
    pub fn adjust_minute(self, delta: i32) -> Self {
        let stepped = i64::from(self.minute) + i64::from(delta);
        let minute = if stepped > 59 {
            0
        } else if stepped < 0 {
            55
        } else {
            stepped as u32
        };
        Self { minute, ..self }
    }

    pub fn toggle_period(self) -> Self {
        Self {
            period: self.period.toggled(),
            ..self
        }
    }
}
