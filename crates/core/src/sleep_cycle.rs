//! Sleep cycle calculation engine.
//!
//! Given an anchor time and a [`Direction`], computes the candidate companion
//! times for which total sleep spans a whole number of 90-minute cycles plus
//! the fixed sleep-onset latency. The engine is pure and total: it performs
//! no I/O and has no error conditions.
//!
//! Results are ordered by true chronological instant. The anchor carries a
//! calendar date, so a bedtime that falls on the previous day sorts before
//! the early-morning ones (e.g. waking at 07:00 yields 21:45 first).

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::clock;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Assumed time to fall asleep after lying down.
pub const SLEEP_ONSET_MINUTES: i64 = 15;

/// Length of one sleep cycle.
pub const CYCLE_LENGTH_MINUTES: i64 = 90;

/// Candidate cycle counts, in priority order.
pub const CYCLE_COUNTS: [u32; 4] = [6, 5, 4, 3];

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Which end of the sleep interval the user is anchoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// The anchor is a desired wake-up time; candidates are bedtimes.
    #[default]
    Wakeup,
    /// The anchor is a bedtime; candidates are wake-up times.
    Bedtime,
}

impl Direction {
    /// Wire/storage name (`"wakeup"` or `"bedtime"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Wakeup => "wakeup",
            Direction::Bedtime => "bedtime",
        }
    }

    /// Heading shown above the candidate list.
    pub fn results_heading(self) -> &'static str {
        match self {
            Direction::Wakeup => "Best times to fall asleep",
            Direction::Bedtime => "Best times to wake up",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wakeup" => Ok(Direction::Wakeup),
            "bedtime" => Ok(Direction::Bedtime),
            other => Err(format!("Unknown direction: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Quality tier
// ---------------------------------------------------------------------------

/// Coarse ranking label derived solely from the cycle count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    Optimal,
    Good,
    Sufficient,
}

impl QualityTier {
    /// Five or more cycles are optimal, four are good, anything less is
    /// sufficient.
    pub fn from_cycles(cycle_count: u32) -> Self {
        match cycle_count {
            n if n >= 5 => QualityTier::Optimal,
            4 => QualityTier::Good,
            _ => QualityTier::Sufficient,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QualityTier::Optimal => "optimal",
            QualityTier::Good => "good",
            QualityTier::Sufficient => "sufficient",
        }
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// One candidate time produced by the engine. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    /// Absolute computed time (anchor +/- total minutes).
    pub time: NaiveDateTime,
    pub cycle_count: u32,
    /// `cycle_count * 1.5`.
    pub duration_hours: f64,
    pub quality_tier: QualityTier,
    /// Cycle time plus sleep onset, in minutes.
    pub total_minutes: i64,
    /// Calendar days between the anchor's date and `time`'s date (-1, 0 or 1).
    pub day_offset: i64,
}

impl CalculationResult {
    /// Wall-clock component of the computed time.
    pub fn time_of_day(&self) -> NaiveTime {
        self.time.time()
    }

    /// 12-hour display form, e.g. `"11:15 PM"`.
    pub fn display_time(&self) -> String {
        clock::format_12h(self.time_of_day())
    }
}

/// Total sleep span for a cycle count, including sleep onset.
pub fn total_minutes(cycle_count: u32) -> i64 {
    i64::from(cycle_count) * CYCLE_LENGTH_MINUTES + SLEEP_ONSET_MINUTES
}

/// Run the engine for a dated anchor.
///
/// Always returns exactly one result per entry in [`CYCLE_COUNTS`], sorted by
/// `time` ascending.
pub fn calculate(anchor: NaiveDateTime, direction: Direction) -> Vec<CalculationResult> {
    let mut results: Vec<CalculationResult> = CYCLE_COUNTS
        .iter()
        .map(|&cycle_count| candidate(anchor, direction, cycle_count))
        .collect();

    results.sort_by_key(|r| r.time);
    results
}

/// Run the engine for a bare time-of-day.
///
/// The time is anchored on a fixed reference date so that `day_offset`
/// still reports midnight wrap and ordering stays chronological.
pub fn calculate_from_time(anchor: NaiveTime, direction: Direction) -> Vec<CalculationResult> {
    calculate(NaiveDate::default().and_time(anchor), direction)
}

fn candidate(anchor: NaiveDateTime, direction: Direction, cycle_count: u32) -> CalculationResult {
    let total = total_minutes(cycle_count);
    let offset = Duration::minutes(total);

    let time = match direction {
        Direction::Wakeup => anchor - offset,
        Direction::Bedtime => anchor + offset,
    };

    CalculationResult {
        time,
        cycle_count,
        duration_hours: f64::from(cycle_count) * CYCLE_LENGTH_MINUTES as f64 / 60.0,
        quality_tier: QualityTier::from_cycles(cycle_count),
        total_minutes: total,
        day_offset: (time.date() - anchor.date()).num_days(),
    }
}

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

/// A "Calculate" action: anchor time plus direction.
///
/// Built transiently by the presentation layer; only its
/// [`summary`](CalculationRequest::summary) is ever persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    pub direction: Direction,
    pub anchor_time: NaiveDateTime,
}

impl CalculationRequest {
    pub fn new(direction: Direction, anchor_time: NaiveDateTime) -> Self {
        Self {
            direction,
            anchor_time,
        }
    }

    /// Run the engine for this request.
    pub fn results(&self) -> Vec<CalculationResult> {
        calculate(self.anchor_time, self.direction)
    }

    /// The history record payload for this request (`HH:mm` anchor).
    pub fn summary(&self) -> NewCalculation {
        NewCalculation {
            direction: self.direction,
            target_time: self.anchor_time.time(),
        }
    }
}

/// Validated input for appending a history record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCalculation {
    pub direction: Direction,
    #[serde(with = "clock::hh_mm")]
    pub target_time: NaiveTime,
}

impl NewCalculation {
    /// `targetTime` as stored, e.g. `"23:00"`.
    pub fn target_time_text(&self) -> String {
        clock::format_hh_mm(self.target_time)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
