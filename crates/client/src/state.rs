//! Calculator screen state and its update function.
//!
//! [`CalculatorState`] is an owned, serializable value. Every user
//! interaction is an [`Action`]; [`update`] consumes the old state and
//! returns the new one plus an optional [`Effect`] for the caller to run.
//! Effects never feed back into the state.

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use sleepwise_core::sleep_cycle::{CalculationRequest, CalculationResult, Direction, NewCalculation};

use crate::time_selector::TimeSelection;

/// Everything the calculator screen displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    pub direction: Direction,
    /// The anchor, dated so midnight wrap in results stays chronological.
    pub selected_time: NaiveDateTime,
    /// Candidates from the last "Calculate"; cleared by any edit.
    pub results: Option<Vec<CalculationResult>>,
}

/// A user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Choose between "I want to wake up at..." and "I'm going to bed at...".
    SwitchDirection(Direction),
    /// Set the time-of-day, keeping the selected date.
    SetTime(NaiveTime),
    /// Step the 12-hour picker's hour.
    AdjustHour(i32),
    /// Step the picker's minute.
    AdjustMinute(i32),
    /// Flip AM/PM.
    TogglePeriod,
    /// Jump to the given current local time (truncated to the minute).
    SetNow(NaiveDateTime),
    /// Run the engine and show results.
    Calculate,
}

/// Side work requested by an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Record the calculation in history. Best effort; the displayed
    /// results do not depend on it.
    Persist(NewCalculation),
}

impl CalculatorState {
    /// Initial state: wake-up direction, no results.
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            direction: Direction::default(),
            selected_time: truncate_to_minute(now),
            results: None,
        }
    }

    /// The picker's current fields.
    pub fn selection(&self) -> TimeSelection {
        TimeSelection::from_time(self.selected_time.time())
    }

    /// Label above the time picker.
    pub fn selector_label(&self) -> &'static str {
        match self.direction {
            Direction::Wakeup => "Set Wake Up Time",
            Direction::Bedtime => "Set Bed Time",
        }
    }

    /// Heading above the results, when there are any.
    pub fn results_heading(&self) -> Option<&'static str> {
        self.results
            .as_ref()
            .map(|_| self.direction.results_heading())
    }

    fn with_time(self, time: NaiveTime) -> Self {
        Self {
            selected_time: self.selected_time.date().and_time(time),
            results: None,
            ..self
        }
    }
}

/// Apply one action.
pub fn update(state: CalculatorState, action: Action) -> (CalculatorState, Option<Effect>) {
    match action {
        Action::SwitchDirection(direction) => (
            CalculatorState {
                direction,
                results: None,
                ..state
            },
            None,
        ),
        Action::SetTime(time) => (state.with_time(truncate_time_to_minute(time)), None),
        Action::AdjustHour(delta) => {
            let time = state.selection().adjust_hour(delta).to_time();
            (state.with_time(time), None)
        }
        Action::AdjustMinute(delta) => {
            let time = state.selection().adjust_minute(delta).to_time();
            (state.with_time(time), None)
        }
        Action::TogglePeriod => {
            let time = state.selection().toggle_period().to_time();
            (state.with_time(time), None)
        }
        Action::SetNow(now) => (
            CalculatorState {
                selected_time: truncate_to_minute(now),
                results: None,
                ..state
            },
            None,
        ),
        Action::Calculate => {
            let request = CalculationRequest::new(state.direction, state.selected_time);
            let effect = Effect::Persist(request.summary());
            (
                CalculatorState {
                    results: Some(request.results()),
                    ..state
                },
                Some(effect),
            )
        }
    }
}

fn truncate_to_minute(time: NaiveDateTime) -> NaiveDateTime {
    time.date().and_time(truncate_time_to_minute(time.time()))
}

fn truncate_time_to_minute(time: NaiveTime) -> NaiveTime {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}
