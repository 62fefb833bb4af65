//! Presentation-side logic for the sleep-cycle calculator.
//!
//! The calculator state is a plain value driven by [`state::update`]; the
//! engine runs locally and synchronously. Persisting a history record is
//! handed off to [`sync::HistorySync`], a background task that never blocks
//! or fails the displayed calculation.

pub mod api_client;
pub mod config;
pub mod state;
pub mod sync;
pub mod time_selector;
