//! Domain logic for the sleep-cycle calculator.
//!
//! This crate has zero internal deps and performs no I/O, so the engine can
//! be shared by the API server and the client alike.

pub mod clock;
pub mod error;
pub mod sleep_cycle;
pub mod types;
pub mod validation;
