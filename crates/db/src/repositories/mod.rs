//! Repository layer: one zero-sized struct per table, with async functions
//! taking the pool explicitly.

pub mod calculation_repo;

pub use calculation_repo::CalculationRepo;
