//! Thesis-defense desk automation: reconciles submission folders against the
//! committee roster and the existing student folders.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
