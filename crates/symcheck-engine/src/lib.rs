//! Engine boundary and reference engine for symcheck
//!
//! This crate owns everything on the engine side of a symbolic run:
//! - `SymbolicValueProvider`: the two-operation capability an exploration
//!   engine hands to a driver
//! - `RecordingProvider`: a mock provider for engine-less test runs
//! - `ExhaustiveEngine`: a bounded reference engine for tests and small
//!   domains
//! - `ExplorationOutcome`: structured results carrying counterexamples
//!
//! The harness never schedules paths, forks execution, or times runs out;
//! all of that is the engine's business.

mod exhaustive;
mod outcome;
mod provider;

pub use exhaustive::*;
pub use outcome::*;
pub use provider::*;
