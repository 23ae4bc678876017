//! Core domain types for symcheck
//!
//! This crate provides the pieces a dual-mode checking run is assembled from:
//! - `Word`: the pinned 32-bit input domain
//! - `Target`: pure functions under verification
//! - `Property`: the oracles they are checked against
//! - `Case` and `evaluate`: the target/oracle pairing both drivers share
//! - `Counterexample`: engine-reported violating inputs
//!
//! Nothing here performs I/O. The concrete and symbolic drivers live in the
//! `symcheck` crate; the engine boundary lives in `symcheck-engine`.

mod case;
mod counterexample;
mod error;
mod property;
mod target;
mod word;

pub use case::*;
pub use counterexample::*;
pub use error::*;
pub use property::*;
pub use target::*;
pub use word::*;
