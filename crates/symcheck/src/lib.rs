//! Symcheck: dual-mode property checking for pure 32-bit functions
//!
//! Every check is a [`Case`]: a pure target function paired with the
//! property it must satisfy. The same case runs in two modes:
//!
//! - **Concrete**: parse one input from the invocation, run the target,
//!   print a verdict.
//! - **Symbolic**: declare the input unconstrained and let an exploration
//!   engine hunt for an input that violates the property; a hit comes back
//!   as a structured counterexample.
//!
//! The two modes share one evaluation path, so an engine-reported
//! counterexample replays deterministically under the concrete driver.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use symcheck::{explore_case, registry, run_concrete_str};
//! use symcheck::engine::ExploreConfig;
//!
//! let case = registry::magic();
//! let outcome = explore_case(&case, ExploreConfig::range(0xFFFF_FE00, 0xFFFF_FFFF));
//! if let Some(cex) = outcome.first_counterexample() {
//!     // feed the counterexample back into the concrete driver
//!     let report = run_concrete_str(&case, &cex.value.to_string())?;
//!     println!("{}", report.verdict);
//! }
//! # Ok::<(), symcheck::HarnessError>(())
//! ```

pub mod concrete;
pub mod registry;
pub mod symbolic;

pub use concrete::{run_concrete, run_concrete_args, run_concrete_str, ConcreteReport, Verdict};
pub use symbolic::{drive_symbolic, explore_case, INPUT_SYMBOL};
pub use symcheck_core::*;
pub use symcheck_engine as engine;

/// Current version of symcheck
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
