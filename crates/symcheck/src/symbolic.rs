//! Symbolic driver
//!
//! The driver body is deliberately tiny: declare the input, run the exact
//! evaluation path the concrete driver runs, and require the oracle.
//! Everything interesting happens on the engine side of the provider.

use symcheck_core::{evaluate, Case, Word};
use symcheck_engine::{
    ExhaustiveEngine, ExplorationOutcome, ExploreConfig, SymbolicInput, SymbolicValueProvider,
};
use tracing::info;

/// Symbol the input is declared under, echoed in counterexamples.
pub const INPUT_SYMBOL: &str = "input";

/// One symbolic run of a case against a provider.
///
/// The input is unconstrained; the engine decides what the current path
/// sees. `require` is the only signal back: a feasible path on which the
/// oracle is violated is an error state for the engine to report.
pub fn drive_symbolic<P: SymbolicValueProvider + ?Sized>(case: &Case, provider: &mut P) {
    let input = Word::symbolic(provider, INPUT_SYMBOL);
    let evaluation = evaluate(case, input);
    provider.require(evaluation.outcome.holds());
}

/// Explore a case with the bounded reference engine.
pub fn explore_case(case: &Case, config: ExploreConfig) -> ExplorationOutcome {
    let engine = ExhaustiveEngine::new(config);
    let property = case.property().describe();
    let outcome = engine.explore(&property, |path| drive_symbolic(case, path));
    info!(
        case = case.name(),
        paths = outcome.paths_explored,
        status = ?outcome.status,
        "exploration finished"
    );
    outcome
}
