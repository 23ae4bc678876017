//! Bounded exhaustive reference engine
//!
//! Walks every word in a configured range and runs the driver once per
//! candidate, so each candidate is one execution path. This is the
//! smallest engine that honors the provider contract; it exists for tests
//! and small domains, not as a substitute for a constraint-solving
//! exploration engine.

use crate::outcome::ExplorationOutcome;
use crate::provider::{byte_mask, SymbolicValueProvider};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use symcheck_core::{Counterexample, Word};
use tracing::{debug, info, warn};

/// Configuration for the exhaustive engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExploreConfig {
    /// First candidate word, in unsigned order.
    pub lo: Word,

    /// Last candidate word, inclusive.
    pub hi: Word,

    /// Stop at the first counterexample instead of sweeping the range.
    pub stop_at_first: bool,

    /// Cap on reported counterexamples when sweeping.
    pub max_counterexamples: usize,
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            lo: Word::ZERO,
            hi: Word::new(u32::MAX),
            stop_at_first: true,
            max_counterexamples: 16,
        }
    }
}

impl ExploreConfig {
    /// Configuration over `lo ..= hi` in unsigned order.
    #[must_use]
    pub fn range(lo: u32, hi: u32) -> Self {
        Self {
            lo: Word::new(lo),
            hi: Word::new(hi),
            ..Default::default()
        }
    }

    /// Sweep the whole range instead of stopping at the first violation.
    #[must_use]
    pub fn sweeping(mut self) -> Self {
        self.stop_at_first = false;
        self
    }
}

/// Provider for a single execution path of the exhaustive engine.
///
/// Supports one symbolic value per path; repeated declarations observe the
/// same candidate word.
#[derive(Debug)]
pub struct PathProvider {
    candidate: Word,
    symbol: Option<&'static str>,
    violated: bool,
}

impl PathProvider {
    fn new(candidate: Word) -> Self {
        Self {
            candidate,
            symbol: None,
            violated: false,
        }
    }

    /// The word this path explores.
    #[must_use]
    pub fn candidate(&self) -> Word {
        self.candidate
    }

    fn into_counterexample(self, property: &str) -> Option<Counterexample> {
        if !self.violated {
            return None;
        }
        Some(Counterexample::new(
            self.symbol.unwrap_or("<unnamed>"),
            self.candidate,
            property,
        ))
    }
}

impl SymbolicValueProvider for PathProvider {
    fn provide(&mut self, size_in_bytes: usize, name: &'static str) -> u64 {
        if self.symbol.is_none() {
            self.symbol = Some(name);
        }
        u64::from(self.candidate.bits()) & byte_mask(size_in_bytes)
    }

    fn require(&mut self, condition: bool) {
        if !condition {
            self.violated = true;
        }
    }
}

/// The bounded reference engine.
#[derive(Debug, Clone, Default)]
pub struct ExhaustiveEngine {
    config: ExploreConfig,
}

impl ExhaustiveEngine {
    /// Engine over the configured range.
    #[must_use]
    pub fn new(config: ExploreConfig) -> Self {
        Self { config }
    }

    /// Engine over the full 32-bit domain, stopping at the first violation.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ExploreConfig {
        &self.config
    }

    /// Run `driver` once per candidate word and collect violating paths.
    ///
    /// `property` labels reported counterexamples. The driver sees one
    /// provider per path; a failed `require` on a path turns that path's
    /// candidate into a counterexample.
    pub fn explore<F>(&self, property: &str, mut driver: F) -> ExplorationOutcome
    where
        F: FnMut(&mut PathProvider),
    {
        let started = Instant::now();
        let lo = self.config.lo.bits();
        let hi = self.config.hi.bits();
        if lo > hi {
            warn!(lo, hi, "empty exploration range");
            return ExplorationOutcome::proven(0, started.elapsed());
        }

        let mut counterexamples = Vec::new();
        let mut paths = 0u64;
        let mut candidate = lo;
        loop {
            let mut path = PathProvider::new(Word::new(candidate));
            driver(&mut path);
            paths += 1;
            if let Some(cex) = path.into_counterexample(property) {
                debug!(input = candidate, "path violated its requirement");
                counterexamples.push(cex);
                if self.config.stop_at_first
                    || counterexamples.len() >= self.config.max_counterexamples
                {
                    break;
                }
            }
            if candidate == hi {
                break;
            }
            candidate += 1;
        }

        let duration = started.elapsed();
        if counterexamples.is_empty() {
            info!(paths, "range clean");
            ExplorationOutcome::proven(paths, duration)
        } else {
            info!(
                paths,
                found = counterexamples.len(),
                "counterexamples found"
            );
            ExplorationOutcome::disproven(counterexamples, paths, duration)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::ExplorationStatus;
    use crate::provider::SymbolicInput;

    #[test]
    fn test_clean_range_is_proven() {
        let engine = ExhaustiveEngine::new(ExploreConfig::range(0, 99));
        let outcome = engine.explore("always", |path| {
            let _ = Word::symbolic(path, "input");
            path.require(true);
        });
        assert_eq!(outcome.status, ExplorationStatus::Proven);
        assert_eq!(outcome.paths_explored, 100);
        assert!(outcome.counterexamples.is_empty());
    }

    #[test]
    fn test_single_violation_reported_with_symbol() {
        let engine = ExhaustiveEngine::new(ExploreConfig::range(0, 99));
        let outcome = engine.explore("input is never 42", |path| {
            let input = Word::symbolic(path, "input");
            path.require(input.bits() != 42);
        });
        assert_eq!(outcome.status, ExplorationStatus::Disproven);
        let cex = outcome.first_counterexample().unwrap();
        assert_eq!(cex.symbol, "input");
        assert_eq!(cex.value, Word::new(42));
        assert_eq!(cex.property, "input is never 42");
        // stop_at_first halts the walk on the violating path
        assert_eq!(outcome.paths_explored, 43);
    }

    #[test]
    fn test_sweep_collects_every_violation() {
        let config = ExploreConfig::range(0, 9).sweeping();
        let engine = ExhaustiveEngine::new(config);
        let outcome = engine.explore("input is even", |path| {
            let input = Word::symbolic(path, "input");
            path.require(input.bits() % 2 == 0);
        });
        assert_eq!(outcome.status, ExplorationStatus::Disproven);
        assert_eq!(outcome.counterexamples.len(), 5);
        assert_eq!(outcome.paths_explored, 10);
        let odd: Vec<u32> = outcome
            .counterexamples
            .iter()
            .map(|cex| cex.value.bits())
            .collect();
        assert_eq!(odd, vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn test_sweep_honors_counterexample_cap() {
        let config = ExploreConfig {
            max_counterexamples: 3,
            ..ExploreConfig::range(0, 999).sweeping()
        };
        let engine = ExhaustiveEngine::new(config);
        let outcome = engine.explore("never", |path| {
            let _ = Word::symbolic(path, "input");
            path.require(false);
        });
        assert_eq!(outcome.counterexamples.len(), 3);
        assert_eq!(outcome.paths_explored, 3);
    }

    #[test]
    fn test_empty_range_is_vacuously_proven() {
        let engine = ExhaustiveEngine::new(ExploreConfig::range(10, 5));
        let outcome = engine.explore("anything", |path| path.require(false));
        assert_eq!(outcome.status, ExplorationStatus::Proven);
        assert_eq!(outcome.paths_explored, 0);
    }

    #[test]
    fn test_range_touching_domain_top() {
        let engine = ExhaustiveEngine::new(ExploreConfig::range(u32::MAX - 2, u32::MAX));
        let outcome = engine.explore("always", |path| {
            let _ = Word::symbolic(path, "input");
            path.require(true);
        });
        assert_eq!(outcome.paths_explored, 3);
    }

    #[test]
    fn test_unnamed_path_still_reports() {
        // a driver that requires without declaring anything symbolic
        let engine = ExhaustiveEngine::new(ExploreConfig::range(7, 7));
        let outcome = engine.explore("nothing holds", |path| path.require(false));
        let cex = outcome.first_counterexample().unwrap();
        assert_eq!(cex.symbol, "<unnamed>");
        assert_eq!(cex.value, Word::new(7));
    }

    #[test]
    fn test_default_config_covers_full_domain() {
        let config = ExploreConfig::default();
        assert_eq!(config.lo, Word::ZERO);
        assert_eq!(config.hi, Word::new(u32::MAX));
        assert!(config.stop_at_first);
    }

    proptest::proptest! {
        /// A clean sweep walks exactly the configured range.
        #[test]
        fn clean_sweep_walks_whole_range(lo in 0u32..5_000, len in 0u32..500) {
            let engine = ExhaustiveEngine::new(ExploreConfig::range(lo, lo + len));
            let outcome = engine.explore("always", |path| {
                let _ = Word::symbolic(path, "input");
                path.require(true);
            });
            proptest::prop_assert_eq!(outcome.paths_explored, u64::from(len) + 1);
            proptest::prop_assert_eq!(outcome.status, ExplorationStatus::Proven);
        }

        /// Stopping at the first violation reports the smallest violating word.
        #[test]
        fn first_violation_is_the_smallest(bad in 0u32..2_000) {
            let engine = ExhaustiveEngine::new(ExploreConfig::range(0, 2_000));
            let outcome = engine.explore("below bad", |path| {
                let input = Word::symbolic(path, "input");
                path.require(input.bits() < bad);
            });
            let cex = outcome.first_counterexample().unwrap();
            proptest::prop_assert_eq!(cex.value.bits(), bad);
        }
    }
}
