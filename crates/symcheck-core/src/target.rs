//! Target functions under verification
//!
//! A target is a pure map from one 32-bit word to an output. Purity is an
//! invariant, not a convention: the symbolic driver runs the same code the
//! concrete driver runs, and hidden state would let the two modes diverge.
//! Targets must also be total in finite time for every representable input;
//! a partition the author believed total but is not surfaces as
//! [`TargetOutput::Unreachable`], never as a silent default.

use crate::word::Word;
use serde::{Deserialize, Serialize};

/// Output of one target application.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TargetOutput {
    /// The ordinary result word.
    Value(Word),

    /// The input fell through a partition the author marked unreachable.
    /// Both drivers report this as a violation.
    Unreachable,
}

impl TargetOutput {
    /// The result word, if the run produced one.
    #[must_use]
    pub fn value(self) -> Option<Word> {
        match self {
            TargetOutput::Value(word) => Some(word),
            TargetOutput::Unreachable => None,
        }
    }

    /// Whether the run hit the unreachable branch.
    #[must_use]
    pub fn is_unreachable(self) -> bool {
        matches!(self, TargetOutput::Unreachable)
    }
}

/// A pure function over 32-bit words.
pub trait Target: Send + Sync {
    /// Short name used in verdicts, errors, and logs.
    fn name(&self) -> &'static str;

    /// Apply the function. Must be deterministic, side-effect free, and
    /// finite for every input word.
    fn apply(&self, input: Word) -> TargetOutput;
}

/// Owned, type-erased target.
pub type BoxedTarget = Box<dyn Target>;

/// XOR the input with every single-bit mask in turn.
///
/// The loop toggles each of the 32 bit positions exactly once, so the net
/// effect equals bitwise complement. The fold itself is what an exploration
/// engine walks; do not replace it with `!input`.
#[must_use]
pub fn magic_computation(input: Word) -> Word {
    let mut bits = input.bits();
    for i in 0..32 {
        bits ^= 1u32 << i;
    }
    Word::new(bits)
}

/// Two-way classification of a signed word against the threshold 10.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    /// Above the threshold; code 0.
    Rejected,

    /// At or below the threshold; code 1.
    Accepted,
}

impl Classification {
    /// The integer code this classification is reported as.
    #[must_use]
    pub const fn code(self) -> u32 {
        match self {
            Classification::Rejected => 0,
            Classification::Accepted => 1,
        }
    }
}

/// Threshold classifier whose two guards cover every input.
#[must_use]
pub fn check_arg_closed(a: i32) -> Option<Classification> {
    if a > 10 {
        Some(Classification::Rejected)
    } else if a <= 10 {
        Some(Classification::Accepted)
    } else {
        // not reachable: the guards partition i32
        None
    }
}

/// Threshold classifier with strict guards on both sides, kept as written.
///
/// `a == 10` satisfies neither guard. The gap is part of the function under
/// test; the suite in `symcheck` surfaces it rather than this module
/// papering over it.
#[must_use]
pub fn check_arg_gapped(a: i32) -> Option<Classification> {
    if a > 10 {
        Some(Classification::Rejected)
    } else if a < 10 {
        Some(Classification::Accepted)
    } else {
        None
    }
}

/// The magic fold as a named target.
#[derive(Debug, Default, Copy, Clone)]
pub struct MagicComputation;

impl Target for MagicComputation {
    fn name(&self) -> &'static str {
        "magic_computation"
    }

    fn apply(&self, input: Word) -> TargetOutput {
        TargetOutput::Value(magic_computation(input))
    }
}

fn classify(result: Option<Classification>) -> TargetOutput {
    match result {
        Some(class) => TargetOutput::Value(Word::new(class.code())),
        None => TargetOutput::Unreachable,
    }
}

/// `check_arg` with the total `> / <=` partition.
#[derive(Debug, Default, Copy, Clone)]
pub struct CheckArgClosed;

impl Target for CheckArgClosed {
    fn name(&self) -> &'static str {
        "check_arg"
    }

    fn apply(&self, input: Word) -> TargetOutput {
        classify(check_arg_closed(input.as_signed()))
    }
}

/// `check_arg` with the gapped `> / <` partition.
#[derive(Debug, Default, Copy, Clone)]
pub struct CheckArgGapped;

impl Target for CheckArgGapped {
    fn name(&self) -> &'static str {
        "check_arg_gapped"
    }

    fn apply(&self, input: Word) -> TargetOutput {
        classify(check_arg_gapped(input.as_signed()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_magic_computation_is_complement() {
        for bits in [0u32, 1, 253, 0xFFFF_FF02, u32::MAX, 0x8000_0000] {
            assert_eq!(magic_computation(Word::new(bits)).bits(), !bits);
        }
    }

    #[test]
    fn test_magic_computation_known_counterexample() {
        // the only input whose fold lands on 253
        assert_eq!(
            magic_computation(Word::new(0xFFFF_FF02)),
            Word::new(253)
        );
    }

    #[test]
    fn test_magic_computation_is_involution() {
        let word = Word::new(0xDEAD_BEEF);
        assert_eq!(magic_computation(magic_computation(word)), word);
    }

    #[test]
    fn test_check_arg_closed_partition() {
        assert_eq!(check_arg_closed(11), Some(Classification::Rejected));
        assert_eq!(check_arg_closed(i32::MAX), Some(Classification::Rejected));
        assert_eq!(check_arg_closed(10), Some(Classification::Accepted));
        assert_eq!(check_arg_closed(9), Some(Classification::Accepted));
        assert_eq!(check_arg_closed(-1), Some(Classification::Accepted));
        assert_eq!(check_arg_closed(i32::MIN), Some(Classification::Accepted));
    }

    #[test]
    fn test_check_arg_gapped_partition() {
        assert_eq!(check_arg_gapped(11), Some(Classification::Rejected));
        assert_eq!(check_arg_gapped(9), Some(Classification::Accepted));
        assert_eq!(check_arg_gapped(i32::MIN), Some(Classification::Accepted));
        // the gap
        assert_eq!(check_arg_gapped(10), None);
    }

    #[test]
    fn test_classification_codes() {
        assert_eq!(Classification::Rejected.code(), 0);
        assert_eq!(Classification::Accepted.code(), 1);
    }

    #[test]
    fn test_magic_target_wraps_fold() {
        let target = MagicComputation;
        assert_eq!(target.name(), "magic_computation");
        assert_eq!(
            target.apply(Word::ZERO),
            TargetOutput::Value(Word::new(u32::MAX))
        );
    }

    #[test]
    fn test_check_arg_targets() {
        let ten = Word::from(10i32);
        assert_eq!(
            CheckArgClosed.apply(ten),
            TargetOutput::Value(Word::new(1))
        );
        assert_eq!(CheckArgGapped.apply(ten), TargetOutput::Unreachable);
        assert_eq!(
            CheckArgGapped.apply(Word::from(11i32)),
            TargetOutput::Value(Word::new(0))
        );
    }

    #[test]
    fn test_target_output_accessors() {
        assert_eq!(
            TargetOutput::Value(Word::new(7)).value(),
            Some(Word::new(7))
        );
        assert_eq!(TargetOutput::Unreachable.value(), None);
        assert!(TargetOutput::Unreachable.is_unreachable());
        assert!(!TargetOutput::Value(Word::ZERO).is_unreachable());
    }

    proptest! {
        /// The fold equals bitwise complement on every word.
        #[test]
        fn fold_complement_equivalence(bits: u32) {
            prop_assert_eq!(magic_computation(Word::new(bits)).bits(), !bits);
        }

        /// The closed partition classifies every input.
        #[test]
        fn closed_partition_is_total(a: i32) {
            prop_assert!(check_arg_closed(a).is_some());
        }

        /// The gapped partition misses exactly the threshold.
        #[test]
        fn gapped_partition_misses_only_ten(a: i32) {
            prop_assert_eq!(check_arg_gapped(a).is_none(), a == 10);
        }
    }
}
