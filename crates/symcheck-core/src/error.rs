//! Error taxonomy for harness runs

use crate::word::Word;
use thiserror::Error;

/// Errors a single checking run can produce.
///
/// Every failure is local and terminal: runs are one-shot, side-effect-free
/// computations, so there is no retry or recovery path. A usage error means
/// the invocation must be fixed; the two violation variants mean the target
/// or the property must be.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HarnessError {
    /// The concrete driver was invoked without an input argument.
    #[error("missing input argument")]
    MissingInput,

    /// The invocation argument is not base-10 integer text.
    #[error("invalid input `{raw}`: expected a base-10 integer")]
    MalformedInput {
        /// The offending argument text.
        raw: String,
    },

    /// The argument parsed but fits in 32 bits under neither the signed nor
    /// the unsigned reading.
    #[error("input {value} does not fit in a 32-bit word")]
    InputOutOfRange {
        /// The parsed out-of-range value.
        value: i64,
    },

    /// A target fell through a partition its author marked unreachable.
    #[error("target `{target}` reached its unreachable branch on input {input}")]
    UnreachableBranch {
        /// Name of the offending target.
        target: String,
        /// The input that slipped through the partition.
        input: Word,
    },

    /// The property oracle rejected an ordinary output in a run whose
    /// verdict is the classification itself.
    #[error("property `{property}` violated by `{target}` on input {input}")]
    PropertyViolated {
        /// Name of the target.
        target: String,
        /// Description of the violated property.
        property: String,
        /// The violating input.
        input: Word,
    },
}

impl HarnessError {
    /// Whether this error is a usage error (fix the invocation) rather than
    /// a genuine property violation (fix the target or the property).
    #[must_use]
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            HarnessError::MissingInput
                | HarnessError::MalformedInput { .. }
                | HarnessError::InputOutOfRange { .. }
        )
    }
}
