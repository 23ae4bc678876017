//! Case pairing and the shared evaluation path

use crate::property::{BoxedProperty, Property, PropertyOutcome};
use crate::target::{BoxedTarget, Target, TargetOutput};
use crate::word::Word;
use serde::{Deserialize, Serialize};

/// How a concrete run renders its verdict.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VerdictStyle {
    /// A violating input is the input the player was hunting for:
    /// "You win!" on violation, "You lose" otherwise.
    Game,

    /// The verdict mirrors the classification itself; a violation is an
    /// assertion failure, not a verdict.
    Classification,
}

/// A target paired with the property it must satisfy.
///
/// Built once and handed to both drivers. The pairing is the unit of
/// verification: concrete runs and symbolic exploration consult the same
/// target code and the same oracle, so a counterexample found by one mode
/// replays exactly in the other.
pub struct Case {
    name: String,
    target: BoxedTarget,
    property: BoxedProperty,
    style: VerdictStyle,
}

impl Case {
    /// Pair a target with its property.
    pub fn new(
        name: impl Into<String>,
        target: BoxedTarget,
        property: BoxedProperty,
        style: VerdictStyle,
    ) -> Self {
        Self {
            name: name.into(),
            target,
            property,
            style,
        }
    }

    /// Case name, as selected on the command line.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The function under test.
    #[must_use]
    pub fn target(&self) -> &dyn Target {
        self.target.as_ref()
    }

    /// The oracle it must satisfy.
    #[must_use]
    pub fn property(&self) -> &dyn Property {
        self.property.as_ref()
    }

    /// Verdict rendering for concrete runs.
    #[must_use]
    pub fn style(&self) -> VerdictStyle {
        self.style
    }
}

/// Result of pushing one input word through a case.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// What the target produced.
    pub output: TargetOutput,

    /// What the oracle said about it.
    pub outcome: PropertyOutcome,
}

/// The one evaluation path.
///
/// Both drivers call this function and neither re-derives the target or
/// the oracle. An `Unreachable` output is a violation before the oracle is
/// even consulted: a partition that leaks an input is wrong no matter what
/// the property says.
#[must_use]
pub fn evaluate(case: &Case, input: Word) -> Evaluation {
    let output = case.target().apply(input);
    let outcome = match output {
        TargetOutput::Value(word) => case.property().check(input, word),
        TargetOutput::Unreachable => PropertyOutcome::Violated,
    };
    Evaluation { output, outcome }
}
