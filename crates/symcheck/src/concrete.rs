//! Concrete driver
//!
//! Reads one decimal argument, pushes it through the case's shared
//! evaluation path, and renders a verdict. Arguments are validated before
//! the target runs; a malformed invocation never reaches the function
//! under test.

use serde::{Deserialize, Serialize};
use std::fmt;
use symcheck_core::{
    evaluate, Case, HarnessError, PropertyOutcome, TargetOutput, VerdictStyle, Word,
};
use tracing::debug;

/// Verdict of one concrete run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Game style: this input produces the sought output.
    Win,

    /// Game style: it does not.
    Lose,

    /// Classification style: code 1.
    Accept,

    /// Classification style: code 0.
    Reject,
}

impl Verdict {
    /// The line the driver prints.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Win => "You win!",
            Verdict::Lose => "You lose",
            Verdict::Accept => "ACCEPT (code 1)",
            Verdict::Reject => "REJECT (code 0)",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Report of one concrete run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConcreteReport {
    /// Case name.
    pub case: String,

    /// The parsed input word.
    pub input: Word,

    /// The output word the target produced.
    pub output: Word,

    /// Whether the shared property held on this input.
    pub property_held: bool,

    /// Rendered verdict.
    pub verdict: Verdict,
}

/// Run a case on one already-parsed input word.
///
/// A run that reaches a target's unreachable branch, or whose oracle
/// rejects a classification output, is an assertion failure and comes back
/// as an error; it is never folded into a verdict.
pub fn run_concrete(case: &Case, input: Word) -> Result<ConcreteReport, HarnessError> {
    let evaluation = evaluate(case, input);
    let output = match evaluation.output {
        TargetOutput::Value(word) => word,
        TargetOutput::Unreachable => {
            return Err(HarnessError::UnreachableBranch {
                target: case.target().name().to_string(),
                input,
            })
        }
    };
    let verdict = match (case.style(), evaluation.outcome) {
        (VerdictStyle::Game, PropertyOutcome::Violated) => Verdict::Win,
        (VerdictStyle::Game, PropertyOutcome::Holds) => Verdict::Lose,
        (VerdictStyle::Classification, PropertyOutcome::Holds) => {
            if output.bits() == 1 {
                Verdict::Accept
            } else {
                Verdict::Reject
            }
        }
        (VerdictStyle::Classification, PropertyOutcome::Violated) => {
            return Err(HarnessError::PropertyViolated {
                target: case.target().name().to_string(),
                property: case.property().describe(),
                input,
            })
        }
    };
    debug!(case = case.name(), input = input.bits(), ?verdict, "concrete run");
    Ok(ConcreteReport {
        case: case.name().to_string(),
        input,
        output,
        property_held: evaluation.outcome.holds(),
        verdict,
    })
}

/// Run a case on raw argument text.
pub fn run_concrete_str(case: &Case, raw: &str) -> Result<ConcreteReport, HarnessError> {
    let input = Word::from_decimal(raw)?;
    run_concrete(case, input)
}

/// Run a case on the first invocation argument, failing fast when absent.
pub fn run_concrete_args<I, S>(case: &Case, mut args: I) -> Result<ConcreteReport, HarnessError>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    let raw = args.next().ok_or(HarnessError::MissingInput)?;
    run_concrete_str(case, raw.as_ref())
}
