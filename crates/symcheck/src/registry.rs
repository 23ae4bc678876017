//! Built-in cases

use symcheck_core::{
    Case, CheckArgClosed, CheckArgGapped, MagicComputation, OutputIsClassification,
    OutputNeverEquals, VerdictStyle, Word,
};

/// The forbidden magic output.
pub const MAGIC_OUTPUT: u32 = 253;

/// The magic fold, hunted for the one input whose output lands on 253.
#[must_use]
pub fn magic() -> Case {
    Case::new(
        "magic",
        Box::new(MagicComputation),
        Box::new(OutputNeverEquals {
            forbidden: Word::new(MAGIC_OUTPUT),
        }),
        VerdictStyle::Game,
    )
}

/// `check_arg` with the total partition; its totality property holds.
#[must_use]
pub fn check_arg() -> Case {
    Case::new(
        "check-arg",
        Box::new(CheckArgClosed),
        Box::new(OutputIsClassification),
        VerdictStyle::Classification,
    )
}

/// `check_arg` with the gapped partition; exploration surfaces the gap.
#[must_use]
pub fn check_arg_gapped() -> Case {
    Case::new(
        "check-arg-gapped",
        Box::new(CheckArgGapped),
        Box::new(OutputIsClassification),
        VerdictStyle::Classification,
    )
}

/// Names of every built-in case.
#[must_use]
pub fn names() -> &'static [&'static str] {
    &["magic", "check-arg", "check-arg-gapped"]
}

/// Look up a built-in case by name.
#[must_use]
pub fn find(name: &str) -> Option<Case> {
    match name {
        "magic" => Some(magic()),
        "check-arg" => Some(check_arg()),
        "check-arg-gapped" => Some(check_arg_gapped()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_resolves() {
        for name in names() {
            let case = find(name).unwrap();
            assert_eq!(case.name(), *name);
        }
    }

    #[test]
    fn test_unknown_name_is_none() {
        assert!(find("nope").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn test_case_styles() {
        assert_eq!(magic().style(), VerdictStyle::Game);
        assert_eq!(check_arg().style(), VerdictStyle::Classification);
        assert_eq!(check_arg_gapped().style(), VerdictStyle::Classification);
    }
}
