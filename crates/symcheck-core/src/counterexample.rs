//! Structured counterexamples
//!
//! A counterexample is the intended product of a successful verification
//! run: a concrete input that makes the property fail. It is surfaced as
//! data, never swallowed, so it can be fed straight back into the concrete
//! driver to reproduce the failure deterministically.

use crate::word::Word;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A concrete input the engine found to violate a property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counterexample {
    /// Symbol name the input was declared under, echoed by the engine so
    /// multi-input harnesses stay readable.
    pub symbol: String,

    /// The violating input word.
    pub value: Word,

    /// Description of the property it violates.
    pub property: String,
}

impl Counterexample {
    /// Create a counterexample for `symbol = value`.
    pub fn new(
        symbol: impl Into<String>,
        value: Word,
        property: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            value,
            property: property.into(),
        }
    }

    /// Every rendering of the value, e.g. `4294967042 (0xffffff02, -254 as i32)`.
    ///
    /// The signed view is shown only when it differs from the unsigned one.
    #[must_use]
    pub fn rendered_value(&self) -> String {
        let bits = self.value.bits();
        let signed = self.value.as_signed();
        if signed < 0 {
            format!("{bits} (0x{bits:08x}, {signed} as i32)")
        } else {
            format!("{bits} (0x{bits:08x})")
        }
    }
}

impl fmt::Display for Counterexample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} = {} violates: {}",
            self.symbol,
            self.rendered_value(),
            self.property
        )
    }
}
