//! The 32-bit input domain

use crate::error::HarnessError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-bit input word.
///
/// The width is pinned on purpose: the targets in this workspace fold over
/// exactly 32 bit positions, so inputs and outputs are always one word of
/// this size regardless of host platform.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word(u32);

impl Word {
    /// The all-zero word.
    pub const ZERO: Word = Word(0);

    /// Wrap a raw 32-bit pattern.
    #[must_use]
    pub const fn new(bits: u32) -> Self {
        Word(bits)
    }

    /// The raw bit pattern, read unsigned.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// The same bits reinterpreted as a two's-complement signed value.
    #[must_use]
    pub const fn as_signed(self) -> i32 {
        self.0 as i32
    }

    /// Parse a base-10 invocation argument.
    ///
    /// Accepts both renderings of a 32-bit value: unsigned
    /// (`0 ..= 4294967295`) and signed (`-2147483648 ..= -1`). The two
    /// readings overlap on `0 ..= 2147483647` and agree there, so
    /// `4294967042` and `-254` name the same word.
    pub fn from_decimal(raw: &str) -> Result<Self, HarnessError> {
        let value: i64 = raw
            .trim()
            .parse()
            .map_err(|_| HarnessError::MalformedInput {
                raw: raw.to_string(),
            })?;
        if value < i64::from(i32::MIN) || value > i64::from(u32::MAX) {
            return Err(HarnessError::InputOutOfRange { value });
        }
        Ok(Word(value as u32))
    }
}

impl From<u32> for Word {
    fn from(bits: u32) -> Self {
        Word(bits)
    }
}

impl From<i32> for Word {
    fn from(value: i32) -> Self {
        Word(value as u32)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
