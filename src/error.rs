//! Error type for the boundary of the hashing API.
//!
//! The XXH32 core itself is total; the only failures are caller-contract
//! violations while turning an input into bytes or a seed into a `u32`.

use std::fmt;

/// Errors reported by input normalization and seed parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Xxh32Error {
    /// A UTF-16 input contained an unpaired surrogate.
    ///
    /// `offset` is the index of the offending code unit, `unit` its value.
    InvalidInputEncoding { offset: usize, unit: u16 },
    /// A seed string was empty or contained non-digit characters.
    InvalidSeed(String),
}

impl Xxh32Error {
    /// Short stable name for the error kind, for diagnostics.
    pub fn error_name(&self) -> &'static str {
        match self {
            Xxh32Error::InvalidInputEncoding { .. } => "ERROR_invalidInputEncoding",
            Xxh32Error::InvalidSeed(_) => "ERROR_invalidSeed",
        }
    }
}

impl fmt::Display for Xxh32Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Xxh32Error::InvalidInputEncoding { offset, unit } => write!(
                f,
                "invalid input encoding: unpaired surrogate 0x{unit:04X} at code unit {offset}"
            ),
            Xxh32Error::InvalidSeed(s) => {
                write!(f, "invalid seed {s:?}: expected a decimal or 0x-prefixed hex number")
            }
        }
    }
}

impl std::error::Error for Xxh32Error {}
