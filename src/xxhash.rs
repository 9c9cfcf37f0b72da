//! One-shot XXH32 entry points.
//!
//! Thin compositions of [`Xxh32::new`], [`Xxh32::absorb`] and
//! [`Xxh32::finalize`] for callers that have the whole input at hand.

use crate::error::Xxh32Error;
use crate::hasher::Xxh32;
use crate::input::HashInput;

/// One-shot XXH32 of `data` with `seed`.
///
/// # Parity vectors
/// * `xxh32(b"", 0)` == `0x02CC5D05`
/// * `xxh32(b"abc", 0)` == `0x32D153FF`
#[inline]
#[must_use]
pub fn xxh32(data: &[u8], seed: u32) -> u32 {
    Xxh32::new(seed).absorb(data).finalize()
}

/// One-shot XXH32 of the UTF-8 octets of `text`.
#[inline]
#[must_use]
pub fn xxh32_str(text: &str, seed: u32) -> u32 {
    xxh32(text.as_bytes(), seed)
}

/// One-shot XXH32 of any input [`HashInput`] can normalise.
pub fn xxh32_input<'a>(input: impl Into<HashInput<'a>>, seed: u32) -> Result<u32, Xxh32Error> {
    let bytes = input.into().to_bytes()?;
    Ok(xxh32(&bytes, seed))
}
