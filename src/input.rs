//! Input normalization: every accepted input kind becomes one `&[u8]`.
//!
//! Text is hashed as its UTF-8 octets.  Rust `str` is already UTF-8 and is
//! borrowed as-is; UTF-16 code units (as produced by Windows APIs) are
//! transcoded, with surrogate pairs combined into 4-byte sequences.  An
//! unpaired surrogate is reported as [`Xxh32Error::InvalidInputEncoding`].

use std::borrow::Cow;

use crate::error::Xxh32Error;

/// A value that can be hashed once normalised to bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashInput<'a> {
    /// Raw bytes, hashed verbatim.
    Bytes(&'a [u8]),
    /// UTF-8 text, hashed as its octets.
    Text(&'a str),
    /// UTF-16 code units, transcoded to UTF-8 before hashing.
    Utf16(&'a [u16]),
}

impl<'a> HashInput<'a> {
    /// Returns the byte sequence to hash.
    ///
    /// Borrows for `Bytes` and `Text`; allocates only for `Utf16`.
    pub fn to_bytes(&self) -> Result<Cow<'a, [u8]>, Xxh32Error> {
        match *self {
            HashInput::Bytes(b) => Ok(Cow::Borrowed(b)),
            HashInput::Text(s) => Ok(Cow::Borrowed(s.as_bytes())),
            HashInput::Utf16(units) => encode_utf16(units).map(Cow::Owned),
        }
    }
}

impl<'a> From<&'a [u8]> for HashInput<'a> {
    fn from(b: &'a [u8]) -> Self {
        HashInput::Bytes(b)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for HashInput<'a> {
    fn from(b: &'a [u8; N]) -> Self {
        HashInput::Bytes(b)
    }
}

impl<'a> From<&'a Vec<u8>> for HashInput<'a> {
    fn from(b: &'a Vec<u8>) -> Self {
        HashInput::Bytes(b)
    }
}

impl<'a> From<&'a str> for HashInput<'a> {
    fn from(s: &'a str) -> Self {
        HashInput::Text(s)
    }
}

impl<'a> From<&'a String> for HashInput<'a> {
    fn from(s: &'a String) -> Self {
        HashInput::Text(s)
    }
}

impl<'a> From<&'a [u16]> for HashInput<'a> {
    fn from(units: &'a [u16]) -> Self {
        HashInput::Utf16(units)
    }
}

/// Transcodes UTF-16 code units to UTF-8 octets.
///
/// Fails on the first unpaired surrogate, reporting its index.
pub fn encode_utf16(units: &[u16]) -> Result<Vec<u8>, Xxh32Error> {
    let mut out = Vec::with_capacity(units.len() * 3);
    let mut offset = 0usize;
    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(c) => {
                let mut buf = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                offset += c.len_utf16();
            }
            Err(e) => {
                return Err(Xxh32Error::InvalidInputEncoding {
                    offset,
                    unit: e.unpaired_surrogate(),
                })
            }
        }
    }
    Ok(out)
}
