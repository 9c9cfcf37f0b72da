//! Seed conversion.
//!
//! A seed may arrive as text (command line, config) or as a wider integer.
//! Either way it is reduced modulo 2^32: oversized values wrap, they are
//! never rejected.  Only text that is not a number at all is an error.

use crate::error::Xxh32Error;

/// Parses a seed from decimal or `0x`-prefixed hexadecimal text.
///
/// Surrounding whitespace is ignored.  Numbers of any length are accepted
/// and reduced modulo 2^32, so `"4294967296"` parses to `0`.
pub fn parse_seed(s: &str) -> Result<u32, Xxh32Error> {
    let trimmed = s.trim();
    let (digits, radix) = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (trimmed, 10),
    };

    if digits.is_empty() {
        return Err(Xxh32Error::InvalidSeed(s.to_owned()));
    }

    let mut value: u32 = 0;
    for c in digits.chars() {
        let d = c
            .to_digit(radix)
            .ok_or_else(|| Xxh32Error::InvalidSeed(s.to_owned()))?;
        value = value.wrapping_mul(radix).wrapping_add(d);
    }
    Ok(value)
}

/// Reduces a 64-bit value to a seed (low 32 bits).
#[inline]
pub fn seed_from_u64(v: u64) -> u32 {
    v as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_seed() {
        assert_eq!(parse_seed("20141025"), Ok(20_141_025));
    }

    #[test]
    fn hex_seed() {
        assert_eq!(parse_seed("0xDEADBEEF"), Ok(0xDEAD_BEEF));
        assert_eq!(parse_seed("0Xff"), Ok(255));
    }

    #[test]
    fn decimal_wraps_modulo_2_pow_32() {
        assert_eq!(parse_seed("4294967295"), Ok(u32::MAX));
        assert_eq!(parse_seed("4294967296"), Ok(0));
        assert_eq!(parse_seed("4294967297"), Ok(1));
        // 10^20 mod 2^32
        assert_eq!(parse_seed("100000000000000000000"), Ok((10u128.pow(20) % (1u128 << 32)) as u32));
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(parse_seed("  42\n"), Ok(42));
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(matches!(parse_seed(""), Err(Xxh32Error::InvalidSeed(_))));
        assert!(matches!(parse_seed("0x"), Err(Xxh32Error::InvalidSeed(_))));
        assert!(matches!(parse_seed("-1"), Err(Xxh32Error::InvalidSeed(_))));
        assert!(matches!(parse_seed("12a"), Err(Xxh32Error::InvalidSeed(_))));
    }

    #[test]
    fn u64_seed_truncates() {
        assert_eq!(seed_from_u64(0x1_0000_0005), 5);
        assert_eq!(seed_from_u64(u64::MAX), u32::MAX);
    }
}
