//! XXH32 algorithm constants.
//!
//! The five 32-bit primes and the stripe geometry of XXH32.

// ─────────────────────────────────────────────────────────────────────────────
// Primes
// ─────────────────────────────────────────────────────────────────────────────

/// 2654435761
pub const PRIME32_1: u32 = 0x9E37_79B1;
/// 2246822519
pub const PRIME32_2: u32 = 0x85EB_CA77;
/// 3266489917
pub const PRIME32_3: u32 = 0xC2B2_AE3D;
/// 668265263
pub const PRIME32_4: u32 = 0x27D4_EB2F;
/// 374761393
pub const PRIME32_5: u32 = 0x1656_67B1;

// ─────────────────────────────────────────────────────────────────────────────
// Block geometry
// ─────────────────────────────────────────────────────────────────────────────

/// Number of parallel lane accumulators.
pub const LANE_COUNT: usize = 4;

/// Size of one little-endian input word.
pub const WORD_LEN: usize = 4;

/// Bytes consumed by one block-mixing step (one word per lane).
pub const STRIPE_LEN: usize = LANE_COUNT * WORD_LEN;

/// Rotation applied by the per-lane round.
pub const ROUND_ROTATE: u32 = 13;
