//! Streaming XXH32 state machine.
//!
//! [`Xxh32`] owns everything one hash computation needs: the seed, four lane
//! accumulators, the running input length and a 16-byte carry for bytes that
//! have not yet formed a full stripe.  Input may arrive in chunks of any size;
//! stripe boundaries are tracked across calls, so
//! `absorb(a); absorb(b)` always yields the same digest as `absorb(a ++ b)`.
//!
//! ```
//! use xxh32::Xxh32;
//!
//! let mut h = Xxh32::new(0);
//! h.absorb(b"Hello, ").absorb(b"world!");
//! assert_eq!(h.finalize(), 0x31B7_405D);
//! ```

use core::hash::{BuildHasher, Hasher};

use crate::config::DEFAULT_SEED;
use crate::constants::{
    LANE_COUNT, PRIME32_1, PRIME32_2, PRIME32_3, PRIME32_4, PRIME32_5, ROUND_ROTATE, STRIPE_LEN,
    WORD_LEN,
};
use crate::error::Xxh32Error;
use crate::input::HashInput;

// ─────────────────────────────────────────────────────────────────────────────
// Mixing primitives
// ─────────────────────────────────────────────────────────────────────────────

#[inline(always)]
fn read_u32_le(bytes: &[u8]) -> u32 {
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// One lane update: `rotl(acc + word * P2, 13) * P1`.
#[inline(always)]
fn round(acc: u32, word: u32) -> u32 {
    acc.wrapping_add(word.wrapping_mul(PRIME32_2))
        .rotate_left(ROUND_ROTATE)
        .wrapping_mul(PRIME32_1)
}

const fn init_lanes(seed: u32) -> [u32; LANE_COUNT] {
    [
        seed.wrapping_add(PRIME32_1).wrapping_add(PRIME32_2),
        seed.wrapping_add(PRIME32_2),
        seed,
        seed.wrapping_sub(PRIME32_1),
    ]
}

/// Mixes every complete stripe of `data` into `lanes` and returns the
/// unconsumed tail (always shorter than [`STRIPE_LEN`]).
#[inline]
fn mix_stripes<'a>(lanes: &mut [u32; LANE_COUNT], data: &'a [u8]) -> &'a [u8] {
    let stripes = data.chunks_exact(STRIPE_LEN);
    let rest = stripes.remainder();
    for stripe in stripes {
        for (lane, word) in lanes.iter_mut().zip(stripe.chunks_exact(WORD_LEN)) {
            *lane = round(*lane, read_u32_le(word));
        }
    }
    rest
}

#[inline]
fn converge(lanes: &[u32; LANE_COUNT]) -> u32 {
    let [v1, v2, v3, v4] = *lanes;
    v1.rotate_left(1)
        .wrapping_add(v2.rotate_left(7))
        .wrapping_add(v3.rotate_left(12))
        .wrapping_add(v4.rotate_left(18))
}

/// Folds the < 16 leftover bytes: whole words first, then single bytes.
#[inline]
fn fold_tail(mut acc: u32, tail: &[u8]) -> u32 {
    let words = tail.chunks_exact(WORD_LEN);
    let bytes = words.remainder();
    for word in words {
        acc = acc
            .wrapping_add(read_u32_le(word).wrapping_mul(PRIME32_3))
            .rotate_left(17)
            .wrapping_mul(PRIME32_4);
    }
    for &byte in bytes {
        acc = acc
            .wrapping_add(u32::from(byte).wrapping_mul(PRIME32_5))
            .rotate_left(11)
            .wrapping_mul(PRIME32_1);
    }
    acc
}

#[inline]
fn avalanche(mut acc: u32) -> u32 {
    acc ^= acc >> 15;
    acc = acc.wrapping_mul(PRIME32_2);
    acc ^= acc >> 13;
    acc = acc.wrapping_mul(PRIME32_3);
    acc ^ (acc >> 16)
}

// ─────────────────────────────────────────────────────────────────────────────
// Streaming state
// ─────────────────────────────────────────────────────────────────────────────

/// Incremental XXH32 hasher.
///
/// Not internally synchronized: share one instance across threads only
/// behind a lock, or give each thread its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xxh32 {
    seed: u32,
    lanes: [u32; LANE_COUNT],
    /// Every byte absorbed since the last reset, carried bytes included.
    total_len: u64,
    carry: [u8; STRIPE_LEN],
    carry_len: usize,
}

impl Xxh32 {
    /// Creates a hasher initialised from `seed`.
    #[inline]
    pub const fn new(seed: u32) -> Self {
        Self {
            seed,
            lanes: init_lanes(seed),
            total_len: 0,
            carry: [0; STRIPE_LEN],
            carry_len: 0,
        }
    }

    /// Discards all absorbed input and re-initialises from the stored seed.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::new(self.seed);
    }

    /// The seed this instance was created with.
    #[inline]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Total number of bytes absorbed since creation or the last reset.
    #[inline]
    pub fn total_len(&self) -> u64 {
        self.total_len
    }

    /// Bytes held back because they do not yet complete a stripe (0..=15).
    #[inline]
    pub fn pending(&self) -> &[u8] {
        &self.carry[..self.carry_len]
    }

    /// Feeds `data` into the hash.  Returns `self` so calls can be chained.
    pub fn absorb(&mut self, mut data: &[u8]) -> &mut Self {
        if data.is_empty() {
            return self;
        }
        self.total_len = self.total_len.wrapping_add(data.len() as u64);

        let carry_len = self.carry_len;
        if carry_len + data.len() < STRIPE_LEN {
            self.carry[carry_len..carry_len + data.len()].copy_from_slice(data);
            self.carry_len += data.len();
            return self;
        }

        if carry_len > 0 {
            let fill = STRIPE_LEN - carry_len;
            self.carry[carry_len..].copy_from_slice(&data[..fill]);
            mix_stripes(&mut self.lanes, &self.carry);
            self.carry_len = 0;
            data = &data[fill..];
        }

        let rest = mix_stripes(&mut self.lanes, data);
        self.carry[..rest.len()].copy_from_slice(rest);
        self.carry_len = rest.len();
        self
    }

    /// Normalises `input` to bytes and absorbs it.
    ///
    /// On an encoding error nothing is absorbed and the state is unchanged.
    pub fn absorb_input<'a>(
        &mut self,
        input: impl Into<HashInput<'a>>,
    ) -> Result<&mut Self, Xxh32Error> {
        let bytes = input.into().to_bytes()?;
        Ok(self.absorb(&bytes))
    }

    /// Computes the digest of everything absorbed so far, leaving the state
    /// untouched so more input can follow.
    #[must_use]
    pub fn digest(&self) -> u32 {
        let acc = if self.total_len >= STRIPE_LEN as u64 {
            converge(&self.lanes)
        } else {
            self.seed.wrapping_add(PRIME32_5)
        };
        // Only the low 32 bits of the length take part.
        let acc = acc.wrapping_add(self.total_len as u32);
        avalanche(fold_tail(acc, self.pending()))
    }

    /// Returns the digest and resets the instance.
    ///
    /// Two effects: the digest of all absorbed input is returned, and the
    /// hasher is re-initialised with the same seed, ready for an independent
    /// computation.  Use [`Xxh32::digest`] to read the value without the reset.
    #[must_use = "finalize resets the hasher; the digest is lost if unused"]
    pub fn finalize(&mut self) -> u32 {
        let digest = self.digest();
        self.reset();
        digest
    }
}

impl Default for Xxh32 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Hasher for Xxh32 {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.absorb(bytes);
    }

    #[inline]
    fn finish(&self) -> u64 {
        u64::from(self.digest())
    }
}

/// [`BuildHasher`] producing seeded [`Xxh32`] instances, for use with
/// `HashMap::with_hasher`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Xxh32Builder {
    seed: u32,
}

impl Default for Xxh32Builder {
    fn default() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }
}

impl Xxh32Builder {
    pub const fn with_seed(seed: u32) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl BuildHasher for Xxh32Builder {
    type Hasher = Xxh32;

    #[inline]
    fn build_hasher(&self) -> Xxh32 {
        Xxh32::new(self.seed)
    }
}
