// xxh32 - xxHash32 streaming state and one-shot helpers

pub mod constants;
pub mod error;
pub mod hasher;
pub mod input;
pub mod seed;
pub mod xxhash;
pub mod config;
pub mod display;
pub mod io;

// ── Version constants ─────────────────────────────────────────────────────────
pub const VERSION_MAJOR: u32 = 0;
pub const VERSION_MINOR: u32 = 1;
pub const VERSION_RELEASE: u32 = 0;
pub const VERSION_NUMBER: u32 = VERSION_MAJOR * 100 * 100 + VERSION_MINOR * 100 + VERSION_RELEASE;
pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");

/// Returns the runtime version number (`major * 10000 + minor * 100 + release`).
pub fn version_number() -> u32 {
    VERSION_NUMBER
}

/// Returns the runtime version string.
pub fn version_string() -> &'static str {
    VERSION_STRING
}

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use error::Xxh32Error;
pub use hasher::{Xxh32, Xxh32Builder};
pub use input::HashInput;
pub use seed::{parse_seed, seed_from_u64};
pub use display::{display_level, set_display_level};
pub use io::hash_reader;
pub use xxhash::{xxh32, xxh32_input, xxh32_str};
