// config.rs - Compile-time configuration constants.
//
// The crate reads no environment variables; these values are fixed at build
// time and callers pass anything else explicitly.

// Default seed when none is given (`Xxh32::default`, `Xxh32Builder::default`).
pub const DEFAULT_SEED: u32 = 0;

// Read granularity for `io::hash_reader` (64 KiB).
pub const READ_BUFFER_SIZE: usize = 64 * 1024;
