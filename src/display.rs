// display.rs - Display-level global and the displaylevel! macro.

use std::sync::atomic::{AtomicU32, Ordering};

// ── Display level global ──────────────────────────────────────────────────────
//
// Process-wide verbosity for stderr diagnostics. Hashing never reads it.
//
// 0 = no output; 1 = errors only; 2 = normal (default); 3 = info; 4 = verbose
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

/// Returns the current display level.
#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

/// Sets the display level.
#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Conditionally print to stderr at or above `level`.
#[macro_export]
macro_rules! displaylevel {
    ($level:expr, $($arg:tt)*) => {
        if $crate::display::display_level() >= $level {
            eprint!($($arg)*);
        }
    };
}
