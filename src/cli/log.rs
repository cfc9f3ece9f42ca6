//! Hand-rolled verbosity level and display macros, in the spirit of the
//! `DISPLAYLEVEL` global the reference CLI uses for its own console output.
//! The library never logs; only this binary-only module does.

use std::sync::atomic::{AtomicU32, Ordering};

/// 0 = silent, 1 = errors only, 2 = normal, 3 = verbose.
pub static DISPLAY_LEVEL: AtomicU32 = AtomicU32::new(2);

#[inline]
pub fn display_level() -> u32 {
    DISPLAY_LEVEL.load(Ordering::Relaxed)
}

#[inline]
pub fn set_display_level(level: u32) {
    DISPLAY_LEVEL.store(level, Ordering::Relaxed);
}

/// Prints to stderr if the current display level is at least `level`.
macro_rules! display {
    ($level:expr, $($arg:tt)*) => {
        if $crate::cli::log::display_level() >= $level {
            eprintln!($($arg)*);
        }
    };
}

macro_rules! info {
    ($($arg:tt)*) => { $crate::cli::log::display!(2, $($arg)*) };
}

macro_rules! verbose {
    ($($arg:tt)*) => { $crate::cli::log::display!(3, $($arg)*) };
}

macro_rules! error_line {
    ($($arg:tt)*) => { $crate::cli::log::display!(1, $($arg)*) };
}

pub(crate) use display;
pub(crate) use error_line;
pub(crate) use info;
pub(crate) use verbose;
