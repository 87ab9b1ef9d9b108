use std::sync::atomic::{AtomicUsize, Ordering};

// ログレベル (数値が小さいほど重要)
pub const LEVEL_ERROR: usize = 0;
pub const LEVEL_WARN: usize = 1;
pub const LEVEL_INFO: usize = 2;
pub const LEVEL_DEBUG: usize = 3;

static LOG_LEVEL: AtomicUsize = AtomicUsize::new(LEVEL_WARN);

pub fn set_log_level(level: usize) {
    LOG_LEVEL.store(level, Ordering::Relaxed);
}

pub fn log_level() -> usize {
    LOG_LEVEL.load(Ordering::Relaxed)
}

#[inline]
pub fn enabled(level: usize) -> bool {
    level <= log_level()
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        if $crate::util::log::enabled($crate::util::log::LEVEL_ERROR) {
            eprintln!(
                "[ERROR]({}:{}) {}",
                file!(),
                line!(),
                format_args!($($arg)*)
            )
        }
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        if $crate::util::log::enabled($crate::util::log::LEVEL_WARN) {
            eprintln!(
                "[WARN]({}:{}) {}",
                file!(),
                line!(),
                format_args!($($arg)*)
            )
        }
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        if $crate::util::log::enabled($crate::util::log::LEVEL_INFO) {
            eprintln!(
                "[INFO]({}:{}) {}",
                file!(),
                line!(),
                format_args!($($arg)*)
            )
        }
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        if $crate::util::log::enabled($crate::util::log::LEVEL_DEBUG) {
            eprintln!(
                "[DEBUG]({}:{}) {}",
                file!(),
                line!(),
                format_args!($($arg)*)
            )
        }
    };
}

#[test]
fn test_log_level() {
    set_log_level(LEVEL_INFO);
    assert!(enabled(LEVEL_WARN));
    assert!(!enabled(LEVEL_DEBUG));
    set_log_level(LEVEL_WARN);
    assert_eq!(log_level(), LEVEL_WARN);
}
