pub mod macros;

use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

#[derive(Copy, Clone, PartialEq, PartialOrd)]
pub enum DebugLevel {
    Off = 0,
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
    Trace = 5,
}

pub static DEBUG_LEVEL: AtomicU8 = AtomicU8::new(DebugLevel::Off as u8);

static INDENT: AtomicUsize = AtomicUsize::new(0);

pub fn set_debug_level(level: DebugLevel) {
    DEBUG_LEVEL.store(level as u8, Ordering::Relaxed);
}

pub fn should_log(level: DebugLevel) -> bool {
    level as u8 <= DEBUG_LEVEL.load(Ordering::Relaxed)
}

pub fn indent() {
    INDENT.fetch_add(1, Ordering::Relaxed);
}

pub fn dedent() {
    let _ = INDENT.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |v| {
        Some(v.saturating_sub(1))
    });
}

pub fn format_indent() -> String {
    "  ".repeat(INDENT.load(Ordering::Relaxed))
}

pub mod color {
    pub const RED: &str = "\x1b[31m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const GREEN: &str = "\x1b[32m";
    pub const BLUE: &str = "\x1b[34m";
    pub const GRAY: &str = "\x1b[90m";
    pub const RESET: &str = "\x1b[0m";
}
