#[macro_export]
macro_rules! db_log {
    ($level:expr, $component:expr, $($arg:tt)*) => {
        if $crate::diagnostics::should_log($level) {
            use $crate::diagnostics::color::*;
            let indent = $crate::diagnostics::format_indent();
            let level_str = match $level {
                $crate::diagnostics::DebugLevel::Error => format!("{}ERROR{}", RED, RESET),
                $crate::diagnostics::DebugLevel::Warn => format!("{}WARN{}", YELLOW, RESET),
                $crate::diagnostics::DebugLevel::Info => format!("{}INFO{}", GREEN, RESET),
                $crate::diagnostics::DebugLevel::Debug => format!("{}DEBUG{}", BLUE, RESET),
                $crate::diagnostics::DebugLevel::Trace => format!("{}TRACE{}", GRAY, RESET),
                _ => "".to_string(),
            };
            eprintln!("{}{} [{}] {}", indent, level_str, $component, format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! db_error {
    ($component:expr, $($arg:tt)*) => {
        $crate::db_log!($crate::diagnostics::DebugLevel::Error, $component, $($arg)*);
    };
}

#[macro_export]
macro_rules! db_warn {
    ($component:expr, $($arg:tt)*) => {
        $crate::db_log!($crate::diagnostics::DebugLevel::Warn, $component, $($arg)*);
    };
}

#[macro_export]
macro_rules! db_info {
    ($component:expr, $($arg:tt)*) => {
        $crate::db_log!($crate::diagnostics::DebugLevel::Info, $component, $($arg)*)
    };
}

#[macro_export]
macro_rules! db_debug {
    ($component:expr, $($arg:tt)*) => {
        $crate::db_log!($crate::diagnostics::DebugLevel::Debug, $component, $($arg)*);
    };
}

#[macro_export]
macro_rules! db_trace {
    ($component:expr, $($arg:tt)*) => {
        $crate::db_log!($crate::diagnostics::DebugLevel::Trace, $component, $($arg)*);
    };
}
