//! Logging macros for [`Logger`](crate::Logger) implementations.
//!
//! The leveled macros concatenate their arguments with `Display`, the way
//! `print!` would with `"{}{}{}"`. Nothing is rendered when the level is
//! disabled.
//!
//! # Examples
//!
//! ```
//! use rust_logging_facade::prelude::*;
//! use rust_logging_facade::{fields, infof, warn};
//!
//! let buffer = BufferAppender::new();
//! let log = RecordAdapter::from_parts(
//!     &Config::default(),
//!     SharedAppender::new(buffer.clone()),
//!     Exit::new(|_| {}),
//! );
//!
//! let port = 8080;
//! infof!(log, "listening on port {}", port);
//! warn!(log.with("", &fields!["port", port]), "port ", port, " is privileged");
//! assert_eq!(buffer.len(), 2);
//! ```

/// Build a `Vec<FieldValue>` of alternating keys and values.
#[macro_export]
macro_rules! fields {
    () => {
        ::std::vec::Vec::<$crate::core::FieldValue>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::core::FieldValue::from($value)),+]
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __concat_display {
    ($($arg:expr),+) => {
        $crate::core::Concat(&[$(&$arg as &dyn ::std::fmt::Display),+])
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::core::Logger::trace(&$logger, $crate::__concat_display!($($arg),+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::core::Logger::debug(&$logger, $crate::__concat_display!($($arg),+))
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_logging_facade::prelude::*;
/// # let buffer = BufferAppender::new();
/// # let logger = EntryAdapter::from_parts(&Config::default(), SharedAppender::new(buffer.clone()), Exit::new(|_| {}));
/// use rust_logging_facade::info;
/// info!(logger, "user ", 42, " signed in");
/// assert!(buffer.contents().contains("user 42 signed in"));
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::core::Logger::info(&$logger, $crate::__concat_display!($($arg),+))
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::core::Logger::warn(&$logger, $crate::__concat_display!($($arg),+))
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::core::Logger::error(&$logger, $crate::__concat_display!($($arg),+))
    };
}

/// Log a fatal-level message, then run the logger's exit effect.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $crate::core::Logger::fatal(&$logger, $crate::__concat_display!($($arg),+))
    };
}

/// Log a formatted debug-level message.
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::core::Logger::debugf(&$logger, ::std::format_args!($($arg)+))
    };
}

/// Log a formatted info-level message.
#[macro_export]
macro_rules! infof {
    ($logger:expr, $($arg:tt)+) => {
        $crate::core::Logger::infof(&$logger, ::std::format_args!($($arg)+))
    };
}

/// Log a formatted message at info level through any [`PrintfLogger`](crate::PrintfLogger).
#[macro_export]
macro_rules! printf {
    ($logger:expr, $($arg:tt)+) => {
        $crate::core::PrintfLogger::printf(&$logger, ::std::format_args!($($arg)+))
    };
}
