//! The logging contract shared by every backend adapter
//!
//! Calling code depends on [`Logger`] only. Two adapters implement it:
//! [`EntryAdapter`](crate::entry::EntryAdapter) over the entry-chaining
//! engine and [`RecordAdapter`](crate::record::RecordAdapter) over the
//! record/handler engine.
//!
//! No method returns an error. Bad input degrades to a best-effort
//! default; `fatal` is the one call with a process-wide side effect.

use super::context::Context;
use super::field::FieldValue;
use super::log_level::Level;
use std::fmt;

/// The narrow printf-style capability some third-party libraries accept.
///
/// Object safe, so it can be handed out as `&dyn PrintfLogger`.
pub trait PrintfLogger {
    /// Log a formatted message at `Info`.
    fn printf(&self, args: fmt::Arguments<'_>);
}

/// Leveled, field-attaching logger.
///
/// `with` and `with_error` return a new logger and leave the receiver
/// untouched, so loggers derived concurrently from one base never share
/// fields.
pub trait Logger: PrintfLogger + Send + Sync + Sized {
    /// Attach `args` (consumed as `key, value` pairs) under `group`, or at
    /// the top level when `group` is empty. A trailing unpaired element is
    /// dropped.
    #[must_use]
    fn with(&self, group: &str, args: &[FieldValue]) -> Self;

    /// Attach `err`'s text under the `error` key.
    #[must_use]
    fn with_error<E: fmt::Display + ?Sized>(&self, err: &E) -> Self;

    fn trace<M: fmt::Display>(&self, msg: M);
    fn debug<M: fmt::Display>(&self, msg: M);
    fn info<M: fmt::Display>(&self, msg: M);
    fn warn<M: fmt::Display>(&self, msg: M);
    fn error<M: fmt::Display>(&self, msg: M);

    /// Emit at `Fatal`, flush, then run the termination effect with a
    /// non-zero status.
    fn fatal<M: fmt::Display>(&self, msg: M);

    fn debugf(&self, args: fmt::Arguments<'_>);
    fn infof(&self, args: fmt::Arguments<'_>);

    /// Emit at `level`, merging the fields carried by `ctx` and the
    /// `key, value` pairs in `args`. Nothing is formatted when `level` is
    /// disabled.
    fn log(&self, ctx: &Context, level: Level, msg: &str, args: &[FieldValue]);

    /// Whether a record at `level` would be emitted.
    fn enabled(&self, level: Level) -> bool;
}

/// Lazily concatenates its parts with their `Display` impls.
///
/// Built by the leveled macros so a disabled call never allocates.
pub struct Concat<'a>(pub &'a [&'a dyn fmt::Display]);

impl fmt::Display for Concat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in self.0 {
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}
