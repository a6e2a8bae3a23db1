//! Appender trait for log output destinations
//!
//! Engines format a record into one line and hand it to an appender.
//! `SharedAppender` is the single long-lived sink handle an engine holds;
//! it serializes writers so concurrent records never interleave.

use super::error::Result;
use parking_lot::Mutex;
use std::sync::Arc;

pub trait Appender: Send + Sync {
    fn append(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

#[derive(Clone)]
pub struct SharedAppender {
    inner: Arc<Mutex<Box<dyn Appender>>>,
}

impl SharedAppender {
    pub fn new<A: Appender + 'static>(appender: A) -> Self {
        Self::from_boxed(Box::new(appender))
    }

    pub fn from_boxed(appender: Box<dyn Appender>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(appender)),
        }
    }

    /// Write one formatted line.
    ///
    /// Failures and panics inside the appender are reported on stderr and
    /// swallowed; returns whether the line was written.
    pub fn write_line(&self, line: &str) -> bool {
        let mut appender = self.inner.lock();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            appender.append(line)
        }));
        report(appender.name(), "append", result)
    }

    /// Flush the underlying appender, with the same isolation as `write_line`.
    pub fn flush(&self) -> bool {
        let mut appender = self.inner.lock();
        let result =
            std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| appender.flush()));
        report(appender.name(), "flush", result)
    }

    pub fn name(&self) -> String {
        self.inner.lock().name().to_string()
    }
}

impl std::fmt::Debug for SharedAppender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedAppender")
            .field("name", &self.name())
            .finish()
    }
}

fn report(
    name: &str,
    operation: &str,
    result: std::thread::Result<Result<()>>,
) -> bool {
    match result {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            eprintln!("[LOGGER ERROR] Appender '{}' {} failed: {}", name, operation, e);
            false
        }
        Err(panic_info) => {
            let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_info.downcast_ref::<String>() {
                s.clone()
            } else {
                "Unknown panic".to_string()
            };
            eprintln!(
                "[LOGGER CRITICAL] Appender '{}' panicked during {}: {}",
                name, operation, panic_msg
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::LoggerError;

    struct FailingAppender;

    impl Appender for FailingAppender {
        fn append(&mut self, _line: &str) -> Result<()> {
            Err(LoggerError::writer("closed"))
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    struct PanickingAppender;

    impl Appender for PanickingAppender {
        fn append(&mut self, _line: &str) -> Result<()> {
            panic!("boom");
        }

        fn flush(&mut self) -> Result<()> {
            panic!("boom");
        }

        fn name(&self) -> &str {
            "panicking"
        }
    }

    #[test]
    fn test_failing_appender_is_swallowed() {
        let shared = SharedAppender::new(FailingAppender);
        assert!(!shared.write_line("hello"));
        assert!(shared.flush());
    }

    #[test]
    fn test_panicking_appender_is_isolated() {
        let shared = SharedAppender::new(PanickingAppender);
        assert!(!shared.write_line("hello"));
        assert!(!shared.flush());
        // The mutex is not poisoned; the handle stays usable.
        assert_eq!(shared.name(), "panicking");
    }
}
