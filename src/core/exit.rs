//! Termination effect invoked by `fatal`
//!
//! The default terminates the process. Tests and embedders inject their own
//! callback so a fatal record can be observed without ending the process.

use std::fmt;
use std::sync::Arc;

/// Exit status used after a fatal record.
pub const FATAL_EXIT_CODE: i32 = 1;

#[derive(Clone)]
pub struct Exit {
    callback: Arc<dyn Fn(i32) + Send + Sync>,
}

impl Exit {
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(i32) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
        }
    }

    /// Terminate the process with the given status.
    pub fn process() -> Self {
        Self::new(|code| std::process::exit(code))
    }

    pub fn call(&self, code: i32) {
        (self.callback)(code)
    }
}

impl Default for Exit {
    fn default() -> Self {
        Self::process()
    }
}

impl fmt::Debug for Exit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Exit(..)")
    }
}
