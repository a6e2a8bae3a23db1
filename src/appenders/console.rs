//! Console appender implementation
//!
//! Every record goes to standard error, one line per record.

use crate::core::{Appender, Result};
use std::io::{IsTerminal, Write};

#[derive(Debug, Default)]
pub struct ConsoleAppender;

impl ConsoleAppender {
    pub fn new() -> Self {
        Self
    }

    /// Whether standard error is attached to a terminal (used to decide on
    /// coloured text output).
    pub fn is_terminal() -> bool {
        std::io::stderr().is_terminal()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, line: &str) -> Result<()> {
        let mut stderr = std::io::stderr().lock();
        writeln!(stderr, "{}", line)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
