//! Console output display
//!
//! Writes each message as one line to a console sink and duplicates it to the
//! diagnostic log stream.

use crate::domain::{DisplayError, OutputDisplay};
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Output display backed by a writable console sink (stdout by default)
pub struct ConsoleOutputDisplay<W: Write + Send = io::Stdout> {
    sink: Mutex<W>,
}

impl ConsoleOutputDisplay {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for ConsoleOutputDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write + Send> ConsoleOutputDisplay<W> {
    /// Create a display writing to an arbitrary sink
    pub fn with_writer(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    pub fn into_inner(self) -> W {
        self.sink.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> OutputDisplay for ConsoleOutputDisplay<W> {
    fn show(&self, message: &str) -> Result<(), DisplayError> {
        log::debug!("{}", message);

        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(sink, "{}", message).map_err(DisplayError::write)?;
        sink.flush().map_err(DisplayError::write)
    }
}
