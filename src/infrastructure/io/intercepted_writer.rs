use std::io;

use crate::interface_adapter::controller::PromptController;
use crate::interface_adapter::port::ByteSink;

/// Stand-in for a program's stdout or stderr that keeps the prompt
/// intact: every write is bracketed by a prompt clear and redraw, done
/// atomically through the prompt's lock.
///
/// Several interceptors may share one prompt (stdout and stderr both
/// route through it); interleaved writes then serialize on that lock.
pub struct InterceptedWriter {
    prompt: PromptController,
    name: &'static str,
    is_tty: bool,
    closed: bool,
}

impl InterceptedWriter {
    pub fn new(prompt: PromptController, name: &'static str) -> Self {
        let is_tty = prompt.sink_is_tty();
        Self {
            prompt,
            name,
            is_tty,
            closed: false,
        }
    }

    fn check_open(&self) -> io::Result<()> {
        if self.closed {
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                format!("{} is closed", self.name),
            ));
        }
        Ok(())
    }
}

impl ByteSink for InterceptedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.check_open()?;
        log::trace!("{} write: {} bytes", self.name, buf.len());
        self.prompt.write_through(&[buf])
    }

    fn flush(&mut self) -> io::Result<()> {
        self.check_open()?;
        self.prompt.flush_sink()
    }

    /// One clear/redraw cycle around the whole batch.
    fn writelines(&mut self, lines: &[&[u8]]) -> io::Result<()> {
        self.check_open()?;
        log::trace!("{} writelines: {} lines", self.name, lines.len());
        self.prompt.write_through(lines)?;
        Ok(())
    }

    fn close(&mut self) -> io::Result<()> {
        self.closed = true;
        Ok(())
    }

    fn is_tty(&self) -> bool {
        self.is_tty
    }
}

// =============================================================================
// Tests
// =============================================================================
