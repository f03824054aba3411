pub mod intercepted_writer;
pub mod line_queue;

pub use intercepted_writer::InterceptedWriter;
pub use line_queue::LineQueue;

use std::io::{self, IsTerminal, Write};

use crate::interface_adapter::port::ByteSink;

impl ByteSink for io::Stdout {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Write::write(self, buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Write::flush(self)
    }

    fn is_tty(&self) -> bool {
        self.is_terminal()
    }
}

impl ByteSink for io::Stderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Write::write(self, buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Write::flush(self)
    }

    fn is_tty(&self) -> bool {
        self.is_terminal()
    }
}
