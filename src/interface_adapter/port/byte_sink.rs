use std::io;

/// Byte-sink capability implemented by any downstream writer.
///
/// This is the same shape `InterceptedWriter` exposes upward, so the
/// interceptor can transparently stand in for a program's stdout or
/// stderr. Failures propagate to the immediate caller; no new error
/// kinds are defined at this boundary.
pub trait ByteSink: Send {
    /// Write the buffer, returning the number of bytes consumed.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;

    /// Flush buffered bytes to the underlying device.
    fn flush(&mut self) -> io::Result<()>;

    /// Write a batch of buffers as one unit.
    fn writelines(&mut self, lines: &[&[u8]]) -> io::Result<()> {
        for line in lines {
            self.write_all(line)?;
        }
        Ok(())
    }

    /// Write the whole buffer.
    fn write_all(&mut self, mut buf: &[u8]) -> io::Result<()> {
        while !buf.is_empty() {
            let n = self.write(buf)?;
            if n == 0 {
                return Err(io::ErrorKind::WriteZero.into());
            }
            buf = &buf[n..];
        }
        Ok(())
    }

    /// Close the sink; subsequent writes may fail.
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Whether the sink is attached to a terminal.
    fn is_tty(&self) -> bool {
        false
    }
}
