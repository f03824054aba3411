use std::io::{ErrorKind, Read};
use std::thread::{self, JoinHandle};

use super::key_decoder::KeyDecoder;
use super::utf8::Utf8Decoder;

/// Invoked on the reader thread with one decoded key token at a time.
pub type KeyCallback = Box<dyn FnMut(&str) -> anyhow::Result<()> + Send>;

/// Background thread reading raw bytes and feeding decoded key tokens
/// into a callback.
///
/// The callback runs on the reader thread; it is expected to hand work
/// off to a loop rather than block. Callback errors are logged and the
/// stream keeps going; read errors and end of input stop the thread.
pub struct InputReader {
    handle: JoinHandle<()>,
}

impl InputReader {
    pub fn spawn<R>(source: R, callback: KeyCallback) -> std::io::Result<Self>
    where
        R: Read + Send + 'static,
    {
        let handle = thread::Builder::new()
            .name("termline-input".to_string())
            .spawn(move || read_loop(source, callback))?;
        Ok(Self { handle })
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the reader thread to stop. It stops when the source
    /// reaches end of input or fails.
    pub fn join(self) {
        if self.handle.join().is_err() {
            log::error!("input thread panicked");
        }
    }
}

fn read_loop<R: Read>(mut source: R, mut callback: KeyCallback) {
    log::info!("input thread started");

    let mut utf8 = Utf8Decoder::new();
    let mut keys = KeyDecoder::new();
    let mut buf = [0u8; 1024];

    loop {
        let n = match source.read(&mut buf) {
            Ok(0) => {
                log::info!("input stream closed, input thread stopping");
                return;
            }
            Ok(n) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => {
                log::error!("input thread read failed: {err}");
                return;
            }
        };

        let text = utf8.decode(&buf[..n]);
        for token in keys.decode(&text, false) {
            if let Err(err) = callback(&token) {
                log::error!("error in handling input: {err:#}");
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use parking_lot::Mutex;

    fn collecting_callback() -> (KeyCallback, Arc<Mutex<Vec<String>>>) {
        let tokens = Arc::new(Mutex::new(Vec::new()));
        let captured = Arc::clone(&tokens);
        let callback: KeyCallback = Box::new(move |token: &str| {
            captured.lock().push(token.to_string());
            Ok(())
        });
        (callback, tokens)
    }

    #[test]
    fn delivers_decoded_tokens_until_end_of_input() {
        let (callback, tokens) = collecting_callback();
        let reader = InputReader::spawn(Cursor::new(b"hi\x1b[A\r".to_vec()), callback)
            .expect("spawn failed");
        reader.join();
        assert_eq!(*tokens.lock(), ["h", "i", "up", "enter"]);
    }

    #[test]
    fn multibyte_input_decodes_to_single_tokens() {
        let (callback, tokens) = collecting_callback();
        let reader = InputReader::spawn(Cursor::new("héllo🦀".as_bytes().to_vec()), callback)
            .expect("spawn failed");
        reader.join();
        assert_eq!(*tokens.lock(), ["h", "é", "l", "l", "o", "🦀"]);
    }

    #[test]
    fn callback_errors_do_not_stop_the_stream() {
        let calls = Arc::new(AtomicUsize::new(0));
        let captured = Arc::clone(&calls);
        let callback: KeyCallback = Box::new(move |_token: &str| {
            captured.fetch_add(1, Ordering::SeqCst);
            anyhow::bail!("handler broke")
        });
        let reader =
            InputReader::spawn(Cursor::new(b"abc".to_vec()), callback).expect("spawn failed");
        reader.join();
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    /// Reader yielding its chunks one read() at a time, splitting an
    /// escape sequence across reads.
    struct ChunkedReader {
        chunks: Vec<Vec<u8>>,
    }

    impl Read for ChunkedReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.chunks.is_empty() {
                return Ok(0);
            }
            let chunk = self.chunks.remove(0);
            buf[..chunk.len()].copy_from_slice(&chunk);
            Ok(chunk.len())
        }
    }

    #[test]
    fn escape_sequence_split_across_reads() {
        let (callback, tokens) = collecting_callback();
        let source = ChunkedReader {
            chunks: vec![b"\x1b".to_vec(), b"[".to_vec(), b"Ax".to_vec()],
        };
        let reader = InputReader::spawn(source, callback).expect("spawn failed");
        reader.join();
        assert_eq!(*tokens.lock(), ["up", "x"]);
    }

    #[test]
    fn empty_source_finishes_promptly() {
        let (callback, tokens) = collecting_callback();
        let reader =
            InputReader::spawn(Cursor::new(Vec::new()), callback).expect("spawn failed");
        while !reader.is_finished() {
            std::thread::yield_now();
        }
        reader.join();
        assert!(tokens.lock().is_empty());
    }
}
