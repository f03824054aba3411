/// Incremental UTF-8 decoder for byte chunks read off a raw stream.
///
/// A multi-byte character split across reads is buffered until its
/// remaining bytes arrive; invalid bytes become U+FFFD so a stray byte
/// can never wedge the stream.
#[derive(Debug, Default)]
pub struct Utf8Decoder {
    pending: Vec<u8>,
}

impl Utf8Decoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decode(&mut self, bytes: &[u8]) -> String {
        self.pending.extend_from_slice(bytes);
        let mut out = String::new();
        let mut rest: &[u8] = &self.pending;

        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    out.push_str(valid);
                    rest = &[];
                    break;
                }
                Err(err) => {
                    let (valid, after) = rest.split_at(err.valid_up_to());
                    // Valid prefix is guaranteed by the error.
                    out.push_str(std::str::from_utf8(valid).unwrap_or(""));
                    match err.error_len() {
                        Some(bad) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            rest = &after[bad..];
                        }
                        None => {
                            // Incomplete tail; keep it for the next chunk.
                            rest = after;
                            break;
                        }
                    }
                }
            }
        }

        self.pending = rest.to_vec();
        out
    }

    /// Whether a partial character is still buffered.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
