use crossbeam_channel::{Receiver, Sender, unbounded};

/// Unbounded queue of submitted lines, bridging the prompt (producer,
/// on a loop thread) and whatever consumes input line by line.
///
/// Cloning shares the same queue. Reading blocks until a line arrives
/// or every producer side is gone.
#[derive(Clone)]
pub struct LineQueue {
    tx: Sender<String>,
    rx: Receiver<String>,
}

impl Default for LineQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl LineQueue {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx }
    }

    pub fn push(&self, line: String) {
        // The receiver lives inside this queue, so send cannot fail.
        let _ = self.tx.send(line);
    }

    /// Blocking read of the next line; `None` once the queue is
    /// disconnected.
    pub fn read_line(&self) -> Option<String> {
        self.rx.recv().ok()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_come_out_in_push_order() {
        let queue = LineQueue::new();
        queue.push("one".to_string());
        queue.push("two".to_string());
        assert_eq!(queue.read_line().as_deref(), Some("one"));
        assert_eq!(queue.read_line().as_deref(), Some("two"));
    }

    #[test]
    fn clones_share_the_queue() {
        let queue = LineQueue::new();
        let other = queue.clone();
        other.push("shared".to_string());
        assert_eq!(queue.read_line().as_deref(), Some("shared"));
    }

    #[test]
    fn read_blocks_until_a_line_arrives() {
        let queue = LineQueue::new();
        let producer = queue.clone();
        let handle = std::thread::spawn(move || {
            producer.push("from thread".to_string());
        });
        assert_eq!(queue.read_line().as_deref(), Some("from thread"));
        handle.join().expect("producer panicked");
    }
}
