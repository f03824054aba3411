use parking_lot::Mutex;

use crate::interface_adapter::port::{LoopHandle, Task};

/// Fan-out scheduler over every live cooperative loop.
///
/// Input callbacks arrive on the reader thread; the registry hands them
/// to each running loop so prompt mutations happen on loop threads, not
/// on the reader. Closed handles are purged lazily, on the next
/// registration or dispatch.
#[derive(Default)]
pub struct LoopRegistry {
    loops: Mutex<Vec<Box<dyn LoopHandle>>>,
}

impl LoopRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a loop handle, dropping any handle that has closed.
    pub fn add_loop(&self, handle: Box<dyn LoopHandle>) {
        let mut loops = self.loops.lock();
        loops.retain(|h| !h.is_closed());
        loops.push(handle);
    }

    /// Schedule the task onto every currently running loop.
    ///
    /// Loops that exist but are not running are skipped, not queued
    /// into; a loop that starts later must not replay stale input.
    pub fn call_in_loops(&self, task: Task) {
        let mut loops = self.loops.lock();
        loops.retain(|h| !h.is_closed());
        for handle in loops.iter() {
            if handle.is_running() {
                handle.call_soon(task.clone());
            }
        }
    }

    pub fn len(&self) -> usize {
        self.loops.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.loops.lock().is_empty()
    }
}
