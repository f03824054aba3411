use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use parking_lot::Mutex;

use crate::interface_adapter::port::{LoopHandle, Task};

/// Cycle interval of the polling loop.
const POLL_INTERVAL: Duration = Duration::from_millis(20);

/// Minimal cooperative loop for programs that have no event loop of
/// their own: sleeps, pops one queued task, repeats.
///
/// [`run`](PollLoop::run) blocks the calling thread until
/// [`shutdown`](PollLoop::shutdown) is called from elsewhere.
pub struct PollLoop {
    shared: Arc<PollShared>,
}

struct PollShared {
    queue: Mutex<VecDeque<Task>>,
    running: AtomicBool,
    shutdown: AtomicBool,
}

impl Default for PollLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl PollLoop {
    pub fn new() -> Self {
        Self {
            shared: Arc::new(PollShared {
                queue: Mutex::new(VecDeque::new()),
                running: AtomicBool::new(false),
                shutdown: AtomicBool::new(false),
            }),
        }
    }

    /// A registrable scheduling handle for this loop.
    pub fn handle(&self) -> PollLoopHandle {
        PollLoopHandle {
            shared: Arc::clone(&self.shared),
        }
    }

    /// Drive the loop on the current thread until shutdown.
    ///
    /// One task per cycle, oldest first. Task errors are logged and do
    /// not stop the loop.
    pub fn run(&self) {
        self.shared.running.store(true, Ordering::SeqCst);
        log::info!("entering poll loop");

        while !self.shared.shutdown.load(Ordering::SeqCst) {
            std::thread::sleep(POLL_INTERVAL);
            let task = self.shared.queue.lock().pop_front();
            if let Some(task) = task {
                if let Err(err) = task() {
                    log::error!("scheduled task failed: {err:#}");
                }
            }
        }

        self.shared.running.store(false, Ordering::SeqCst);
        log::info!("exiting poll loop");
    }

    /// Ask the loop to stop after its current cycle. Safe to call from
    /// any thread, including from a task running on the loop.
    pub fn shutdown(&self) {
        self.shared.shutdown.store(true, Ordering::SeqCst);
    }
}

/// Cloneable scheduling handle registered with the loop registry.
#[derive(Clone)]
pub struct PollLoopHandle {
    shared: Arc<PollShared>,
}

impl PollLoopHandle {
    pub fn shutdown(&self) {
        self.shared.shutdown.store(true, Ordering::SeqCst);
    }
}

impl LoopHandle for PollLoopHandle {
    fn call_soon(&self, task: Task) {
        self.shared.queue.lock().push_back(task);
    }

    fn is_running(&self) -> bool {
        self.shared.running.load(Ordering::SeqCst)
    }

    fn is_closed(&self) -> bool {
        self.shared.shutdown.load(Ordering::SeqCst)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn runs_queued_tasks_in_order_until_shutdown() {
        let poll_loop = PollLoop::new();
        let handle = poll_loop.handle();

        let order = Arc::new(Mutex::new(Vec::new()));
        for i in 0..3 {
            let captured = Arc::clone(&order);
            handle.call_soon(Arc::new(move || {
                captured.lock().push(i);
                Ok(())
            }));
        }
        let stopper = poll_loop.handle();
        handle.call_soon(Arc::new(move || {
            stopper.shutdown();
            Ok(())
        }));

        poll_loop.run();
        assert_eq!(*order.lock(), [0, 1, 2]);
        assert!(!poll_loop.handle().is_running());
        assert!(poll_loop.handle().is_closed());
    }

    #[test]
    fn failing_task_does_not_stop_the_loop() {
        let poll_loop = PollLoop::new();
        let handle = poll_loop.handle();

        let count = Arc::new(AtomicUsize::new(0));
        handle.call_soon(Arc::new(|| anyhow::bail!("task broke")));
        let captured = Arc::clone(&count);
        handle.call_soon(Arc::new(move || {
            captured.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }));
        let stopper = poll_loop.handle();
        handle.call_soon(Arc::new(move || {
            stopper.shutdown();
            Ok(())
        }));

        poll_loop.run();
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn handle_reports_running_only_while_run_is_active() {
        let poll_loop = PollLoop::new();
        let handle = poll_loop.handle();
        assert!(!handle.is_running());
        assert!(!handle.is_closed());

        let probe = poll_loop.handle();
        let observed = Arc::new(AtomicBool::new(false));
        let captured = Arc::clone(&observed);
        handle.call_soon(Arc::new(move || {
            captured.store(probe.is_running(), Ordering::SeqCst);
            probe.shutdown();
            Ok(())
        }));

        poll_loop.run();
        assert!(observed.load(Ordering::SeqCst));
        assert!(!handle.is_running());
    }
}
