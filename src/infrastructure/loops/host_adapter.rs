use std::sync::{Arc, Weak};

use crate::interface_adapter::port::{CooperativeLoop, LoopHandle, Task};
use crate::usecase::LoopRegistry;

/// Adapts a host-owned event loop into a [`LoopHandle`].
///
/// Only a weak reference is held, so the registry never keeps a host
/// loop alive; once the host drops its loop the handle reports closed
/// and is purged.
pub struct HostLoopAdapter {
    inner: Weak<dyn CooperativeLoop>,
}

impl HostLoopAdapter {
    pub fn new(host: &Arc<dyn CooperativeLoop>) -> Self {
        Self {
            inner: Arc::downgrade(host),
        }
    }
}

impl LoopHandle for HostLoopAdapter {
    fn call_soon(&self, task: Task) {
        if let Some(host) = self.inner.upgrade() {
            host.schedule(task);
        }
    }

    fn is_running(&self) -> bool {
        match self.inner.upgrade() {
            Some(host) => host.is_running(),
            None => false,
        }
    }

    fn is_closed(&self) -> bool {
        match self.inner.upgrade() {
            Some(host) => host.is_closed(),
            None => true,
        }
    }
}

/// Register a host loop with the registry. Called by the embedding
/// program whenever it starts an event loop of its own.
pub fn register_host_loop(registry: &LoopRegistry, host: &Arc<dyn CooperativeLoop>) {
    log::info!("registering host event loop");
    registry.add_loop(Box::new(HostLoopAdapter::new(host)));
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    #[derive(Default)]
    struct MockHostLoop {
        scheduled: AtomicUsize,
        running: AtomicBool,
        closed: AtomicBool,
    }

    impl CooperativeLoop for MockHostLoop {
        fn schedule(&self, _task: Task) {
            self.scheduled.fetch_add(1, Ordering::SeqCst);
        }

        fn is_running(&self) -> bool {
            self.running.load(Ordering::SeqCst)
        }

        fn is_closed(&self) -> bool {
            self.closed.load(Ordering::SeqCst)
        }
    }

    fn noop_task() -> Task {
        Arc::new(|| Ok(()))
    }

    #[test]
    fn forwards_scheduling_to_the_live_host() {
        let host = Arc::new(MockHostLoop::default());
        host.running.store(true, Ordering::SeqCst);
        let as_loop: Arc<dyn CooperativeLoop> = host.clone();
        let adapter = HostLoopAdapter::new(&as_loop);

        assert!(adapter.is_running());
        assert!(!adapter.is_closed());
        adapter.call_soon(noop_task());
        assert_eq!(host.scheduled.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn dropped_host_reports_closed_and_drops_tasks() {
        let host = Arc::new(MockHostLoop::default());
        let as_loop: Arc<dyn CooperativeLoop> = host;
        let adapter = HostLoopAdapter::new(&as_loop);
        drop(as_loop);

        assert!(adapter.is_closed());
        assert!(!adapter.is_running());
        // No host left; scheduling is a silent no-op.
        adapter.call_soon(noop_task());
    }

    #[test]
    fn registry_purges_the_adapter_after_the_host_dies() {
        let registry = LoopRegistry::new();
        let host = Arc::new(MockHostLoop::default());
        let as_loop: Arc<dyn CooperativeLoop> = host;
        register_host_loop(&registry, &as_loop);
        assert_eq!(registry.len(), 1);

        drop(as_loop);
        registry.call_in_loops(noop_task());
        assert!(registry.is_empty());
    }
}
