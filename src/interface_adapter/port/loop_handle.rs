use std::sync::Arc;

/// Deferred work scheduled onto a cooperative loop.
///
/// One task value may be delivered to several running loops, so tasks
/// are shared callables and must be idempotent unless the caller
/// guarantees at most one loop is running. Errors are logged at the
/// invocation site and never propagated to the loop driver.
pub type Task = Arc<dyn Fn() -> anyhow::Result<()> + Send + Sync>;

/// Scheduling capability for one cooperative loop.
///
/// All methods must be thread-safe; the registry calls them from
/// arbitrary threads.
pub trait LoopHandle: Send + Sync {
    /// Queue the task to run on the loop's own thread.
    fn call_soon(&self, task: Task);

    /// Whether the loop is currently driving its cycle.
    fn is_running(&self) -> bool;

    /// Whether the loop is gone for good. Closed handles are purged
    /// from the registry on its next operation.
    fn is_closed(&self) -> bool;
}

/// Surface a host-owned cooperative loop exposes so it can be adapted.
///
/// The host keeps ownership (an `Arc`); the adapter only holds a `Weak`
/// reference, so a closed host loop is never kept alive by the
/// registry.
pub trait CooperativeLoop: Send + Sync {
    /// The host loop's own thread-safe scheduling primitive.
    fn schedule(&self, task: Task);

    fn is_running(&self) -> bool;

    fn is_closed(&self) -> bool;
}
