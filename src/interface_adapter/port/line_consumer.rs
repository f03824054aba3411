/// Execution collaborator callback: receives each submitted line
/// exactly once, on the thread that handled the `enter` key. Expected
/// to be non-blocking or to hand further work off via `call_soon`;
/// errors are logged by the prompt, never retried.
pub type LineConsumer = Box<dyn FnMut(&str) -> anyhow::Result<()> + Send>;
