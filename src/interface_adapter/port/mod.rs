pub mod byte_sink;
pub mod line_consumer;
pub mod loop_handle;

pub use byte_sink::ByteSink;
pub use line_consumer::LineConsumer;
pub use loop_handle::{CooperativeLoop, LoopHandle, Task};
