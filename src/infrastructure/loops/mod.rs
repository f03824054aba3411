pub mod host_adapter;
pub mod poll_loop;

pub use host_adapter::{HostLoopAdapter, register_host_loop};
pub use poll_loop::{PollLoop, PollLoopHandle};
