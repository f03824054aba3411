pub mod loop_registry;

pub use loop_registry::LoopRegistry;
