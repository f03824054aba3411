//! # termline
//!
//! An interactive terminal front-end layer that keeps working while a
//! long-running, cooperative event loop owned by the host application is
//! executing: input is still read, the edit prompt is still redrawn, and
//! output the application produces never garbles the prompt.
//!
//! The crate is organized ports-and-adapters style:
//!
//! - [`domain`] — pure value types and models (edit buffer, history,
//!   autocomplete viewport, status line).
//! - [`interface_adapter`] — capability traits ([`ByteSink`],
//!   [`LoopHandle`]) and the [`PromptController`] state machine.
//! - [`usecase`] — the [`LoopRegistry`] that broadcasts deferred work to
//!   whichever registered loop is currently live.
//! - [`infrastructure`] — escape-sequence decoding, the raw-mode
//!   controller, the input reader thread, the output interceptor, and
//!   the loop backends.
//!
//! [`ByteSink`]: interface_adapter::port::ByteSink
//! [`LoopHandle`]: interface_adapter::port::LoopHandle
//! [`PromptController`]: interface_adapter::controller::PromptController
//! [`LoopRegistry`]: usecase::loop_registry::LoopRegistry

pub mod domain;
pub mod infrastructure;
pub mod interface_adapter;
pub mod shared;
pub mod usecase;
