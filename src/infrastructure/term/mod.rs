pub mod mode;
#[cfg(unix)]
pub mod posix;
#[cfg(windows)]
pub mod windows;

pub use mode::TerminalModeController;
