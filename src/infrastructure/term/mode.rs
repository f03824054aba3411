use std::io::IsTerminal;

use crate::domain::primitive::TermSize;
use crate::shared::error::AppError;

#[cfg(unix)]
use super::posix as backend;
#[cfg(windows)]
use super::windows as backend;

/// Puts the terminal in raw mode on construction and restores the
/// original mode on [`restore`](Self::restore) or drop.
///
/// When stdin is not a terminal (input is piped in, or attributes
/// cannot be read) the controller degrades to a no-op: a warning is
/// logged and nothing is switched or restored.
pub struct TerminalModeController {
    snapshot: Option<backend::ModeSnapshot>,
}

impl TerminalModeController {
    pub fn enter() -> Result<Self, AppError> {
        if !std::io::stdin().is_terminal() {
            log::warn!("input is not a terminal");
        }

        let snapshot = match Self::query() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                log::warn!("could not query terminal attributes: {err}");
                return Ok(Self { snapshot: None });
            }
        };

        Self::set_raw(&snapshot).map_err(AppError::TerminalMode)?;
        log::debug!("terminal switched to raw mode");
        Ok(Self {
            snapshot: Some(snapshot),
        })
    }

    /// Put the terminal back in the mode it was in before
    /// [`enter`](Self::enter). Idempotent; also runs on drop.
    pub fn restore(&mut self) {
        if let Some(snapshot) = self.snapshot.take() {
            if let Err(err) = Self::set_back(&snapshot) {
                log::error!("failed to restore terminal mode: {err}");
            } else {
                log::debug!("terminal mode restored");
            }
        }
    }

    /// Current terminal size, falling back to 80x24 when the query
    /// fails (no tty, or an exotic platform).
    pub fn size(&self) -> TermSize {
        match Self::query_size() {
            Ok(size) => size,
            Err(err) => {
                log::debug!("could not query terminal size: {err}");
                TermSize::FALLBACK
            }
        }
    }

    #[cfg(unix)]
    fn query() -> std::io::Result<backend::ModeSnapshot> {
        backend::query(backend::stdin_fd())
    }

    #[cfg(unix)]
    fn set_raw(snapshot: &backend::ModeSnapshot) -> std::io::Result<()> {
        backend::set_raw(backend::stdin_fd(), snapshot)
    }

    #[cfg(unix)]
    fn set_back(snapshot: &backend::ModeSnapshot) -> std::io::Result<()> {
        backend::restore(backend::stdin_fd(), snapshot)
    }

    #[cfg(unix)]
    fn query_size() -> std::io::Result<TermSize> {
        backend::window_size(backend::stdin_fd())
    }

    #[cfg(windows)]
    fn query() -> std::io::Result<backend::ModeSnapshot> {
        backend::query()
    }

    #[cfg(windows)]
    fn set_raw(snapshot: &backend::ModeSnapshot) -> std::io::Result<()> {
        backend::set_raw(snapshot)
    }

    #[cfg(windows)]
    fn set_back(snapshot: &backend::ModeSnapshot) -> std::io::Result<()> {
        backend::restore(snapshot)
    }

    #[cfg(windows)]
    fn query_size() -> std::io::Result<TermSize> {
        backend::window_size()
    }
}

impl Drop for TerminalModeController {
    fn drop(&mut self) {
        self.restore();
    }
}
