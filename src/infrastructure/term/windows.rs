use std::io;

use winapi::shared::minwindef::DWORD;
use winapi::um::consoleapi::{GetConsoleMode, SetConsoleMode};
use winapi::um::handleapi::INVALID_HANDLE_VALUE;
use winapi::um::processenv::GetStdHandle;
use winapi::um::winbase::{STD_INPUT_HANDLE, STD_OUTPUT_HANDLE};
use winapi::um::wincon::{
    CONSOLE_SCREEN_BUFFER_INFO, ENABLE_VIRTUAL_TERMINAL_INPUT,
    ENABLE_VIRTUAL_TERMINAL_PROCESSING, GetConsoleScreenBufferInfo,
};
use winapi::um::winnt::HANDLE;

use crate::domain::primitive::TermSize;

/// Console modes captured before switching to vt input/output.
pub struct ModeSnapshot {
    mode_in: DWORD,
    mode_out: DWORD,
}

fn std_handle(which: DWORD) -> io::Result<HANDLE> {
    // SAFETY: GetStdHandle takes no pointers and is always safe to call.
    let handle = unsafe { GetStdHandle(which) };
    if handle == INVALID_HANDLE_VALUE || handle.is_null() {
        return Err(io::Error::last_os_error());
    }
    Ok(handle)
}

fn console_mode(handle: HANDLE) -> io::Result<DWORD> {
    let mut mode: DWORD = 0;
    // SAFETY: the out pointer is valid for one DWORD write.
    if unsafe { GetConsoleMode(handle, &mut mode) } == 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(mode)
}

fn set_console_mode(handle: HANDLE, mode: DWORD) -> io::Result<()> {
    // SAFETY: no pointers involved.
    if unsafe { SetConsoleMode(handle, mode) } == 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

/// Capture the current console modes for stdin and stdout.
pub fn query() -> io::Result<ModeSnapshot> {
    let mode_in = console_mode(std_handle(STD_INPUT_HANDLE)?)?;
    let mode_out = console_mode(std_handle(STD_OUTPUT_HANDLE)?)?;
    Ok(ModeSnapshot { mode_in, mode_out })
}

/// Switch the console to raw vt mode: input arrives as vt100 escape
/// sequences and output escape sequences are interpreted.
pub fn set_raw(snapshot: &ModeSnapshot) -> io::Result<()> {
    set_console_mode(std_handle(STD_INPUT_HANDLE)?, ENABLE_VIRTUAL_TERMINAL_INPUT)?;
    set_console_mode(
        std_handle(STD_OUTPUT_HANDLE)?,
        snapshot.mode_out | ENABLE_VIRTUAL_TERMINAL_PROCESSING,
    )
}

/// Restore the console modes captured by [`query`].
pub fn restore(snapshot: &ModeSnapshot) -> io::Result<()> {
    set_console_mode(std_handle(STD_INPUT_HANDLE)?, snapshot.mode_in)?;
    set_console_mode(std_handle(STD_OUTPUT_HANDLE)?, snapshot.mode_out)
}

/// Current window size of the console screen buffer.
pub fn window_size() -> io::Result<TermSize> {
    let handle = std_handle(STD_OUTPUT_HANDLE)?;
    // SAFETY: the struct is plain data; all-zero is a valid value.
    let mut info: CONSOLE_SCREEN_BUFFER_INFO = unsafe { std::mem::zeroed() };
    // SAFETY: the out pointer is valid for one info struct write.
    if unsafe { GetConsoleScreenBufferInfo(handle, &mut info) } == 0 {
        return Err(io::Error::last_os_error());
    }
    let cols = (info.srWindow.Right - info.srWindow.Left + 1).max(0) as u16;
    let rows = (info.srWindow.Bottom - info.srWindow.Top + 1).max(0) as u16;
    if cols == 0 || rows == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "console reported a zero-sized window",
        ));
    }
    Ok(TermSize::new(cols, rows))
}
