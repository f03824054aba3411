use std::io;
use std::mem::MaybeUninit;
use std::os::fd::RawFd;

use crate::domain::primitive::TermSize;

/// Terminal attributes captured before switching to raw mode.
pub struct ModeSnapshot {
    attrs: libc::termios,
}

pub fn stdin_fd() -> RawFd {
    libc::STDIN_FILENO
}

/// Capture the current attributes of the terminal behind `fd`.
pub fn query(fd: RawFd) -> io::Result<ModeSnapshot> {
    Ok(ModeSnapshot {
        attrs: tcgetattr(fd)?,
    })
}

/// Switch the terminal to raw mode, starting from the snapshot.
///
/// Echo, canonical line buffering, extended input processing, and
/// signal generation are cleared, along with flow control and newline
/// translation on input. Keys like ctrl+c arrive as plain bytes.
pub fn set_raw(fd: RawFd, snapshot: &ModeSnapshot) -> io::Result<()> {
    let mut raw = snapshot.attrs;
    raw.c_lflag = patch_lflag(raw.c_lflag);
    raw.c_iflag = patch_iflag(raw.c_iflag);
    // VMIN defaults to 4 on Solaris-derived systems (the slot doubles
    // as VEOF, ASCII EOT). Reads must deliver every single byte.
    raw.c_cc[libc::VMIN] = 1;
    tcsetattr(fd, &raw)
}

/// Restore the attributes captured by [`query`].
pub fn restore(fd: RawFd, snapshot: &ModeSnapshot) -> io::Result<()> {
    tcsetattr(fd, &snapshot.attrs)
}

fn patch_lflag(lflag: libc::tcflag_t) -> libc::tcflag_t {
    lflag & !(libc::ECHO | libc::ICANON | libc::IEXTEN | libc::ISIG)
}

fn patch_iflag(iflag: libc::tcflag_t) -> libc::tcflag_t {
    // IXON/IXOFF: don't capture ctrl+s and ctrl+q for flow control.
    // ICRNL/INLCR/IGNCR: don't translate carriage return on input.
    iflag & !(libc::IXON | libc::IXOFF | libc::ICRNL | libc::INLCR | libc::IGNCR)
}

fn tcgetattr(fd: RawFd) -> io::Result<libc::termios> {
    let mut attrs = MaybeUninit::<libc::termios>::uninit();
    // SAFETY: the pointer is valid for writes of one termios struct.
    let rc = unsafe { libc::tcgetattr(fd, attrs.as_mut_ptr()) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }
    // SAFETY: tcgetattr succeeded, so the struct is initialized.
    Ok(unsafe { attrs.assume_init() })
}

fn tcsetattr(fd: RawFd, attrs: &libc::termios) -> io::Result<()> {
    // SAFETY: attrs points to a valid termios struct.
    let rc = unsafe { libc::tcsetattr(fd, libc::TCSANOW, attrs) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }
    Ok(())
}

/// Current window size of the terminal behind `fd`.
pub fn window_size(fd: RawFd) -> io::Result<TermSize> {
    let mut ws = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };
    // SAFETY: TIOCGWINSZ writes one winsize struct through the pointer.
    let rc = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &mut ws) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }
    if ws.ws_col == 0 || ws.ws_row == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "terminal reported a zero-sized window",
        ));
    }
    Ok(TermSize::new(ws.ws_col, ws.ws_row))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_lflag_clears_echo_and_canonical_mode() {
        let lflag = libc::ECHO | libc::ICANON | libc::IEXTEN | libc::ISIG | libc::ECHOE;
        let patched = patch_lflag(lflag);
        assert_eq!(patched & libc::ECHO, 0);
        assert_eq!(patched & libc::ICANON, 0);
        assert_eq!(patched & libc::IEXTEN, 0);
        assert_eq!(patched & libc::ISIG, 0);
        // Unrelated bits survive.
        assert_ne!(patched & libc::ECHOE, 0);
    }

    #[test]
    fn patch_iflag_clears_flow_control_and_cr_translation() {
        let iflag =
            libc::IXON | libc::IXOFF | libc::ICRNL | libc::INLCR | libc::IGNCR | libc::BRKINT;
        let patched = patch_iflag(iflag);
        assert_eq!(
            patched & (libc::IXON | libc::IXOFF | libc::ICRNL | libc::INLCR | libc::IGNCR),
            0
        );
        assert_ne!(patched & libc::BRKINT, 0);
    }
}
