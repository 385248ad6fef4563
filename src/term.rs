//! Terminal mode control
//!
//! The UI shell reads single keystrokes, so the controlling terminal runs in
//! raw mode for the life of the process.

use crate::Result;
use log::debug;
use nix::libc;
use std::os::unix::io::RawFd;

/// RAII guard that switches a terminal to raw mode and restores the saved
/// attributes on drop, even if the application errors out mid-session
pub struct RawModeGuard {
    fd: RawFd,
    saved: libc::termios,
}

impl RawModeGuard {
    /// Put the terminal on `fd` into raw mode
    pub fn enable(fd: RawFd) -> Result<Self> {
        let saved = unsafe {
            let mut termios: libc::termios = std::mem::zeroed();
            libc::tcgetattr(fd, &mut termios);
            termios
        };

        let mut raw = saved;
        unsafe {
            libc::cfmakeraw(&mut raw);
            libc::tcsetattr(fd, libc::TCSANOW, &raw);
        }

        debug!("Terminal switched to raw mode");
        Ok(Self { fd, saved })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        unsafe {
            libc::tcsetattr(self.fd, libc::TCSANOW, &self.saved);
        }
        debug!("Terminal attributes restored");
    }
}

/// Column count of the terminal on `fd`, defaulting to 80 when the ioctl
/// fails or reports zero width (e.g. under some terminal emulators)
pub fn terminal_width(fd: RawFd) -> u16 {
    let mut ws: libc::winsize = unsafe { std::mem::zeroed() };

    let result = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &mut ws) };

    if result == 0 && ws.ws_col > 0 {
        ws.ws_col
    } else {
        80
    }
}
