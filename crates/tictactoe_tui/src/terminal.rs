//! Raw-mode terminal setup that always undoes itself.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;
use tracing::{debug, warn};

/// Restores the terminal on drop, including when setup fails part-way.
pub struct TerminalGuard {
    restore: fn(),
}

impl TerminalGuard {
    /// Enters raw mode, the alternate screen and mouse capture.
    pub fn enter() -> io::Result<Self> {
        Self::enter_with(
            || {
                enable_raw_mode()?;
                execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            },
            restore_terminal,
        )
    }

    /// Runs `setup` with `restore` already armed.
    pub fn enter_with(setup: impl FnOnce() -> io::Result<()>, restore: fn()) -> io::Result<Self> {
        let guard = Self { restore };
        setup()?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        (self.restore)();
    }
}

fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to leave raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show) {
        warn!(error = %e, "Failed to restore screen");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static FAILED_SETUP_RESTORES: AtomicUsize = AtomicUsize::new(0);
    static CLEAN_RESTORES: AtomicUsize = AtomicUsize::new(0);

    #[test]
    fn test_restores_when_setup_fails() {
        let result = TerminalGuard::enter_with(
            || Err(io::Error::other("no tty")),
            || {
                FAILED_SETUP_RESTORES.fetch_add(1, Ordering::SeqCst);
            },
        );
        assert!(result.is_err());
        assert_eq!(FAILED_SETUP_RESTORES.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_restores_once_on_drop() {
        let guard = TerminalGuard::enter_with(
            || Ok(()),
            || {
                CLEAN_RESTORES.fetch_add(1, Ordering::SeqCst);
            },
        )
        .expect("setup succeeds");
        assert_eq!(CLEAN_RESTORES.load(Ordering::SeqCst), 0);

        drop(guard);
        assert_eq!(CLEAN_RESTORES.load(Ordering::SeqCst), 1);
    }
}
