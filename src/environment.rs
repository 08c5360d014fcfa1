//! What the host terminal looks like.

use crossterm::terminal;
use crossterm::tty::IsTty;
use tint::background::{self, Background, BackgroundCache};

/// Width assumed when the terminal cannot be queried.
pub const DEFAULT_WIDTH: u16 = 80;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Environment {
    /// Terminal columns.
    pub width: u16,
    /// Whether stdout is attached to a terminal.
    pub is_tty: bool,
    pub background: Background,
}

impl Environment {
    /// Probes stdout and the process-wide background cache.
    pub fn detect() -> Self {
        Self::detect_with(background::global())
    }

    pub fn detect_with(cache: &BackgroundCache) -> Self {
        let env = Environment {
            width: terminal_width(),
            is_tty: std::io::stdout().is_tty(),
            background: cache.get(),
        };
        log::debug!("environment: {:?}", env);
        env
    }
}

fn terminal_width() -> u16 {
    match terminal::size() {
        Ok((cols, _)) if cols > 0 => cols,
        Ok(_) => DEFAULT_WIDTH,
        Err(err) => {
            log::debug!("terminal size unavailable ({}), assuming {}", err, DEFAULT_WIDTH);
            DEFAULT_WIDTH
        }
    }
}
