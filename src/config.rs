//! Environment-driven output configuration.
//!
//! | Variable              | Effect                                        |
//! |-----------------------|-----------------------------------------------|
//! | `TAILTEXT_COLOR`      | `auto`, `always` or `never`                   |
//! | `NO_COLOR`            | any non-empty value acts like `never`         |
//! | `TAILTEXT_BACKGROUND` | `dark` or `light`, skips background detection |
//!
//! An explicit `TAILTEXT_COLOR` wins over `NO_COLOR`.

use textnode::Format;
use tint::background::{BACKGROUND_ENV, Background, BackgroundCache};

pub const COLOR_ENV: &str = "TAILTEXT_COLOR";
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Whether styled output is emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Style only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" | "on" | "1" => Some(ColorMode::Always),
            "never" | "off" | "0" => Some(ColorMode::Never),
            _ => None,
        }
    }

    /// The terminal format for this mode.
    pub fn format(self, is_tty: bool) -> Format {
        match self {
            ColorMode::Always => Format::Ansi,
            ColorMode::Never => Format::Plain,
            ColorMode::Auto if is_tty => Format::Ansi,
            ColorMode::Auto => Format::Plain,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub color: ColorMode,
    /// Forced background; `None` leaves detection to the cache's probe.
    pub background: Option<Background>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let explicit = lookup(COLOR_ENV).and_then(|value| {
            let mode = ColorMode::from_name(&value);
            if mode.is_none() {
                log::warn!("ignoring {}={:?}", COLOR_ENV, value);
            }
            mode
        });
        let no_color = lookup(NO_COLOR_ENV).is_some_and(|v| !v.is_empty());

        let color = match explicit {
            Some(mode) => mode,
            None if no_color => ColorMode::Never,
            None => ColorMode::Auto,
        };

        let background = lookup(BACKGROUND_ENV).and_then(|value| {
            let background = Background::from_name(&value);
            if background.is_none() {
                log::warn!("ignoring {}={:?}", BACKGROUND_ENV, value);
            }
            background
        });

        log::debug!("config: color={:?} background={:?}", color, background);
        Config { color, background }
    }

    /// Pins `cache` to the forced background, if any.
    pub fn apply(&self, cache: &BackgroundCache) {
        if let Some(background) = self.background {
            cache.set(background);
        }
    }
}
