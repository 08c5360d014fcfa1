//! Terminal background classification and its process-wide cache.
//!
//! Probing the environment can be slow (and on some hosts is not stable
//! between calls), so the answer is computed once and cached. Readers share
//! an `RwLock` read guard; the single writer re-checks under the write lock
//! before probing.
//!
//! ```
//! use tint::background::{Background, BackgroundCache, FixedProbe};
//!
//! let cache = BackgroundCache::new(FixedProbe(Background::Dark));
//! assert!(cache.is_dark());
//!
//! cache.set(Background::Light);
//! assert!(!cache.is_dark());
//! ```

use std::env;
use std::sync::RwLock;

use once_cell::sync::Lazy;

/// Environment variable forcing the background (`dark` or `light`).
pub const BACKGROUND_ENV: &str = "TAILTEXT_BACKGROUND";
/// rxvt-style `fg;bg` palette indices exported by many terminals.
pub const COLORFGBG_ENV: &str = "COLORFGBG";

/// Brightness class of the host background.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Background {
    Dark,
    /// Also the fallback when nothing can be detected.
    #[default]
    Light,
}

impl Background {
    pub fn is_dark(self) -> bool {
        self == Background::Dark
    }

    /// Parses `dark` / `light` (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Background::Dark),
            "light" => Some(Background::Light),
            _ => None,
        }
    }
}

/// Source of the background classification.
///
/// Returning `None` means the probe could not tell; the cache then falls
/// back to [`Background::Light`].
pub trait BackgroundProbe: Send + Sync {
    fn probe(&self) -> Option<Background>;
}

/// A probe that always answers the same thing.
#[derive(Clone, Copy, Debug)]
pub struct FixedProbe(pub Background);

impl BackgroundProbe for FixedProbe {
    fn probe(&self) -> Option<Background> {
        Some(self.0)
    }
}

/// Probes process environment variables.
///
/// [`BACKGROUND_ENV`] wins when set to a recognised value; otherwise
/// [`COLORFGBG_ENV`] is classified by its background palette index.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnvProbe;

impl BackgroundProbe for EnvProbe {
    fn probe(&self) -> Option<Background> {
        let forced = env::var(BACKGROUND_ENV).ok();
        let colorfgbg = env::var(COLORFGBG_ENV).ok();
        classify(forced.as_deref(), colorfgbg.as_deref())
    }
}

/// Classifies a background from the raw values of the two variables.
pub fn classify(forced: Option<&str>, colorfgbg: Option<&str>) -> Option<Background> {
    if let Some(bg) = forced.and_then(Background::from_name) {
        return Some(bg);
    }
    colorfgbg.and_then(classify_colorfgbg)
}

/// Classifies a `COLORFGBG` value such as `15;0` or `0;default;15`.
///
/// The last field is the background palette index; indices 0-6 and 8 are
/// the dark half of the 16-color palette.
pub fn classify_colorfgbg(value: &str) -> Option<Background> {
    let index: u8 = value.rsplit(';').next()?.trim().parse().ok()?;
    match index {
        0..=6 | 8 => Some(Background::Dark),
        7 | 9..=15 => Some(Background::Light),
        _ => None,
    }
}

/// Lazily-initialised, lock-protected background classification.
pub struct BackgroundCache {
    value: RwLock<Option<Background>>,
    probe: Box<dyn BackgroundProbe>,
}

impl BackgroundCache {
    pub fn new(probe: impl BackgroundProbe + 'static) -> Self {
        Self {
            value: RwLock::new(None),
            probe: Box::new(probe),
        }
    }

    /// A cache backed by [`EnvProbe`].
    pub fn from_env() -> Self {
        Self::new(EnvProbe)
    }

    /// Returns the cached background, probing on first use.
    pub fn get(&self) -> Background {
        {
            let guard = self.value.read().unwrap_or_else(|e| e.into_inner());
            if let Some(bg) = *guard {
                return bg;
            }
        }

        let mut guard = self.value.write().unwrap_or_else(|e| e.into_inner());
        if let Some(bg) = *guard {
            return bg;
        }
        let bg = self.probe.probe().unwrap_or_default();
        log::debug!("background detected as {:?}", bg);
        *guard = Some(bg);
        bg
    }

    pub fn is_dark(&self) -> bool {
        self.get().is_dark()
    }

    /// Overrides the cached value.
    pub fn set(&self, background: Background) {
        let mut guard = self.value.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(background);
    }

    /// Forgets the cached value; the next read probes again.
    pub fn reset(&self) {
        let mut guard = self.value.write().unwrap_or_else(|e| e.into_inner());
        *guard = None;
    }

    /// Returns the cached value without probing.
    pub fn peek(&self) -> Option<Background> {
        *self.value.read().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for BackgroundCache {
    fn default() -> Self {
        Self::from_env()
    }
}

impl std::fmt::Debug for BackgroundCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackgroundCache")
            .field("value", &self.peek())
            .finish_non_exhaustive()
    }
}

static GLOBAL: Lazy<BackgroundCache> = Lazy::new(BackgroundCache::from_env);

/// The process-wide cache used when no cache is passed explicitly.
pub fn global() -> &'static BackgroundCache {
    &GLOBAL
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingProbe(Arc<AtomicUsize>, Option<Background>);

    impl BackgroundProbe for CountingProbe {
        fn probe(&self) -> Option<Background> {
            self.0.fetch_add(1, Ordering::SeqCst);
            self.1
        }
    }

    #[test]
    fn probes_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = BackgroundCache::new(CountingProbe(calls.clone(), Some(Background::Dark)));
        assert!(cache.is_dark());
        assert!(cache.is_dark());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failed_probe_falls_back_to_light() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = BackgroundCache::new(CountingProbe(calls, None));
        assert_eq!(cache.get(), Background::Light);
    }

    #[test]
    fn reset_probes_again() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = BackgroundCache::new(CountingProbe(calls.clone(), Some(Background::Dark)));
        cache.get();
        cache.reset();
        assert_eq!(cache.peek(), None);
        cache.get();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn set_skips_probe() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = BackgroundCache::new(CountingProbe(calls.clone(), Some(Background::Dark)));
        cache.set(Background::Light);
        assert!(!cache.is_dark());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn concurrent_readers_share_one_probe() {
        let calls = Arc::new(AtomicUsize::new(0));
        let cache = Arc::new(BackgroundCache::new(CountingProbe(
            calls.clone(),
            Some(Background::Dark),
        )));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = cache.clone();
                std::thread::spawn(move || cache.is_dark())
            })
            .collect();
        for h in handles {
            assert!(h.join().unwrap());
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn colorfgbg_values() {
        assert_eq!(classify_colorfgbg("15;0"), Some(Background::Dark));
        assert_eq!(classify_colorfgbg("0;15"), Some(Background::Light));
        assert_eq!(classify_colorfgbg("0;default;8"), Some(Background::Dark));
        assert_eq!(classify_colorfgbg("12;7"), Some(Background::Light));
        assert_eq!(classify_colorfgbg("15;default"), None);
        assert_eq!(classify_colorfgbg("garbage"), None);
    }

    #[test]
    fn forced_value_wins() {
        assert_eq!(classify(Some("DARK"), Some("0;15")), Some(Background::Dark));
        assert_eq!(classify(Some("sepia"), Some("0;15")), Some(Background::Light));
        assert_eq!(classify(None, None), None);
    }
}
