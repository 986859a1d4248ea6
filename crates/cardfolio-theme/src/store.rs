//! Process-wide active palette.
//!
//! The styling toolchain reads ambient custom-property values that the
//! original site left implicit at document scope. Here that global state is
//! explicit: one store per process, set at theme initialization, read by
//! every resolution, and swappable atomically when the active theme changes.

use std::sync::{Arc, OnceLock, RwLock};

use cardfolio_core::error::{CoreError, Result};
use tracing::debug;

use crate::palette::Palette;

static GLOBAL: OnceLock<ThemeStore> = OnceLock::new();

/// Holder for the active palette.
#[derive(Debug)]
pub struct ThemeStore {
    active: RwLock<Arc<Palette>>,
}

impl ThemeStore {
    /// Create a store with the given initial palette.
    #[must_use]
    pub fn new(palette: Palette) -> Self {
        Self {
            active: RwLock::new(Arc::new(palette)),
        }
    }

    /// The process-wide store, initialized with the stock palette on first
    /// access unless [`init_global`] ran earlier.
    pub fn global() -> &'static ThemeStore {
        GLOBAL.get_or_init(|| ThemeStore::new(Palette::default()))
    }

    /// The currently active palette.
    #[must_use]
    pub fn active(&self) -> Arc<Palette> {
        match self.active.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Replace the active palette, returning the previous one.
    ///
    /// Readers holding the previous `Arc` keep a consistent snapshot; new
    /// resolutions observe the replacement immediately.
    pub fn swap(&self, palette: Palette) -> Arc<Palette> {
        let next = Arc::new(palette);
        let mut guard = match self.active.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let previous = std::mem::replace(&mut *guard, next);
        debug!("swapped active palette");
        previous
    }

    /// Root-scope CSS for the active palette.
    #[must_use]
    pub fn root_css(&self) -> String {
        self.active().root_css()
    }
}

/// Initialize the process-wide store with a custom palette.
///
/// Errors when the store has already been initialized, including implicitly
/// via [`ThemeStore::global`].
pub fn init_global(palette: Palette) -> Result<()> {
    GLOBAL
        .set(ThemeStore::new(palette))
        .map_err(|_| CoreError::config("theme store already initialized"))
}
