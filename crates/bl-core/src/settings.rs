//! Global library settings.
//!
//! [`Settings`] holds the **default induction strategy**, used by an engine
//! when none is given explicitly. It is a process-wide singleton
//! accessed via a `std::sync::OnceLock`.
//!
//! Thread safety: the value is stored behind a `Mutex` so that it can be
//! changed from any thread. Code that changes it temporarily should use
//! [`ScopedDefaultStrategy`] so the previous value is restored.

use std::sync::{Mutex, OnceLock};

use crate::strategy::InductionStrategy;

/// Process-wide settings used by binlat.
pub struct Settings {
    default_strategy: Mutex<Option<InductionStrategy>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            default_strategy: Mutex::new(None),
        })
    }

    /// The strategy engines use when none is configured.
    ///
    /// Falls back to [`InductionStrategy::default`] if never set.
    pub fn default_strategy(&self) -> InductionStrategy {
        self.default_strategy
            .lock()
            .expect("Settings mutex poisoned")
            .unwrap_or_default()
    }

    /// Override the default strategy.
    pub fn set_default_strategy(&self, strategy: InductionStrategy) {
        *self
            .default_strategy
            .lock()
            .expect("Settings mutex poisoned") = Some(strategy);
    }

    /// Clear the override.
    pub fn reset(&self) {
        *self
            .default_strategy
            .lock()
            .expect("Settings mutex poisoned") = None;
    }

    fn replace(&self, strategy: Option<InductionStrategy>) -> Option<InductionStrategy> {
        std::mem::replace(
            &mut *self
                .default_strategy
                .lock()
                .expect("Settings mutex poisoned"),
            strategy,
        )
    }
}

/// Sets the default strategy for the lifetime of the guard.
///
/// The previous value (set or unset) is restored on drop.
pub struct ScopedDefaultStrategy {
    previous: Option<InductionStrategy>,
}

impl ScopedDefaultStrategy {
    /// Install `strategy` as the default until the guard is dropped.
    pub fn new(strategy: InductionStrategy) -> Self {
        let previous = Settings::instance().replace(Some(strategy));
        Self { previous }
    }
}

impl Drop for ScopedDefaultStrategy {
    fn drop(&mut self) {
        Settings::instance().replace(self.previous);
    }
}
