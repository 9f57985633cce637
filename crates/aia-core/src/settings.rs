//! Global library settings.
//!
//! [`Settings`] holds the **default bounds policy** — the policy a new
//! calibration store or interpolator picks up when none is given
//! explicitly.  It is a process-wide singleton accessed via a
//! `std::sync::OnceLock`.
//!
//! Thread safety: the value is stored behind a `Mutex` so that it can be
//! changed from any thread.  Code that changes it should restore it when
//! done.

use crate::policy::BoundsPolicy;
use std::sync::{Mutex, OnceLock};

/// Process-wide settings used by the aia-rs library.
pub struct Settings {
    bounds_policy: Mutex<Option<BoundsPolicy>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            bounds_policy: Mutex::new(None),
        })
    }

    /// Return the default bounds policy.
    ///
    /// Falls back to [`BoundsPolicy::Extrapolate`] when nothing has been set.
    pub fn bounds_policy(&self) -> BoundsPolicy {
        self.bounds_policy
            .lock()
            .map(|guard| guard.unwrap_or_default())
            .unwrap_or_default()
    }

    /// Set the default bounds policy.
    pub fn set_bounds_policy(&self, policy: BoundsPolicy) {
        if let Ok(mut guard) = self.bounds_policy.lock() {
            *guard = Some(policy);
        }
    }

    /// Clear any override, restoring the built-in default.
    pub fn reset(&self) {
        if let Ok(mut guard) = self.bounds_policy.lock() {
            *guard = None;
        }
    }
}
