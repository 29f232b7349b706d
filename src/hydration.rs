//! One-shot "still hydrating" flag.
//!
//! Starts out hydrating and flips exactly once. The process-wide instance is
//! [`global`]; tests build their own with [`Hydration::new`].

use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Debug)]
pub struct Hydration {
    hydrating: AtomicBool,
}

impl Hydration {
    pub const fn new() -> Self {
        Self {
            hydrating: AtomicBool::new(true),
        }
    }

    pub fn is_hydrating(&self) -> bool {
        self.hydrating.load(Ordering::Acquire)
    }

    pub fn is_hydrated(&self) -> bool {
        !self.is_hydrating()
    }

    /// Returns `true` only for the call that performed the transition.
    pub fn mark_hydrated(&self) -> bool {
        self.hydrating
            .compare_exchange(true, false, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }
}

impl Default for Hydration {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: Lazy<Hydration> = Lazy::new(Hydration::new);

pub fn global() -> &'static Hydration {
    &GLOBAL
}
