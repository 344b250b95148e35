use core::cell::Cell;

use log::debug;

/// Whether new local edits are being recorded. Existing changes are kept up
/// to date regardless of this flag.
#[derive(Debug, Default)]
pub struct Lifecycle {
    enabled: Cell<bool>,
}

impl Lifecycle {
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: Cell::new(enabled),
        }
    }

    pub fn enable(&self) {
        if !self.enabled.replace(true) {
            debug!("Tracking of new changes enabled");
        }
    }

    pub fn disable(&self) {
        if self.enabled.replace(false) {
            debug!("Tracking of new changes disabled");
        }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool { self.enabled.get() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let lifecycle = Lifecycle::default();
        assert!(!lifecycle.is_enabled());

        lifecycle.enable();
        lifecycle.enable();
        assert!(lifecycle.is_enabled());

        lifecycle.disable();
        assert!(!lifecycle.is_enabled());
    }
}
