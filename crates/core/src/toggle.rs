//! Enabled/disabled flag.

use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// Toggleable mixin. Two states, freely transitionable; defaults to enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Toggle(bool);

impl Toggle {
    pub fn new(enabled: bool) -> Self {
        Self(enabled)
    }

    pub fn is_enabled(&self) -> bool {
        self.0
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.0 = enabled;
    }

    pub fn enable(&mut self) {
        self.0 = true;
    }

    pub fn disable(&mut self) {
        self.0 = false;
    }

    pub fn toggle(&mut self) {
        self.0 = !self.0;
    }
}

impl Default for Toggle {
    fn default() -> Self {
        Self(true)
    }
}

impl ValueObject for Toggle {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_enabled() {
        assert!(Toggle::default().is_enabled());
    }

    #[test]
    fn toggling_twice_restores_state() {
        for initial in [true, false] {
            let mut t = Toggle::new(initial);
            t.toggle();
            assert_ne!(t.is_enabled(), initial);
            t.toggle();
            assert_eq!(t.is_enabled(), initial);
        }
    }
}
