// SPDX-License-Identifier: GPL-3.0
// edge_detector.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

/// The EdgeDetector structure samples the oscillator toggle into a synchronizing
/// register, and reports when that register falls from high to low.
pub struct EdgeDetector {

    // Toggle as sampled on the previous tick.
    synced: bool,

    // The synced value one tick before that.
    previous: bool,
}

impl EdgeDetector {

    /// Creates a new EdgeDetector object with the correct initial state.
    pub fn new() -> Self {
        EdgeDetector {
            synced: false,
            previous: false,
        }
    }

    /// This function clears both registers.
    pub fn reset(&mut self) {
        self.synced = false;
        self.previous = false;
    }

    /// This function returns the synchronized toggle, which is what drives the
    /// serial clock line.
    pub fn synced(&self) -> bool {
        self.synced
    }

    /// This function samples the toggle as it stood at the start of the tick and
    /// returns whether a falling transition is seen this tick. The decision is
    /// made from the registers before they are updated.
    pub fn clock(&mut self, toggle: bool) -> bool {

        let falling = self.previous && !self.synced;

        self.previous = self.synced;
        self.synced = toggle;

        falling
    }
}

#[cfg(test)]
mod tests;
