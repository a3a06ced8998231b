// SPDX-License-Identifier: GPL-3.0
// oscillator.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

/// Amount added to the phase accumulator every tick. The toggle inverts
/// 40000 times per second, giving a 20 kHz serial clock.
pub const OSCILLATOR_STEP: u64 = 40_000;

/// The Oscillator structure models a numerically-controlled oscillator, which
/// derives the serial clock from whatever reference rate drives the controllers.
pub struct Oscillator {

    // Phase accumulator, always below the reference frequency after a wrap.
    accumulator: u32,

    // Free-running output.
    toggle: bool,
}

impl Oscillator {

    /// Creates a new Oscillator object with the correct initial state.
    pub fn new() -> Self {
        Oscillator {
            accumulator: 0,
            toggle: false,
        }
    }

    /// This function clears the accumulator and the toggle.
    pub fn reset(&mut self) {
        self.accumulator = 0;
        self.toggle = false;
    }

    /// This function returns the current toggle level.
    pub fn toggle(&self) -> bool {
        self.toggle
    }

    /// This function advances the oscillator by one reference tick.
    pub fn clock(&mut self, reference_frequency: u32) {

        let reference = reference_frequency as u64;
        let sum = self.accumulator as u64 + OSCILLATOR_STEP;

        if sum >= reference {

            // For any reference above the step this is just sum - reference. Smaller
            // references cannot keep up and simply toggle every tick.
            self.accumulator = sum.checked_rem(reference).unwrap_or(0) as u32;
            self.toggle = !self.toggle;
        } else {
            self.accumulator = sum as u32;
        }
    }
}
