// SPDX-License-Identifier: GPL-3.0
// controllers.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

/// This module contains the default controllers implementation. There
/// may be others in future.
pub mod gameport_controllers;

/// This module contains the inputs sampled by a controllers implementation on
/// every tick.
pub mod inputs;

use inputs::ControllerInputs;

/// This trait provides an implementation-opaque way of calling controllers
/// methods from elsewhere in the system.
pub trait Controllers {

    /// This must be called once per reference tick to advance the controllers.
    fn step(&mut self, inputs: &ControllerInputs);

    /// This must be called in order to read the status byte seen by the host.
    fn read_status(&self) -> u8;

    /// This must be called in order to put the controllers back in their initial state.
    fn reset(&mut self);

    /// This advances the controllers by the specified number of ticks with the inputs
    /// held. The trigger is edge-sensitive, so holding it fires at most once.
    fn run_ticks(&mut self, inputs: &ControllerInputs, ticks: u64) {
        for _ in 0..ticks {
            self.step(inputs);
        }
    }
}
