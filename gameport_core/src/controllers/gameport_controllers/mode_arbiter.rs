// SPDX-License-Identifier: GPL-3.0
// mode_arbiter.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use crate::controllers::inputs::{Axis, ControllerInputs, Player, SourceSelect};
use log::debug;

/// Axis bytes strictly above this select the analog stick.
pub const DEADZONE_LOW: u8 = 60;

/// Axis bytes strictly below this select the analog stick.
pub const DEADZONE_HIGH: u8 = 196;

/// The ModeArbiter structure latches, per player, whether axis positions come
/// from the analog stick or the digital pad.
pub struct ModeArbiter {

    // One latch per player, shared by both axes.
    sources: [SourceSelect; 2],
}

impl ModeArbiter {

    /// Creates a new ModeArbiter object with the correct initial state.
    pub fn new() -> Self {
        ModeArbiter {
            sources: [SourceSelect::UseDigitalPad; 2],
        }
    }

    /// This function returns both players to the digital pad.
    pub fn reset(&mut self) {
        self.sources = [SourceSelect::UseDigitalPad; 2];
    }

    /// This function returns the latched source for a player.
    pub fn source(&self, player: Player) -> SourceSelect {
        self.sources[player.index()]
    }

    /// This function returns whether an axis byte lies inside the range that
    /// selects the analog stick.
    pub fn in_analog_range(value: u8) -> bool {
        value > DEADZONE_LOW && value < DEADZONE_HIGH
    }

    /// This function re-evaluates both latches. The analog check is made first,
    /// so a stick in range wins over held directions on the same tick. With
    /// neither condition met, the latch keeps its value.
    pub fn clock(&mut self, inputs: &ControllerInputs) {

        for player in Player::ALL {

            let analog = Axis::ALL
                .iter()
                .any(|&axis| Self::in_analog_range(inputs.axis_byte(player, axis)));

            let next = if analog {
                SourceSelect::UseAnalogStick
            } else if inputs.any_direction_held(player) {
                SourceSelect::UseDigitalPad
            } else {
                continue;
            };

            let source = &mut self.sources[player.index()];
            if *source != next {
                debug!("Player {:?} source changed to {:?}", player, next);
                *source = next;
            }
        }
    }
}
