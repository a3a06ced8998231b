// SPDX-License-Identifier: GPL-3.0
// output_composer.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use super::axis_timer::{AxisTimer, AXIS_COUNT};
use super::button_mux::{line_owner, BUTTON_LINES};
use crate::controllers::inputs::{Axis, ControllerMode, Player, PlayerDisable};
use gameport_utility::bit_at;

/// The status byte with every line high, as read from an idle or disabled port.
pub const STATUS_IDLE: u8 = 0xFF;

/// Bit index of the first button line in the status byte.
const BUTTON_LINE_SHIFT: usize = 4;

/// The OutputComposer structure holds the status byte register read by the host.
pub struct OutputComposer {

    // Registered status byte.
    status: u8,
}

impl OutputComposer {

    /// Creates a new OutputComposer object with the correct initial state.
    pub fn new() -> Self {
        OutputComposer {
            status: STATUS_IDLE,
        }
    }

    /// This function returns the register to the idle status.
    pub fn reset(&mut self) {
        self.status = STATUS_IDLE;
    }

    /// This function returns the registered status byte.
    pub fn status(&self) -> u8 {
        self.status
    }

    /// This function composes a status byte. Bits 3:0 are the axis timers in the
    /// order P1X, P1Y, P2X, P2Y, high while counting. Bits 7:4 are the button line
    /// levels. A disabled player reads high on every bit it owns.
    pub fn compose(
        mode: ControllerMode,
        disable: PlayerDisable,
        axes_active: [bool; AXIS_COUNT],
        lines: [bool; BUTTON_LINES]
    ) -> u8 {

        if mode == ControllerMode::Disabled {
            return STATUS_IDLE;
        }

        let mut status = 0;

        for player in Player::ALL {
            for axis in Axis::ALL {
                let index = AxisTimer::index(player, axis);
                let level = axes_active[index] || disable.is_disabled(player);
                status |= bit_at(level, index as u32);
            }
        }

        for (line, &level) in lines.iter().enumerate() {
            let level = level || disable.is_disabled(line_owner(mode, line));
            status |= bit_at(level, (BUTTON_LINE_SHIFT + line) as u32);
        }

        status
    }

    /// This function latches a newly composed status byte into the register.
    pub fn clock(
        &mut self,
        mode: ControllerMode,
        disable: PlayerDisable,
        axes_active: [bool; AXIS_COUNT],
        lines: [bool; BUTTON_LINES]
    ) {
        self.status = Self::compose(mode, disable, axes_active, lines);
    }
}

#[cfg(test)]
mod tests;
