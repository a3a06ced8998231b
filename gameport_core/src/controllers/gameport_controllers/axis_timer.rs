// SPDX-License-Identifier: GPL-3.0
// axis_timer.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use crate::controllers::inputs::{Axis, ControllerInputs, Player, SourceSelect};
use gameport_utility::BitField;

/// Number of ticks between decrements of every axis position.
pub const DIVIDER_PERIOD: u32 = 100;

/// Position of an axis at rest.
pub const AXIS_CENTRE: u8 = 128;

/// Position loaded when the negative direction (Left/Up) is held.
pub const AXIS_NEGATIVE: u8 = 4;

/// Position loaded when the positive direction (Right/Down) is held.
pub const AXIS_POSITIVE: u8 = 252;

/// The number of axes across both players.
pub const AXIS_COUNT: usize = 4;

/// The AxisTimer structure models the four one-shot position timers of the
/// game port. Each position counts down to zero, one step every divider period,
/// and the host measures how long each axis stays active.
pub struct AxisTimer {

    // P1X, P1Y, P2X, P2Y.
    positions: [u8; AXIS_COUNT],

    // Shared prescaler for all four positions.
    divider: u32,
}

impl AxisTimer {

    /// Creates a new AxisTimer object with the correct initial state.
    pub fn new() -> Self {
        AxisTimer {
            positions: [AXIS_CENTRE; AXIS_COUNT],
            divider: 0,
        }
    }

    /// This function centres all axes and restarts the divider.
    pub fn reset(&mut self) {
        self.positions = [AXIS_CENTRE; AXIS_COUNT];
        self.divider = 0;
    }

    /// This function maps a player and axis onto an index into the positions.
    pub fn index(player: Player, axis: Axis) -> usize {
        player.index() * 2 + axis.index()
    }

    /// This function returns the position of a single axis.
    pub fn position(&self, player: Player, axis: Axis) -> u8 {
        self.positions[Self::index(player, axis)]
    }

    /// This function returns whether an axis is still counting down.
    pub fn is_active(&self, player: Player, axis: Axis) -> bool {
        self.position(player, axis) != 0
    }

    /// This function returns the divider count.
    pub fn divider(&self) -> u32 {
        self.divider
    }

    /// This function computes the position an axis is loaded with on a trigger.
    /// Flipping the top bit of an analog byte turns a two's complement position
    /// into the unsigned range counted by the timer.
    pub fn sample(
        source: SourceSelect,
        inputs: &ControllerInputs,
        player: Player,
        axis: Axis
    ) -> u8 {
        match source {
            SourceSelect::UseAnalogStick => inputs.axis_byte(player, axis).invert_msb(),
            SourceSelect::UseDigitalPad => {
                if inputs.is_held(player, axis.negative_direction()) {
                    AXIS_NEGATIVE
                } else if inputs.is_held(player, axis.positive_direction()) {
                    AXIS_POSITIVE
                } else {
                    AXIS_CENTRE
                }
            },
        }
    }

    /// This function advances the timer by one tick. When new positions are being
    /// loaded they take effect as-is and the divider restarts, so a rollover
    /// falling on the same tick never decrements the fresh values.
    pub fn clock(&mut self, load: Option<[u8; AXIS_COUNT]>) {

        if let Some(positions) = load {
            self.positions = positions;
            self.divider = 0;
            return;
        }

        self.divider += 1;
        if self.divider == DIVIDER_PERIOD {
            self.divider = 0;
            for position in self.positions.iter_mut() {
                *position = position.saturating_sub(1);
            }
        }
    }
}
