// SPDX-License-Identifier: GPL-3.0
// serial_framer.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use crate::controllers::inputs::{Button, ControllerInputs, Player};
use gameport_utility::bit_at;
use log::trace;

/// The number of slots in one Gravis frame.
pub const FRAME_SLOTS: usize = 24;

/// This enum describes what is sent on both data lines during a frame slot.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum FrameSlot {

    // Always 0, begins the frame and each button group.
    Separator,

    // Always 1, five of these follow the first separator.
    Header,

    // The held state of a button, 1 being held.
    Data(Button),
}

/// The fixed layout of a frame: a separator and five header slots, followed by
/// four groups of buttons each introduced by another separator.
pub const FRAME_LAYOUT: [FrameSlot; FRAME_SLOTS] = [
    FrameSlot::Separator,
    FrameSlot::Header,
    FrameSlot::Header,
    FrameSlot::Header,
    FrameSlot::Header,
    FrameSlot::Header,
    FrameSlot::Separator,
    FrameSlot::Data(Button::Select),
    FrameSlot::Data(Button::Start),
    FrameSlot::Data(Button::R2),
    FrameSlot::Data(Button::Button4),
    FrameSlot::Separator,
    FrameSlot::Data(Button::L2),
    FrameSlot::Data(Button::Button2),
    FrameSlot::Data(Button::Button1),
    FrameSlot::Data(Button::Button3),
    FrameSlot::Separator,
    FrameSlot::Data(Button::L1),
    FrameSlot::Data(Button::R1),
    FrameSlot::Data(Button::Up),
    FrameSlot::Data(Button::Down),
    FrameSlot::Separator,
    FrameSlot::Data(Button::Right),
    FrameSlot::Data(Button::Left),
];

/// The SerialFramer structure models the Gravis GamePad Pro serial encoder. It is
/// a 24 state Moore machine: each falling clock edge moves it to the next slot,
/// and the slot decides what both data lines carry until the next edge.
pub struct SerialFramer {

    // Current slot within the frame.
    position: usize,

    // Data lines, bit 0 player one and bit 1 player two.
    output: u8,
}

impl SerialFramer {

    /// Creates a new SerialFramer object with the correct initial state.
    pub fn new() -> Self {
        SerialFramer {
            position: 0,
            output: 0,
        }
    }

    /// This function returns the framer to slot 0 with both lines low.
    pub fn reset(&mut self) {
        self.position = 0;
        self.output = 0;
    }

    /// This function returns the current frame slot.
    pub fn position(&self) -> usize {
        self.position
    }

    /// This function returns both data lines as a 2-bit value, player two in bit 1.
    pub fn output(&self) -> u8 {
        self.output
    }

    /// This function returns the data line of the specified player.
    pub fn data_line(&self, player: Player) -> bool {
        (self.output >> player.index()) & 0x1 != 0
    }

    /// This function computes the data line level for a player at the given slot.
    pub fn slot_level(position: usize, inputs: &ControllerInputs, player: Player) -> bool {
        match FRAME_LAYOUT[position] {
            FrameSlot::Separator => false,
            FrameSlot::Header => true,
            FrameSlot::Data(button) => inputs.is_held(player, button),
        }
    }

    /// This function advances to the next slot on a falling clock edge, loading the
    /// data lines for the slot being entered. Otherwise everything holds.
    pub fn clock(&mut self, falling_edge: bool, inputs: &ControllerInputs) {

        if !falling_edge {
            return;
        }

        self.position = (self.position + 1) % FRAME_SLOTS;
        if self.position == 0 {
            trace!("Gravis frame complete, starting next frame");
        }

        self.output = bit_at(Self::slot_level(self.position, inputs, Player::Two), 1)
            | bit_at(Self::slot_level(self.position, inputs, Player::One), 0);
    }
}
