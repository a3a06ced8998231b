// SPDX-License-Identifier: GPL-3.0
// inputs.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use gameport_utility::BitField;

/// Only the low 14 bits of a digital button field carry buttons.
pub const DIGITAL_FIELD_MASK: u16 = 0x3FFF;

/// The four directional bits (Right, Left, Down, Up) of a digital button field.
pub const DIRECTION_MASK: u16 = 0x000F;

/// This enum represents every button in a digital button field as supplied by the
/// capture layer. Bit positions are listed explicitly for clarity.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[repr(u32)]
pub enum Button {
    Right = 0,
    Left = 1,
    Down = 2,
    Up = 3,
    Button1 = 4,
    Button2 = 5,
    Button3 = 6,
    Button4 = 7,
    Start = 8,
    Select = 9,
    R1 = 10,
    L1 = 11,
    R2 = 12,
    L2 = 13,
}

/// This enum represents the externally selected arrangement of the button lines.
/// Selector codes are listed explicitly for clarity.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[repr(u8)]
pub enum ControllerMode {
    TwoButton = 0,
    FourButton = 1,
    Gravis = 2,
    Disabled = 3,
}

impl ControllerMode {

    /// Decodes the 2-bit mode selector. Only the low two bits are considered,
    /// so every input value maps to a mode.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x3 {
            0 => ControllerMode::TwoButton,
            1 => ControllerMode::FourButton,
            2 => ControllerMode::Gravis,
            _ => ControllerMode::Disabled,
        }
    }
}

/// One of the two players.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {

    /// Both players, in port order.
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    /// Index of this player into per-player arrays.
    pub fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// One of the two axes of a player's stick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Axis {
    X,
    Y,
}

impl Axis {

    /// Both axes, in field order.
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// Index of this axis into per-axis arrays, which also happens to be
    /// the byte index within a packed analog field.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
        }
    }

    /// The digital direction that pulls this axis towards its minimum.
    pub fn negative_direction(self) -> Button {
        match self {
            Axis::X => Button::Left,
            Axis::Y => Button::Up,
        }
    }

    /// The digital direction that pulls this axis towards its maximum.
    pub fn positive_direction(self) -> Button {
        match self {
            Axis::X => Button::Right,
            Axis::Y => Button::Down,
        }
    }
}

/// Which source a player's axis positions are loaded from on a trigger.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SourceSelect {
    UseDigitalPad,
    UseAnalogStick,
}

/// Per-player disable flags. A disabled player's status bits read as high.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct PlayerDisable {
    pub player_one: bool,
    pub player_two: bool,
}

impl PlayerDisable {

    /// Decodes the 2-bit disable mask, bit 0 being player one.
    pub fn from_mask(mask: u8) -> Self {
        PlayerDisable {
            player_one: mask.bit(0),
            player_two: mask.bit(1),
        }
    }

    /// Returns whether the given player is disabled.
    pub fn is_disabled(&self, player: Player) -> bool {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }
}

/// This struct is the complete set of inputs sampled by the controllers on a
/// single tick.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct ControllerInputs {

    // Ticks per second of the clock driving the controllers.
    pub reference_frequency: u32,

    // Packed digital button fields, one per player.
    pub digital: [u16; 2],

    // Packed analog fields, one per player: X in bits 7:0, Y in bits 15:8.
    pub analog: [u16; 2],

    // Line arrangement and per-player disables.
    pub mode: ControllerMode,
    pub disable: PlayerDisable,

    // Position sampling request (edge-sensitive) and reset (level).
    pub trigger: bool,
    pub reset: bool,
}

impl ControllerInputs {

    /// Creates an input set for the given reference frequency with nothing held,
    /// both sticks absent, two-button mode and both players enabled.
    pub fn new(reference_frequency: u32) -> Self {
        ControllerInputs {
            reference_frequency,
            digital: [0; 2],
            analog: [0; 2],
            mode: ControllerMode::TwoButton,
            disable: PlayerDisable::default(),
            trigger: false,
            reset: false,
        }
    }

    /// Returns the player's digital field with any bits above the 14 buttons cleared.
    pub fn buttons(&self, player: Player) -> u16 {
        self.digital[player.index()] & DIGITAL_FIELD_MASK
    }

    /// Returns whether the given button is held by the given player.
    pub fn is_held(&self, player: Player, button: Button) -> bool {
        self.buttons(player).bit(button as u32)
    }

    /// Returns whether any of the player's four directions is held.
    pub fn any_direction_held(&self, player: Player) -> bool {
        self.buttons(player) & DIRECTION_MASK != 0
    }

    /// Returns the raw analog byte for the given player and axis.
    pub fn axis_byte(&self, player: Player, axis: Axis) -> u8 {
        self.analog[player.index()].byte(axis.index() as u32)
    }
}

#[cfg(test)]
mod tests;
