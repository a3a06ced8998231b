// SPDX-License-Identifier: GPL-3.0
// button_mux.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use crate::controllers::inputs::{Button, ControllerInputs, ControllerMode, Player};

/// The number of shared button lines on the port.
pub const BUTTON_LINES: usize = 4;

/// This function returns which player owns a button line in a given mode, which
/// decides which disable flag applies to it. Lines are numbered from 0.
pub fn line_owner(mode: ControllerMode, line: usize) -> Player {
    match (mode, line) {
        (_, 0 | 1) => Player::One,
        (ControllerMode::FourButton, _) => Player::One,
        _ => Player::Two,
    }
}

/// This function computes the electrical level of each button line. Buttons are
/// active-low, so a held button drives its line low. In Gravis mode the lines
/// carry the serial clock (lines 0 and 2) and each player's data (lines 1 and 3)
/// exactly as generated.
pub fn line_levels(
    mode: ControllerMode,
    inputs: &ControllerInputs,
    clock: bool,
    gravis_data: [bool; 2]
) -> [bool; BUTTON_LINES] {

    let released = |player: Player, button: Button| !inputs.is_held(player, button);

    match mode {

        // Two sticks, two buttons each.
        ControllerMode::TwoButton => [
            released(Player::One, Button::Button1),
            released(Player::One, Button::Button2),
            released(Player::Two, Button::Button1),
            released(Player::Two, Button::Button2),
        ],

        // One stick with four buttons.
        ControllerMode::FourButton => [
            released(Player::One, Button::Button1),
            released(Player::One, Button::Button2),
            released(Player::One, Button::Button3),
            released(Player::One, Button::Button4),
        ],

        // Clock and data for each GamePad Pro.
        ControllerMode::Gravis => [
            clock,
            gravis_data[Player::One.index()],
            clock,
            gravis_data[Player::Two.index()],
        ],

        // Nothing driven.
        ControllerMode::Disabled => [true; BUTTON_LINES],
    }
}
