// SPDX-License-Identifier: GPL-3.0
// tests.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use super::{Axis, Button, ControllerInputs, ControllerMode, Player, PlayerDisable};

// Tests for the per-tick input contract.

#[test]
fn mode_selector_should_decode_all_four_codes() {

    assert_eq!(ControllerMode::from_bits(0), ControllerMode::TwoButton);
    assert_eq!(ControllerMode::from_bits(1), ControllerMode::FourButton);
    assert_eq!(ControllerMode::from_bits(2), ControllerMode::Gravis);
    assert_eq!(ControllerMode::from_bits(3), ControllerMode::Disabled);
}

#[test]
fn mode_selector_should_ignore_upper_bits() {

    assert_eq!(ControllerMode::from_bits(0xFE), ControllerMode::Gravis);
}

#[test]
fn disable_mask_should_map_bit_0_to_player_one() {

    let disable = PlayerDisable::from_mask(0b01);

    assert!(disable.is_disabled(Player::One));
    assert!(!disable.is_disabled(Player::Two));

    let disable = PlayerDisable::from_mask(0b10);

    assert!(!disable.is_disabled(Player::One));
    assert!(disable.is_disabled(Player::Two));
}

#[test]
fn buttons_should_be_decoded_per_player() {

    let mut inputs = ControllerInputs::new(1_000_000);
    inputs.digital[0] = 1 << (Button::Select as u32);
    inputs.digital[1] = 1 << (Button::L2 as u32);

    assert!(inputs.is_held(Player::One, Button::Select));
    assert!(!inputs.is_held(Player::One, Button::L2));
    assert!(inputs.is_held(Player::Two, Button::L2));
    assert!(!inputs.is_held(Player::Two, Button::Select));
}

#[test]
fn bits_above_the_button_field_should_be_ignored() {

    let mut inputs = ControllerInputs::new(1_000_000);
    inputs.digital[0] = 0xC000;

    assert_eq!(inputs.buttons(Player::One), 0);
    assert!(!inputs.any_direction_held(Player::One));
}

#[test]
fn any_direction_held_should_only_consider_directions() {

    let mut inputs = ControllerInputs::new(1_000_000);
    inputs.digital[0] = 1 << (Button::Button1 as u32);

    assert!(!inputs.any_direction_held(Player::One));

    inputs.digital[0] |= 1 << (Button::Up as u32);

    assert!(inputs.any_direction_held(Player::One));
}

#[test]
fn axis_byte_should_split_analog_field() {

    let mut inputs = ControllerInputs::new(1_000_000);
    inputs.analog[1] = 0x40C0;

    assert_eq!(inputs.axis_byte(Player::Two, Axis::X), 0xC0);
    assert_eq!(inputs.axis_byte(Player::Two, Axis::Y), 0x40);
    assert_eq!(inputs.axis_byte(Player::One, Axis::X), 0x00);
}

#[test]
fn axis_directions_should_match_field_layout() {

    assert_eq!(Axis::X.negative_direction(), Button::Left);
    assert_eq!(Axis::X.positive_direction(), Button::Right);
    assert_eq!(Axis::Y.negative_direction(), Button::Up);
    assert_eq!(Axis::Y.positive_direction(), Button::Down);
}
