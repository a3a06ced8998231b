// SPDX-License-Identifier: GPL-3.0
// tests.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use super::{OutputComposer, STATUS_IDLE};
use crate::controllers::inputs::{ControllerMode, PlayerDisable};

// Tests for the status byte composer.

const ALL_MODES: [ControllerMode; 4] = [
    ControllerMode::TwoButton,
    ControllerMode::FourButton,
    ControllerMode::Gravis,
    ControllerMode::Disabled,
];

#[test]
fn new_composer_should_read_idle() {

    let composer = OutputComposer::new();

    assert_eq!(composer.status(), STATUS_IDLE);
}

#[test]
fn disabled_mode_should_always_read_ff() {

    for mask in 0..4 {
        for axes in 0..16_u8 {
            for lines in 0..16_u8 {
                let axes_active = [axes & 1 != 0, axes & 2 != 0, axes & 4 != 0, axes & 8 != 0];
                let levels = [lines & 1 != 0, lines & 2 != 0, lines & 4 != 0, lines & 8 != 0];
                let status = OutputComposer::compose(
                    ControllerMode::Disabled,
                    PlayerDisable::from_mask(mask),
                    axes_active,
                    levels,
                );
                assert_eq!(status, 0xFF);
            }
        }
    }
}

#[test]
fn axis_bits_should_follow_activity() {

    let status = OutputComposer::compose(
        ControllerMode::TwoButton,
        PlayerDisable::default(),
        [true, false, false, true],
        [false; 4],
    );

    assert_eq!(status, 0b0000_1001);
}

#[test]
fn button_bits_should_follow_line_levels() {

    let status = OutputComposer::compose(
        ControllerMode::TwoButton,
        PlayerDisable::default(),
        [false; 4],
        [true, false, true, false],
    );

    assert_eq!(status, 0b0101_0000);
}

#[test]
fn disabled_player_one_should_force_its_bits_high_in_two_button_mode() {

    let status = OutputComposer::compose(
        ControllerMode::TwoButton,
        PlayerDisable::from_mask(0b01),
        [false; 4],
        [false; 4],
    );

    assert_eq!(status, 0b0011_0011);
}

#[test]
fn disabled_player_two_should_force_its_bits_high_in_two_button_mode() {

    let status = OutputComposer::compose(
        ControllerMode::TwoButton,
        PlayerDisable::from_mask(0b10),
        [false; 4],
        [false; 4],
    );

    assert_eq!(status, 0b1100_1100);
}

#[test]
fn four_button_mode_should_tie_all_buttons_to_player_one() {

    let status = OutputComposer::compose(
        ControllerMode::FourButton,
        PlayerDisable::from_mask(0b01),
        [false; 4],
        [false; 4],
    );
    assert_eq!(status, 0b1111_0011);

    let status = OutputComposer::compose(
        ControllerMode::FourButton,
        PlayerDisable::from_mask(0b10),
        [false; 4],
        [false; 4],
    );
    assert_eq!(status, 0b0000_1100);
}

#[test]
fn both_disabled_should_read_ff_in_every_mode() {

    for mode in ALL_MODES {
        let status = OutputComposer::compose(
            mode,
            PlayerDisable::from_mask(0b11),
            [false; 4],
            [false; 4],
        );
        assert_eq!(status, 0xFF, "mode {:?}", mode);
    }
}

#[test]
fn clock_should_latch_composed_status() {

    let mut composer = OutputComposer::new();
    composer.clock(
        ControllerMode::Gravis,
        PlayerDisable::default(),
        [false; 4],
        [true, false, true, true],
    );

    assert_eq!(composer.status(), 0b1101_0000);

    composer.reset();

    assert_eq!(composer.status(), STATUS_IDLE);
}
