// SPDX-License-Identifier: GPL-3.0
// main.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

// This file is the core of the basic client - it exists merely as a CLI-based
// program to drive the game port with fixed inputs and watch the status byte
// a host would poll. In due course, a front end feeding real pads will likely
// take its place.

use clap::{Parser, ValueEnum};
use gameport_core::controllers::{
    Controllers,
    gameport_controllers::GameportControllers,
    inputs::{Axis, ControllerInputs, ControllerMode, Player, PlayerDisable},
};
use log::{debug, info, LevelFilter};

/// Modes selectable from the command line.
#[derive(Copy, Clone, ValueEnum)]
enum ModeArg {
    TwoButton,
    FourButton,
    Gravis,
    Disabled,
}

impl From<ModeArg> for ControllerMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::TwoButton => ControllerMode::TwoButton,
            ModeArg::FourButton => ControllerMode::FourButton,
            ModeArg::Gravis => ControllerMode::Gravis,
            ModeArg::Disabled => ControllerMode::Disabled,
        }
    }
}

#[derive(Parser)]
#[command(
    version,
    about = "A basic barebones driver for the game port controllers",
    long_about = None
)]
struct GameportArgs {
    #[arg(
        long = "reference-frequency",
        help = "Ticks per second of the driving clock",
        default_value_t = 30_000_000
    )]
    reference_frequency: u32,

    #[arg(
        long = "mode",
        help = "Button line arrangement",
        value_enum,
        default_value_t = ModeArg::TwoButton
    )]
    mode: ModeArg,

    #[arg(
        long = "ticks",
        help = "Number of ticks to run",
        default_value_t = 100_000
    )]
    ticks: u64,

    #[arg(
        long = "trigger-every",
        help = "Pulse the trigger every this many ticks (0 for never)",
        default_value_t = 0
    )]
    trigger_every: u64,

    #[arg(
        long = "p1-buttons",
        help = "Player one digital button field (14 bits, hex with 0x or decimal)",
        value_parser = parse_button_field,
        default_value = "0"
    )]
    p1_buttons: u16,

    #[arg(
        long = "p2-buttons",
        help = "Player two digital button field (14 bits, hex with 0x or decimal)",
        value_parser = parse_button_field,
        default_value = "0"
    )]
    p2_buttons: u16,

    #[arg(
        long = "p1-analog",
        help = "Player one analog field, Y in the high byte (hex with 0x or decimal)",
        value_parser = parse_number,
        default_value = "0"
    )]
    p1_analog: u16,

    #[arg(
        long = "p2-analog",
        help = "Player two analog field, Y in the high byte (hex with 0x or decimal)",
        value_parser = parse_number,
        default_value = "0"
    )]
    p2_analog: u16,

    #[arg(long = "disable-p1", help = "Disable player one")]
    disable_p1: bool,

    #[arg(long = "disable-p2", help = "Disable player two")]
    disable_p2: bool,

    #[arg(
        long = "verbose",
        help = "Log every status byte change"
    )]
    verbose: bool,
}

/// Parses a 16-bit value given either in decimal or in hex with a 0x prefix.
fn parse_number(text: &str) -> Result<u16, String> {

    let parsed = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => text.parse::<u16>(),
    };

    parsed.map_err(|error| format!("'{}' is not a 16-bit value: {}", text, error))
}

/// Parses a digital button field, rejecting bits above the 14 buttons.
fn parse_button_field(text: &str) -> Result<u16, String> {

    let field = parse_number(text)?;
    if field > 0x3FFF {
        return Err(format!("'{}' has bits set above the 14 buttons", text));
    }
    Ok(field)
}

fn main() {
    let gameport_args = GameportArgs::parse();

    let mut logger = colog::default_builder();
    logger.filter_level(if gameport_args.verbose { LevelFilter::Debug } else { LevelFilter::Info });
    logger.init();

    let mut inputs = ControllerInputs::new(gameport_args.reference_frequency);
    inputs.mode = gameport_args.mode.into();
    inputs.digital = [gameport_args.p1_buttons, gameport_args.p2_buttons];
    inputs.analog = [gameport_args.p1_analog, gameport_args.p2_analog];
    inputs.disable = PlayerDisable {
        player_one: gameport_args.disable_p1,
        player_two: gameport_args.disable_p2,
    };

    let mut controllers = GameportControllers::new();
    let mut status = controllers.read_status();
    let mut status_changes = 0_u64;

    info!(
        "Running {} ticks at {} Hz in {:?} mode",
        gameport_args.ticks, gameport_args.reference_frequency, inputs.mode
    );

    for tick in 0..gameport_args.ticks {

        // Hold the trigger for a single tick each time it is due.
        inputs.trigger = gameport_args.trigger_every != 0 && tick % gameport_args.trigger_every == 0;
        controllers.step(&inputs);

        let new_status = controllers.read_status();
        if new_status != status {
            debug!("Tick {}: status {:#04x} -> {:#04x}", tick, status, new_status);
            status = new_status;
            status_changes += 1;
        }
    }

    info!("Final status byte: {:#04x} ({} changes)", status, status_changes);
    for player in Player::ALL {
        info!(
            "Player {:?}: X {} Y {} from {:?}",
            player,
            controllers.axis_position(player, Axis::X),
            controllers.axis_position(player, Axis::Y),
            controllers.source_select(player)
        );
    }
    info!(
        "Gravis frame slot {} with data lines {:#04b}",
        controllers.frame_position(),
        controllers.gravis_output()
    );
}
