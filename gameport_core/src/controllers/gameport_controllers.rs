// SPDX-License-Identifier: GPL-3.0
// gameport_controllers.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use super::Controllers;
use super::inputs::{Axis, ControllerInputs, Player, SourceSelect};
use axis_timer::{AxisTimer, AXIS_CENTRE, AXIS_COUNT};
use edge_detector::EdgeDetector;
use log::debug;
use mode_arbiter::ModeArbiter;
use oscillator::Oscillator;
use output_composer::OutputComposer;
use serial_framer::SerialFramer;

/// This module contains the numerically-controlled oscillator that generates
/// the Gravis serial clock.
mod oscillator;

/// This module contains the synchronizer and falling edge detector sitting
/// between the oscillator and the serial framer.
mod edge_detector;

/// This module contains the four axis position timers and their shared divider.
mod axis_timer;

/// This module contains the per-player digital/analog source latch.
mod mode_arbiter;

/// This module contains the Gravis GamePad Pro frame encoder.
mod serial_framer;

/// This module maps buttons and serial lines onto the four shared button lines.
mod button_mux;

/// This module contains the status byte register.
mod output_composer;

/// This struct encapsulates the state of the game port: two analog/digital
/// sticks and a pair of Gravis GamePad Pro serial lines, all read by the host
/// through a single status byte.
pub struct GameportControllers {

    // Serial clock generation.
    oscillator: Oscillator,
    edge_detector: EdgeDetector,

    // Gravis frame encoder.
    serial_framer: SerialFramer,

    // Axis timing and source selection.
    axis_timer: AxisTimer,
    mode_arbiter: ModeArbiter,

    // Status byte register.
    output_composer: OutputComposer,

    // Trigger level seen on the previous tick, for edge detection.
    trigger_previous: bool,
}

/// Implementation functions for the Controllers component itself.
impl GameportControllers {

    /// Creates a new Controllers object with the correct initial state.
    pub fn new() -> Self {

        let mut controllers = GameportControllers {

            // Setup serial clock.
            oscillator: Oscillator::new(),
            edge_detector: EdgeDetector::new(),

            // Setup framer.
            serial_framer: SerialFramer::new(),

            // Setup axes.
            axis_timer: AxisTimer::new(),
            mode_arbiter: ModeArbiter::new(),

            // Setup status register.
            output_composer: OutputComposer::new(),

            // Setup trigger edge detection.
            trigger_previous: false,
        };

        controllers.reset();

        controllers
    }

    /// This function returns the current position of an axis timer.
    pub fn axis_position(&self, player: Player, axis: Axis) -> u8 {
        self.axis_timer.position(player, axis)
    }

    /// This function returns the latched source of a player's axes.
    pub fn source_select(&self, player: Player) -> SourceSelect {
        self.mode_arbiter.source(player)
    }

    /// This function returns the current Gravis frame slot.
    pub fn frame_position(&self) -> usize {
        self.serial_framer.position()
    }

    /// This function returns the Gravis data lines, player two in bit 1.
    pub fn gravis_output(&self) -> u8 {
        self.serial_framer.output()
    }

    /// This function returns the shared axis divider count.
    pub fn divider(&self) -> u32 {
        self.axis_timer.divider()
    }

    /// This function returns the synchronized serial clock level.
    pub fn clock_line(&self) -> bool {
        self.edge_detector.synced()
    }

    /// This function computes all four positions to be loaded on a trigger, using
    /// the sources latched at the start of the tick.
    fn sample_positions(
        sources: [SourceSelect; 2],
        inputs: &ControllerInputs
    ) -> [u8; AXIS_COUNT] {

        let mut positions = [AXIS_CENTRE; AXIS_COUNT];
        for player in Player::ALL {
            for axis in Axis::ALL {
                positions[AxisTimer::index(player, axis)] =
                    AxisTimer::sample(sources[player.index()], inputs, player, axis);
            }
        }
        positions
    }
}

/// Implementation functions to be called from anything that understands what
/// a Controllers object is.
impl Controllers for GameportControllers {

    /// This advances every component by one tick. All decisions are made from the
    /// registers as they stood at the start of the tick, before any is updated.
    fn step(&mut self, inputs: &ControllerInputs) {

        // Reset overrides everything else on this tick.
        if inputs.reset {
            self.reset();
            return;
        }

        // Take a snapshot of the registers other components depend on.
        let toggle = self.oscillator.toggle();
        let clock = self.edge_detector.synced();
        let gravis_data = [
            self.serial_framer.data_line(Player::One),
            self.serial_framer.data_line(Player::Two),
        ];
        let sources = [
            self.mode_arbiter.source(Player::One),
            self.mode_arbiter.source(Player::Two),
        ];
        let mut axes_active = [false; AXIS_COUNT];
        for player in Player::ALL {
            for axis in Axis::ALL {
                axes_active[AxisTimer::index(player, axis)] =
                    self.axis_timer.is_active(player, axis);
            }
        }
        let trigger_event = inputs.trigger && !self.trigger_previous;

        // Compose the status byte.
        let lines = button_mux::line_levels(inputs.mode, inputs, clock, gravis_data);
        self.output_composer.clock(inputs.mode, inputs.disable, axes_active, lines);

        // Advance the serial clock and framer.
        self.oscillator.clock(inputs.reference_frequency);
        let falling_edge = self.edge_detector.clock(toggle);
        self.serial_framer.clock(falling_edge, inputs);

        // Advance the axes, loading new positions on a trigger.
        let load = if trigger_event {
            let positions = Self::sample_positions(sources, inputs);
            debug!("Trigger loaded axis positions {:?}", positions);
            Some(positions)
        } else {
            None
        };
        self.axis_timer.clock(load);
        self.mode_arbiter.clock(inputs);

        self.trigger_previous = inputs.trigger;
    }

    /// This reads the registered status byte.
    fn read_status(&self) -> u8 {
        self.output_composer.status()
    }

    /// This puts every component back in its initial state.
    fn reset(&mut self) {

        debug!("Controllers reset");

        self.oscillator.reset();
        self.edge_detector.reset();
        self.serial_framer.reset();
        self.axis_timer.reset();
        self.mode_arbiter.reset();
        self.output_composer.reset();
        self.trigger_previous = false;
    }
}
