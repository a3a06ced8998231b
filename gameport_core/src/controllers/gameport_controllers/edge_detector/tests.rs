// SPDX-License-Identifier: GPL-3.0
// tests.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

use super::EdgeDetector;

// Tests for the toggle synchronizer and falling edge detector.

#[test]
fn synced_should_lag_toggle_by_one_tick() {

    let mut detector = EdgeDetector::new();

    detector.clock(true);
    assert!(detector.synced());

    detector.clock(false);
    assert!(!detector.synced());
}

#[test]
fn falling_edge_should_be_reported_two_ticks_after_toggle_falls() {

    let mut detector = EdgeDetector::new();

    // Toggle high for a while.
    assert!(!detector.clock(true));
    assert!(!detector.clock(true));
    assert!(!detector.clock(true));

    // Toggle falls: synced falls after this tick, edge is seen on the next one.
    assert!(!detector.clock(false));
    assert!(detector.clock(false));

    // And it is reported exactly once.
    assert!(!detector.clock(false));
    assert!(!detector.clock(false));
}

#[test]
fn rising_edge_should_not_be_reported() {

    let mut detector = EdgeDetector::new();
    let mut edges = 0;

    for _ in 0..4 {
        if detector.clock(false) {
            edges += 1;
        }
    }
    for _ in 0..4 {
        if detector.clock(true) {
            edges += 1;
        }
    }

    assert_eq!(edges, 0);
}

#[test]
fn square_wave_should_give_one_edge_per_period() {

    let mut detector = EdgeDetector::new();
    let mut edges = 0;

    for tick in 0..100 {
        // Period of 10 ticks, high for the first 5.
        if detector.clock(tick % 10 < 5) {
            edges += 1;
        }
    }

    assert_eq!(edges, 10);
}

#[test]
fn reset_should_clear_pending_edge() {

    let mut detector = EdgeDetector::new();

    detector.clock(true);
    detector.clock(true);
    detector.clock(false);
    detector.reset();

    assert!(!detector.clock(false));
    assert!(!detector.synced());
}
