// SPDX-License-Identifier: GPL-3.0
// lib.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

// Crate-wide lines to disable specific lints:

// Every component is built through an explicit new() that then resets it, in
// the same way as the real hardware powers up, so there are no derived
// Default implementations.
#![allow(clippy::new_without_default)]

/// This module contains game port controller related functionality.
pub mod controllers;
