// SPDX-License-Identifier: GPL-3.0
// lib.rs - Copyright Phillip Potter, 2026, under GPLv3 only.

// This crate contains useful utility functions that can be used throughout the codebase.

/// Exists to allow us to define custom trait operations on `u8`.
type CustomUnsigned8 = u8;

/// Exists to allow us to define custom trait operations on `u16`.
type CustomUnsigned16 = u16;

/// This trait exists to allow us to pick apart the packed button and analog fields
/// supplied by the capture layer in a readable way, rather than scattering shifts
/// and masks throughout the core.
pub trait BitField {

    type Output;

    /// This function should return whether the specified bit is set, with 0 being
    /// the least significant bit.
    fn bit(self, index: u32) -> bool;

    /// This function should return the specified byte of the value, with 0 being
    /// the least significant byte.
    fn byte(self, index: u32) -> u8;

    /// This function should return the value with its most significant bit inverted,
    /// which swaps between signed (centre 0) and unsigned (centre at half range)
    /// representations of the same position.
    fn invert_msb(self) -> Self::Output;
}

impl BitField for CustomUnsigned8 {

    type Output = u8;

    /// Tests the specified bit, 7 being most significant.
    #[inline(always)]
    fn bit(self, index: u32) -> bool {
        (self >> index) & 0x1 != 0
    }

    /// A `u8` only has byte 0, so this just returns the value itself.
    #[inline(always)]
    fn byte(self, _index: u32) -> u8 {
        self
    }

    /// Flips bit 7.
    #[inline(always)]
    fn invert_msb(self) -> Self::Output {
        self ^ 0x80
    }
}

impl BitField for CustomUnsigned16 {

    type Output = u16;

    /// Tests the specified bit, 15 being most significant.
    #[inline(always)]
    fn bit(self, index: u32) -> bool {
        (self >> index) & 0x1 != 0
    }

    /// Extracts byte 0 (bits 7:0) or byte 1 (bits 15:8).
    #[inline(always)]
    fn byte(self, index: u32) -> u8 {
        ((self >> (index * 8)) & 0xFF) as u8
    }

    /// Flips bit 15.
    #[inline(always)]
    fn invert_msb(self) -> Self::Output {
        self ^ 0x8000
    }
}

/// Converts a boolean line level into a bit, positioned at the specified index.
#[inline(always)]
pub fn bit_at(level: bool, index: u32) -> u8 {
    (level as u8) << index
}
