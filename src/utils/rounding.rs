// ABOUTME: Half-up rounding helpers used for every rounding step in the engine
// ABOUTME: Rounds ties toward positive infinity, including negative values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Rounding helpers
//!
//! `f64::round` rounds ties away from zero, so `-2.5` becomes `-3`. Macro
//! arithmetic needs ties to go toward positive infinity (`-2.5` becomes `-2`),
//! which is what these helpers do.

/// Round to the nearest integer, ties toward positive infinity
///
/// Non-finite input yields 0. Values beyond the `i64` range saturate.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_half_up(value: f64) -> i64 {
    if !value.is_finite() {
        return 0;
    }
    // Float-to-int `as` saturates at the i64 bounds
    (value + 0.5).floor() as i64
}

/// Round to one decimal place, ties toward positive infinity
///
/// Non-finite input yields 0.0.
#[must_use]
pub fn round_to_tenth(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    let tenths = value * 10.0;
    (tenths + 0.5).floor() / 10.0
}
