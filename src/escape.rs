// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The escape-time evaluator.  A point `c` is iterated through
//! `z <- z^2 + c` from `z = 0`; the first iteration at which `|z|`
//! exceeds 4 picks the colour, and points that never get there are in
//! the set and painted black.  Pure arithmetic, safe to call from any
//! number of threads at once.

use image::Rgba;
use num::Complex;

use crate::colour::hsv_to_rgb;

/// Default iteration budget per point.
pub const MAX_ITERATIONS: usize = 2000;

/// The colour of points inside the set.
pub const OPAQUE_BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

// |z| > 4, compared squared.
const ESCAPE_NORM_SQR: f64 = 16.0;

// Degrees of hue per iteration.
const HUE_STEP: usize = 7;

/// This is our classic iterator function, which either returns the
/// (zero-based) iteration at which the point escaped, or nothing at
/// all if it stayed bounded for `limit` iterations.
pub fn escape_time(c: Complex<f64>, limit: usize) -> Option<usize> {
    let mut z = Complex { re: 0.0, im: 0.0 };
    for i in 0..limit {
        z = z * z + c;
        if z.norm_sqr() > ESCAPE_NORM_SQR {
            return Some(i);
        }
    }
    None
}

/// The colour of a point that escaped at iteration `i`: hue `(i * 7) mod
/// 360` degrees at full saturation and value.
pub fn escape_colour(i: usize) -> Rgba<u8> {
    let degrees = (i % 360) * HUE_STEP % 360;
    let (r, g, b) = hsv_to_rgb(degrees as f64 / 360.0, 1.0, 1.0);
    Rgba([r, g, b, 255])
}

/// Colour a point with an explicit iteration budget.
pub fn colour_at(c: Complex<f64>, limit: usize) -> Rgba<u8> {
    match escape_time(c, limit) {
        Some(i) => escape_colour(i),
        None => OPAQUE_BLACK,
    }
}

/// Colour a point with the default budget of [`MAX_ITERATIONS`].
pub fn evaluate(c: Complex<f64>) -> Rgba<u8> {
    colour_at(c, MAX_ITERATIONS)
}
